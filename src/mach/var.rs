/// ## Variable names
///
/// TinyBasic Plus has exactly 26 variables, `A` through `Z`, each a
/// signed 16-bit slot in the variable table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Var(u8);

impl Var {
    pub const COUNT: usize = 26;

    pub fn from_byte(ch: u8) -> Option<Var> {
        if ch.is_ascii_uppercase() {
            Some(Var(ch))
        } else {
            None
        }
    }

    pub fn from_char(ch: char) -> Option<Var> {
        if ch.is_ascii() {
            Var::from_byte(ch.to_ascii_uppercase() as u8)
        } else {
            None
        }
    }

    pub fn letter(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0 - b'A')
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(self.0))
    }
}
