/// A static, ordered table of spellings. Scanning takes the first entry
/// whose spelling prefixes the input, so longer spellings sharing a
/// prefix with a shorter one must come first.
pub trait Table: Sized + Copy + 'static {
    const TABLE: &'static [(&'static str, Self)];

    fn from_prefix(s: &[u8]) -> Option<(Self, usize)> {
        Self::TABLE
            .iter()
            .find(|(spelling, _)| s.starts_with(spelling.as_bytes()))
            .map(|(spelling, token)| (*token, spelling.len()))
    }

    fn spelling(self) -> &'static str
    where
        Self: PartialEq,
    {
        Self::TABLE
            .iter()
            .find(|(_, token)| *token == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or("")
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    List,
    Load,
    Save,
    New,
    Run,
    Next,
    Let,
    If,
    Goto,
    Gosub,
    Return,
    Rem1,
    For,
    Input,
    Print1,
    Poke,
    Stop,
    Bye,
    Mem,
    Rseed,
    Print2,
    Rem2,
    End,
}

impl Table for Word {
    const TABLE: &'static [(&'static str, Word)] = &[
        ("LIST", Word::List),
        ("LOAD", Word::Load),
        ("SAVE", Word::Save),
        ("NEW", Word::New),
        ("RUN", Word::Run),
        ("NEXT", Word::Next),
        ("LET", Word::Let),
        ("IF", Word::If),
        ("GOTO", Word::Goto),
        ("GOSUB", Word::Gosub),
        ("RETURN", Word::Return),
        ("REM", Word::Rem1),
        ("FOR", Word::For),
        ("INPUT", Word::Input),
        ("PRINT", Word::Print1),
        ("POKE", Word::Poke),
        ("STOP", Word::Stop),
        ("BYE", Word::Bye),
        ("MEM", Word::Mem),
        ("RSEED", Word::Rseed),
        ("?", Word::Print2),
        ("'", Word::Rem2),
        ("END", Word::End),
    ];
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Function {
    Peek,
    Abs,
    Aread,
    Dread,
    Rnd,
}

impl Table for Function {
    const TABLE: &'static [(&'static str, Function)] = &[
        ("PEEK", Function::Peek),
        ("ABS", Function::Abs),
        ("AREAD", Function::Aread),
        ("DREAD", Function::Dread),
        ("RND", Function::Rnd),
    ];
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    GreaterEqual,
    NotEqual,
    Greater,
    Equal,
    LessEqual,
    Less,
}

impl Table for Relation {
    const TABLE: &'static [(&'static str, Relation)] = &[
        (">=", Relation::GreaterEqual),
        ("<>", Relation::NotEqual),
        (">", Relation::Greater),
        ("=", Relation::Equal),
        ("<=", Relation::LessEqual),
        ("<", Relation::Less),
        ("!=", Relation::NotEqual),
    ];
}

/// `TO` in `FOR`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct To;

impl Table for To {
    const TABLE: &'static [(&'static str, To)] = &[("TO", To)];
}

/// `STEP` in `FOR`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Step;

impl Table for Step {
    const TABLE: &'static [(&'static str, Step)] = &[("STEP", Step)];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
