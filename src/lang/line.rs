use super::LineNumber;

/// One stored program line, borrowed from the program buffer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Line<'a> {
    number: LineNumber,
    text: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn new(number: LineNumber, text: &'a [u8]) -> Line<'a> {
        Line { number, text }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// Statement text without the line marker.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, String::from_utf8_lossy(self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let line = Line::new(100, b"PRINT \"HI\"");
        assert_eq!(line.to_string(), "100 PRINT \"HI\"");
    }
}
