use super::{token::Table, Column, LineNumber, LINE_MARKER};

fn is_basic_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_basic_alphabetic(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Cursor over program text. Every line ends with `LINE_MARKER`, and
/// reading past the end of the slice also yields the marker, so a
/// scan can never run off a line.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a [u8],
    pos: Column,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a [u8], pos: Column) -> Scanner<'a> {
        Scanner { text, pos }
    }

    pub fn position(&self) -> Column {
        self.pos
    }

    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> u8 {
        match self.text.get(self.pos + offset) {
            Some(&ch) => ch,
            None => LINE_MARKER,
        }
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn ignore_blanks(&mut self) {
        while is_basic_whitespace(self.peek()) {
            self.pos += 1;
        }
    }

    pub fn at_end_of_line(&self) -> bool {
        self.peek() == LINE_MARKER
    }

    pub fn at_end_of_statement(&self) -> bool {
        self.peek() == LINE_MARKER || self.peek() == b':'
    }

    /// Consume `ch` if it is next, skipping blanks either side.
    pub fn expect(&mut self, ch: u8) -> bool {
        self.ignore_blanks();
        if self.peek() != ch {
            return false;
        }
        self.pos += 1;
        self.ignore_blanks();
        true
    }

    /// Match the table against the text at the cursor, skipping blanks
    /// before and after. The cursor only moves past a token on a match.
    pub fn scan<T: Table>(&mut self) -> Option<T> {
        self.ignore_blanks();
        let rest = self.text.get(self.pos..).unwrap_or(&[]);
        let (token, len) = T::from_prefix(rest)?;
        self.pos += len;
        self.ignore_blanks();
        Some(token)
    }

    /// A variable letter: an upper case letter not followed by another.
    pub fn letter(&self) -> Option<u8> {
        let ch = self.peek();
        if is_basic_alphabetic(ch) && !is_basic_alphabetic(self.peek_at(1)) {
            Some(ch)
        } else {
            None
        }
    }

    /// Two letters in a row start a function name.
    pub fn is_name(&self) -> bool {
        is_basic_alphabetic(self.peek()) && is_basic_alphabetic(self.peek_at(1))
    }

    /// Decimal digits as a line number. Saturates at `LineNumber::MAX`
    /// instead of wrapping; no digits at all is line 0.
    pub fn line_number(&mut self) -> LineNumber {
        let mut num: LineNumber = 0;
        self.ignore_blanks();
        while self.peek().is_ascii_digit() {
            if num >= LineNumber::MAX / 10 {
                num = LineNumber::MAX;
                break;
            }
            num = num * 10 + LineNumber::from(self.peek() - b'0');
            self.pos += 1;
        }
        num
    }

    /// A string literal delimited by `"` or `'`. The delimiter must close
    /// before the end of the line or nothing is consumed.
    pub fn quoted(&mut self) -> Option<&'a [u8]> {
        let delim = self.peek();
        if delim != b'"' && delim != b'\'' {
            return None;
        }
        let start = self.pos + 1;
        let mut end = start;
        loop {
            match self.text.get(end) {
                Some(&ch) if ch == delim => break,
                Some(&ch) if ch != LINE_MARKER => end += 1,
                _ => return None,
            }
        }
        self.pos = end + 1;
        Some(&self.text[start..end])
    }
}

/// Upper case a marker-terminated entry line in place, leaving quoted
/// strings alone.
pub fn normalize(text: &mut [u8]) {
    let mut quote = None;
    for ch in text.iter_mut() {
        if *ch == LINE_MARKER {
            break;
        }
        if Some(*ch) == quote {
            quote = None;
        } else if quote.is_none() && (*ch == b'"' || *ch == b'\'') {
            quote = Some(*ch);
        } else if quote.is_none() {
            ch.make_ascii_uppercase();
        }
    }
}
