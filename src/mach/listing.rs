use super::{program::ENTRY_HEADROOM, Program};
use crate::error;
use crate::lang::{Column, Error, Line, LineNumber, LINE_MARKER};

type Result<T> = std::result::Result<T, Error>;

/// Line number (2 bytes) and record length (1 byte).
pub const LINE_HEADER: usize = 3;

/// Free bytes that must remain after any edit so an empty line can
/// still be typed.
const ENTRY_RESERVE: usize = ENTRY_HEADROOM + 2;

/// ## Line store
///
/// Each record is `number: u16 LE, length: u8, text.., LINE_MARKER`,
/// where `length` counts the whole record. Records are contiguous and
/// strictly ascending by number.

impl Program {
    pub fn line_number_at(&self, addr: Column) -> LineNumber {
        LineNumber::from_le_bytes([self.ram[addr], self.ram[addr + 1]])
    }

    fn record_len_at(&self, addr: Column) -> usize {
        usize::from(self.ram[addr + 2])
    }

    /// Length of the record at `addr`, or `None` when `addr` is not the
    /// start of a whole record.
    fn record_at(&self, addr: Column) -> Option<usize> {
        if addr + LINE_HEADER >= self.program_end {
            return None;
        }
        let len = self.record_len_at(addr);
        if len < LINE_HEADER + 1 || addr + len > self.program_end {
            return None;
        }
        Some(len)
    }

    /// Address of the first record numbered `number` or higher, which is
    /// `program_end` when there is none.
    pub fn find_line(&self, number: LineNumber) -> Column {
        let mut addr = 0;
        while addr < self.program_end {
            if self.line_number_at(addr) >= number {
                return addr;
            }
            addr = self.next_line(addr);
        }
        self.program_end
    }

    /// Start of the record after `addr`, or `program_end` when `addr`
    /// does not hold a whole record.
    pub fn next_line(&self, addr: Column) -> Column {
        match self.record_at(addr) {
            Some(len) => addr + len,
            None => self.program_end,
        }
    }

    /// Where the statement text of the record at `addr` begins.
    pub fn text_start(addr: Column) -> Column {
        addr + LINE_HEADER
    }

    pub fn line_at(&self, addr: Column) -> Option<Line<'_>> {
        let len = self.record_at(addr)?;
        let start = Program::text_start(addr);
        let end = addr + len - 1;
        Some(Line::new(self.line_number_at(addr), &self.ram[start..end]))
    }

    pub fn lines(&self) -> Lines<'_> {
        self.lines_from(0)
    }

    pub fn lines_from(&self, number: LineNumber) -> Lines<'_> {
        Lines {
            program: self,
            addr: self.find_line(number),
        }
    }

    /// Store `text` as line `number`, replacing any line with that number.
    /// Empty text deletes the line. On failure nothing is changed.
    pub fn upsert(&mut self, number: LineNumber, text: &[u8]) -> Result<()> {
        if number == 0 || number == LineNumber::MAX {
            return Err(error!(IllegalFunctionCall; "INVALID LINE NUMBER"));
        }
        if text.contains(&LINE_MARKER) {
            return Err(error!(SyntaxError; "LINE MARKER IN TEXT"));
        }
        let record_len = LINE_HEADER + text.len() + 1;
        if record_len > usize::from(u8::MAX) || record_len + ENTRY_RESERVE > self.free() {
            return Err(error!(OutOfMemory; "LINE DOES NOT FIT"));
        }
        let body = self.variables_begin - text.len() - 1;
        self.ram[body..body + text.len()].copy_from_slice(text);
        self.ram[self.variables_begin - 1] = LINE_MARKER;
        self.insert_staged(number, body)
    }

    /// Merge a staged line into the program. The body starts at `body`
    /// and ends with the marker just below the variables; the header is
    /// written into the three bytes before it.
    pub(crate) fn insert_staged(&mut self, number: LineNumber, body: Column) -> Result<()> {
        if body < self.program_end + LINE_HEADER + 1 {
            return Err(error!(OutOfMemory; "NO ROOM FOR HEADER"));
        }
        let mut from = body - LINE_HEADER;
        let record_len = self.variables_begin - from;
        if record_len > usize::from(u8::MAX) {
            return Err(error!(OutOfMemory; "LINE TOO LONG"));
        }
        let mut start = self.find_line(number);
        let existing = if start != self.program_end && self.line_number_at(start) == number {
            self.record_len_at(start)
        } else {
            0
        };
        let is_delete = self.ram[body] == LINE_MARKER;
        let new_end = self.program_end - existing + if is_delete { 0 } else { record_len };
        if new_end + ENTRY_RESERVE > self.variables_begin {
            return Err(error!(OutOfMemory; "PROGRAM AREA FULL"));
        }

        if existing > 0 {
            let next = start + existing;
            self.ram.copy_within(next..self.program_end, start);
            self.program_end -= existing;
            log::debug!("removed line {}", number);
        }
        if existing > 0 || !is_delete {
            // Frames hold line addresses, which are stale once lines move.
            self.clear_stack();
        }
        if is_delete {
            return Ok(());
        }
        self.ram[from..from + 2].copy_from_slice(&number.to_le_bytes());
        self.ram[from + 2] = record_len as u8;

        // The record may be bigger than the gap between it and the
        // program, so open the hole in as many steps as it takes.
        let mut remaining = record_len;
        while remaining > 0 {
            let space = (from - self.program_end).min(remaining);
            self.ram.copy_within(start..self.program_end, start + space);
            self.ram.copy_within(from..from + space, start);
            from += space;
            start += space;
            remaining -= space;
            self.program_end += space;
        }
        log::debug!("stored line {} ({} bytes)", number, record_len);
        Ok(())
    }
}

/// Iterator over stored lines in ascending order.
pub struct Lines<'a> {
    program: &'a Program,
    addr: Column,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.program.line_at(self.addr)?;
        self.addr = self.program.next_line(self.addr);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::{Frame, GOSUB_FRAME_SIZE};

    fn numbers(p: &Program) -> Vec<LineNumber> {
        p.lines().map(|l| l.number()).collect()
    }

    #[test]
    fn test_insert_out_of_order() {
        let mut p = Program::new(1024, 5);
        p.upsert(30, b"PRINT 3").unwrap();
        p.upsert(10, b"PRINT 1").unwrap();
        p.upsert(20, b"PRINT 2").unwrap();
        assert_eq!(numbers(&p), vec![10, 20, 30]);
        let texts: Vec<String> = p.lines().map(|l| l.to_string()).collect();
        assert_eq!(texts, vec!["10 PRINT 1", "20 PRINT 2", "30 PRINT 3"]);
    }

    #[test]
    fn test_replace_and_delete() {
        let mut p = Program::new(1024, 5);
        p.upsert(10, b"A=1").unwrap();
        p.upsert(20, b"B=2").unwrap();
        p.upsert(30, b"C=3").unwrap();
        p.upsert(20, b"B=22222").unwrap();
        assert_eq!(numbers(&p), vec![10, 20, 30]);
        assert_eq!(p.line_at(p.find_line(20)).unwrap().text(), b"B=22222");
        p.upsert(20, b"").unwrap();
        assert_eq!(numbers(&p), vec![10, 30]);
        let a = p.find_line(10);
        let c = p.find_line(30);
        assert_eq!(p.next_line(a), c);
        assert_eq!(p.record_len_at(a), LINE_HEADER + 4);
        assert_eq!(p.record_len_at(c), LINE_HEADER + 4);
        assert_eq!(p.program_end(), 2 * (LINE_HEADER + 4));
    }

    #[test]
    fn test_delete_missing_line() {
        let mut p = Program::new(1024, 5);
        p.upsert(10, b"A=1").unwrap();
        p.upsert(15, b"").unwrap();
        assert_eq!(numbers(&p), vec![10]);
    }

    #[test]
    fn test_find_line_falls_through() {
        let mut p = Program::new(1024, 5);
        p.upsert(10, b"A=1").unwrap();
        p.upsert(30, b"C=3").unwrap();
        assert_eq!(p.line_number_at(p.find_line(20)), 30);
        assert_eq!(p.find_line(31), p.program_end());
        assert_eq!(p.lines_from(11).count(), 1);
    }

    #[test]
    fn test_invalid_numbers() {
        let mut p = Program::new(1024, 5);
        let e = p.upsert(0, b"A=1").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalFunctionCall);
        let e = p.upsert(u16::MAX, b"A=1").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalFunctionCall);
    }

    #[test]
    fn test_full_buffer_is_unmodified() {
        let mut p = Program::new(1024, 5);
        let text = [b'X'; 200];
        let mut n = 10;
        let err = loop {
            match p.upsert(n, &text) {
                Ok(()) => n += 10,
                Err(e) => break e,
            }
        };
        assert_eq!(err.code(), ErrorCode::OutOfMemory);
        let before = p.program_end();
        let count = p.lines().count();
        assert!(p.upsert(5, &text).is_err());
        assert_eq!(p.program_end(), before);
        assert_eq!(p.lines().count(), count);
        assert!(p.lines().all(|l| l.text() == &text[..]));
    }

    #[test]
    fn test_record_too_long() {
        let mut p = Program::new(4096, 5);
        let e = p.upsert(10, &[b'X'; 252]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert!(p.upsert(10, &[b'X'; 251]).is_ok());
    }

    #[test]
    fn test_insert_into_small_gap() {
        // Leave a gap smaller than the record so it moves in pieces.
        let mut p = Program::new(1024, 5);
        let filler = [b'F'; 200];
        p.upsert(100, &filler).unwrap();
        p.upsert(200, &filler).unwrap();
        p.upsert(300, &filler).unwrap();
        p.upsert(400, &filler[..150]).unwrap();
        let free = p.free();
        let text = vec![b'N'; free - LINE_HEADER - 1 - ENTRY_RESERVE];
        p.upsert(150, &text).unwrap();
        assert_eq!(numbers(&p), vec![100, 150, 200, 300, 400]);
        assert_eq!(p.line_at(p.find_line(150)).unwrap().text(), &text[..]);
        assert_eq!(p.line_at(p.find_line(400)).unwrap().text(), &filler[..150]);
    }

    #[test]
    fn test_edit_clears_stack() {
        let mut p = Program::new(1024, 5);
        p.upsert(10, b"A=1").unwrap();
        p.push_frame(Frame::Gosub { line: Some(0), pos: 4 }).unwrap();
        p.upsert(15, b"").unwrap();
        assert_eq!(p.stack_depth(), GOSUB_FRAME_SIZE);
        p.upsert(5, b"B=2").unwrap();
        assert_eq!(p.stack_depth(), 0);
    }

    #[test]
    fn test_mid_record_address_is_not_a_line() {
        let mut p = Program::new(1024, 5);
        p.upsert(1, b"A=1:B=2:C=3").unwrap();
        p.upsert(2, b"PRINT 2").unwrap();
        let mid = p.find_line(1) + 1;
        assert!(p.line_at(mid).is_none());
        assert_eq!(p.next_line(mid), p.program_end());
        assert!(p.line_at(p.program_end()).is_none());
    }
}
