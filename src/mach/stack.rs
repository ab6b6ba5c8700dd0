use super::{Program, Var};
use crate::error;
use crate::lang::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

pub const FOR_FRAME_SIZE: usize = 10;
pub const GOSUB_FRAME_SIZE: usize = 5;

const FOR_TAG: u8 = b'F';
const GOSUB_TAG: u8 = b'G';
const DIRECT: u16 = u16::MAX;

/// ## Control-flow frames
///
/// A continuation saved by `GOSUB` or `FOR`. `line` is the address of
/// the line record to resume in, or `None` for direct mode; `pos` is the
/// scan position just after the statement that pushed the frame.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Gosub {
        line: Option<Column>,
        pos: Column,
    },
    For {
        var: Var,
        terminal: i16,
        step: i16,
        line: Option<Column>,
        pos: Column,
    },
}

fn encode_line(line: Option<Column>) -> [u8; 2] {
    match line {
        Some(addr) => (addr as u16).to_le_bytes(),
        None => DIRECT.to_le_bytes(),
    }
}

fn decode_line(b: &[u8]) -> Option<Column> {
    match u16::from_le_bytes([b[0], b[1]]) {
        DIRECT => None,
        addr => Some(usize::from(addr)),
    }
}

fn decode_u16(b: &[u8]) -> usize {
    usize::from(u16::from_le_bytes([b[0], b[1]]))
}

fn decode_i16(b: &[u8]) -> i16 {
    i16::from_le_bytes([b[0], b[1]])
}

impl Frame {
    pub fn size(&self) -> usize {
        match self {
            Frame::Gosub { .. } => GOSUB_FRAME_SIZE,
            Frame::For { .. } => FOR_FRAME_SIZE,
        }
    }

    fn encode(&self, b: &mut [u8]) {
        match *self {
            Frame::Gosub { line, pos } => {
                b[0] = GOSUB_TAG;
                b[1..3].copy_from_slice(&encode_line(line));
                b[3..5].copy_from_slice(&(pos as u16).to_le_bytes());
            }
            Frame::For {
                var,
                terminal,
                step,
                line,
                pos,
            } => {
                b[0] = FOR_TAG;
                b[1] = var.letter();
                b[2..4].copy_from_slice(&terminal.to_le_bytes());
                b[4..6].copy_from_slice(&step.to_le_bytes());
                b[6..8].copy_from_slice(&encode_line(line));
                b[8..10].copy_from_slice(&(pos as u16).to_le_bytes());
            }
        }
    }

    fn decode(b: &[u8]) -> Option<Frame> {
        match b.first()? {
            &GOSUB_TAG if b.len() >= GOSUB_FRAME_SIZE => Some(Frame::Gosub {
                line: decode_line(&b[1..3]),
                pos: decode_u16(&b[3..5]),
            }),
            &FOR_TAG if b.len() >= FOR_FRAME_SIZE => Some(Frame::For {
                var: Var::from_byte(b[1])?,
                terminal: decode_i16(&b[2..4]),
                step: decode_i16(&b[4..6]),
                line: decode_line(&b[6..8]),
                pos: decode_u16(&b[8..10]),
            }),
            _ => None,
        }
    }
}

impl Program {
    pub fn push_frame(&mut self, frame: Frame) -> Result<()> {
        let size = frame.size();
        if self.sp < self.stack_limit + size {
            return Err(error!(OutOfMemory; "STACK OVERFLOW"));
        }
        self.sp -= size;
        frame.encode(&mut self.ram[self.sp..self.sp + size]);
        log::debug!("push {:?}", frame);
        Ok(())
    }

    pub fn clear_stack(&mut self) {
        self.sp = self.ram.len();
    }

    /// Bytes in use on the control stack.
    pub fn stack_depth(&self) -> usize {
        self.ram.len() - self.sp
    }

    /// Frames from the top of the stack down, with their addresses.
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            program: self,
            addr: self.sp,
        }
    }

    /// The innermost `GOSUB` frame, skipping over any `FOR` frames.
    pub fn find_gosub(&self) -> Option<(Column, Frame)> {
        self.frames()
            .find(|(_, frame)| matches!(frame, Frame::Gosub { .. }))
    }

    /// The innermost `FOR` frame for `var`, or the innermost of any
    /// variable when `var` is `None`.
    pub fn find_for(&self, var: Option<Var>) -> Option<(Column, Frame)> {
        self.frames().find(|(_, frame)| match frame {
            Frame::For { var: v, .. } => var.map_or(true, |var| var == *v),
            Frame::Gosub { .. } => false,
        })
    }

    /// Remove the frame at `addr`. Frames above it slide down, untouched.
    pub fn remove_frame(&mut self, addr: Column) {
        if let Some(frame) = Frame::decode(&self.ram[addr..]) {
            let size = frame.size();
            self.ram.copy_within(self.sp..addr, self.sp + size);
            self.sp += size;
            log::debug!("pop {:?}", frame);
        }
    }

    /// Discard everything above the frame at `addr`, keeping it on top.
    pub fn unwind_to(&mut self, addr: Column) {
        self.sp = addr;
    }

    /// Discard the frame at `addr` and everything above it.
    pub fn unwind_past(&mut self, addr: Column) {
        if let Some(frame) = Frame::decode(&self.ram[addr..]) {
            self.sp = addr + frame.size();
            log::debug!("pop {:?}", frame);
        }
    }
}

pub struct Frames<'a> {
    program: &'a Program,
    addr: Column,
}

impl<'a> Iterator for Frames<'a> {
    type Item = (Column, Frame);

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.program.ram.len();
        if self.addr >= top {
            return None;
        }
        let addr = self.addr;
        let frame = Frame::decode(&self.program.ram[addr..top])?;
        self.addr += frame.size();
        Some((addr, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn var(ch: u8) -> Var {
        Var::from_byte(ch).unwrap()
    }

    fn for_frame(ch: u8) -> Frame {
        Frame::For {
            var: var(ch),
            terminal: 10,
            step: -2,
            line: Some(42),
            pos: 7,
        }
    }

    #[test]
    fn test_round_trip_through_buffer() {
        let mut p = Program::new(1024, 5);
        let g = Frame::Gosub { line: None, pos: 900 };
        p.push_frame(for_frame(b'I')).unwrap();
        p.push_frame(g).unwrap();
        let frames: Vec<Frame> = p.frames().map(|(_, f)| f).collect();
        assert_eq!(frames, vec![g, for_frame(b'I')]);
        assert_eq!(p.stack_depth(), FOR_FRAME_SIZE + GOSUB_FRAME_SIZE);
    }

    #[test]
    fn test_overflow_leaves_stack() {
        let mut p = Program::new(1024, 2);
        p.push_frame(for_frame(b'A')).unwrap();
        p.push_frame(for_frame(b'B')).unwrap();
        let depth = p.stack_depth();
        let e = p.push_frame(for_frame(b'C')).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(p.stack_depth(), depth);
        assert_eq!(p.fetch(var(b'A')), 0);
    }

    #[test]
    fn test_gosub_found_under_for() {
        let mut p = Program::new(1024, 5);
        let g = Frame::Gosub { line: Some(3), pos: 4 };
        p.push_frame(g).unwrap();
        p.push_frame(for_frame(b'I')).unwrap();
        let (addr, frame) = p.find_gosub().unwrap();
        assert_eq!(frame, g);
        p.remove_frame(addr);
        let frames: Vec<Frame> = p.frames().map(|(_, f)| f).collect();
        assert_eq!(frames, vec![for_frame(b'I')]);
        assert_eq!(p.stack_depth(), FOR_FRAME_SIZE);
    }

    #[test]
    fn test_find_for_by_variable() {
        let mut p = Program::new(1024, 5);
        p.push_frame(for_frame(b'I')).unwrap();
        p.push_frame(for_frame(b'J')).unwrap();
        let (addr, _) = p.find_for(Some(var(b'I'))).unwrap();
        assert_eq!(p.find_for(None).map(|(_, f)| f), Some(for_frame(b'J')));
        assert!(p.find_for(Some(var(b'K'))).is_none());
        p.unwind_to(addr);
        assert_eq!(p.stack_depth(), FOR_FRAME_SIZE);
        p.unwind_past(addr);
        assert_eq!(p.stack_depth(), 0);
    }

    #[test]
    fn test_no_gosub_on_empty_stack() {
        let p = Program::new(1024, 5);
        assert!(p.find_gosub().is_none());
        assert_eq!(p.frames().count(), 0);
    }
}
