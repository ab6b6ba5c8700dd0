use super::{stack::FOR_FRAME_SIZE, Var};
use crate::lang::{Column, LINE_MARKER};

/// Smallest and largest buffer accepted. Positions are saved in 16 bits
/// on the control stack with `u16::MAX` reserved for direct mode.
pub const MIN_RAM_SIZE: usize = 1024;
pub const MAX_RAM_SIZE: usize = u16::MAX as usize - 1;

/// Room for the line number that is written ahead of an entered line.
pub(crate) const ENTRY_HEADROOM: usize = 2;

/// ## Program buffer
///
/// One fixed allocation split into regions by index:
///
/// ```text
/// 0            program_end      variables_begin  stack_limit   sp        len
/// | line records | free / entry |  variables     |   (unused)   | frames |
/// ```
///
/// Line records grow upward from zero. Typed lines are edited in the
/// free gap above them. The 26 variables sit at a fixed place below the
/// control stack, which grows downward from the top and may never drop
/// below `stack_limit`.

pub struct Program {
    pub(super) ram: Box<[u8]>,
    pub(super) program_end: Column,
    pub(super) variables_begin: Column,
    pub(super) stack_limit: Column,
    pub(super) sp: Column,
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("len", &self.ram.len())
            .field("program_end", &self.program_end)
            .field("variables_begin", &self.variables_begin)
            .field("stack_limit", &self.stack_limit)
            .field("sp", &self.sp)
            .finish()
    }
}

impl Program {
    pub fn new(ram_size: usize, stack_frames: usize) -> Program {
        let ram_size = ram_size.max(MIN_RAM_SIZE).min(MAX_RAM_SIZE);
        let stack_size = (stack_frames.max(1) * FOR_FRAME_SIZE).min(ram_size / 2);
        let stack_limit = ram_size - stack_size;
        let variables_begin = stack_limit - Var::COUNT * 2;
        Program {
            ram: vec![0; ram_size].into_boxed_slice(),
            program_end: 0,
            variables_begin,
            stack_limit,
            sp: ram_size,
        }
    }

    /// Cold start: no lines, no frames, every variable zero.
    pub fn clear(&mut self) {
        self.clear_program();
        self.clear_stack();
        for b in &mut self.ram[self.variables_begin..self.stack_limit] {
            *b = 0;
        }
    }

    pub fn clear_program(&mut self) {
        self.program_end = 0;
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn len(&self) -> usize {
        self.ram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program_end == 0
    }

    pub fn program_end(&self) -> Column {
        self.program_end
    }

    /// Bytes left between the last line and the variable table.
    pub fn free(&self) -> usize {
        self.variables_begin - self.program_end
    }

    pub fn fetch(&self, var: Var) -> i16 {
        let addr = self.variables_begin + var.index() * 2;
        i16::from_le_bytes([self.ram[addr], self.ram[addr + 1]])
    }

    pub fn store(&mut self, var: Var, value: i16) {
        let addr = self.variables_begin + var.index() * 2;
        self.ram[addr..addr + 2].copy_from_slice(&value.to_le_bytes());
    }

    pub fn peek(&self, addr: i16) -> Option<u8> {
        if addr < 0 {
            return None;
        }
        self.ram.get(addr as usize).copied()
    }

    /// Where a typed line begins, leaving headroom for its number.
    pub(crate) fn entry_start(&self) -> Column {
        self.program_end + ENTRY_HEADROOM
    }

    /// One past the last byte a typed line may occupy.
    pub(crate) fn entry_limit(&self) -> Column {
        self.variables_begin - ENTRY_HEADROOM
    }

    pub(crate) fn put(&mut self, addr: Column, ch: u8) {
        self.ram[addr] = ch;
    }

    pub(crate) fn text_mut(&mut self, start: Column) -> &mut [u8] {
        let end = self.variables_begin;
        &mut self.ram[start..end]
    }

    /// Move the marker-terminated text at `from` to the top of the free
    /// gap so it ends just below the variables. Returns its new start.
    pub(crate) fn stage(&mut self, from: Column) -> Column {
        let end = self.ram[from..self.variables_begin]
            .iter()
            .position(|&ch| ch == LINE_MARKER)
            .map(|n| from + n + 1)
            .unwrap_or(self.variables_begin);
        let dest = self.variables_begin - (end - from);
        self.ram.copy_within(from..end, dest);
        self.ram[self.variables_begin - 1] = LINE_MARKER;
        dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions() {
        let p = Program::new(2048, 5);
        assert_eq!(p.len(), 2048);
        assert_eq!(p.stack_limit, 2048 - 5 * FOR_FRAME_SIZE);
        assert_eq!(p.variables_begin, p.stack_limit - 52);
        assert_eq!(p.free(), p.variables_begin);
        assert!(p.is_empty());
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(Program::new(10, 5).len(), MIN_RAM_SIZE);
        assert_eq!(Program::new(1 << 20, 5).len(), MAX_RAM_SIZE);
    }

    #[test]
    fn test_variables() {
        let mut p = Program::new(1024, 5);
        let a = Var::from_byte(b'A').unwrap();
        let z = Var::from_byte(b'Z').unwrap();
        assert_eq!(p.fetch(a), 0);
        p.store(a, -2);
        p.store(z, i16::MAX);
        assert_eq!(p.fetch(a), -2);
        assert_eq!(p.fetch(z), i16::MAX);
        p.clear();
        assert_eq!(p.fetch(z), 0);
    }

    #[test]
    fn test_stage_moves_to_top() {
        let mut p = Program::new(1024, 5);
        let start = p.entry_start();
        p.text_mut(start)[..4].copy_from_slice(b"ABC\n");
        let staged = p.stage(start);
        assert_eq!(staged, p.variables_begin - 4);
        assert_eq!(&p.ram()[staged..p.variables_begin], b"ABC\n");
    }

    #[test]
    fn test_peek_bounds() {
        let p = Program::new(1024, 5);
        assert_eq!(p.peek(0), Some(0));
        assert_eq!(p.peek(-1), None);
        assert_eq!(p.peek(2000), None);
    }
}
