// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The call stack, holding up to [DEPTH] return addresses

use super::Adr;
use crate::error::{Fault, Result};

/// Maximum number of return addresses on the stack
pub const DEPTH: usize = 16;

/// Return address storage. The stack pointer lives in the register file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    slots: [Adr; DEPTH],
}

impl Stack {
    /// Pushes `addr`, incrementing `sp`.
    ///
    /// Returns [Fault::StackOverflow] when all [DEPTH] slots are in use.
    /// # Examples
    /// ```rust
    /// # use chipcore::cpu::stack::Stack;
    /// let (mut stack, mut sp) = (Stack::default(), 0);
    /// stack.push(&mut sp, 0x202).unwrap();
    /// assert_eq!(1, sp);
    /// assert_eq!(0x202, stack.pop(&mut sp, 0x200).unwrap());
    /// assert_eq!(0, sp);
    /// ```
    pub fn push(&mut self, sp: &mut u8, addr: Adr) -> Result<()> {
        let slot = self
            .slots
            .get_mut(*sp as usize)
            .ok_or(Fault::StackOverflow { pc: addr })?;
        *slot = addr;
        *sp += 1;
        Ok(())
    }

    /// Pops the most recently pushed address, decrementing `sp`.
    ///
    /// Returns [Fault::StackUnderflow], reporting `pc`, when the stack is empty.
    pub fn pop(&mut self, sp: &mut u8, pc: Adr) -> Result<Adr> {
        let top = sp
            .checked_sub(1)
            .filter(|&top| (top as usize) < DEPTH)
            .ok_or(Fault::StackUnderflow { pc })?;
        *sp = top;
        Ok(self.slots[top as usize])
    }

    /// Gets the live portion of the stack, bottom first
    pub fn frames(&self, sp: u8) -> &[Adr] {
        &self.slots[..(sp as usize).min(DEPTH)]
    }

    /// Forgets every return address
    pub fn clear(&mut self) {
        self.slots = [0; DEPTH];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn overflow() {
        let (mut stack, mut sp) = (Stack::default(), 0);
        for depth in 0..DEPTH {
            stack.push(&mut sp, depth as Adr * 2).unwrap();
        }
        assert_eq!(DEPTH as u8, sp);
        assert!(matches!(
            stack.push(&mut sp, 0x300),
            Err(Error::Fault(Fault::StackOverflow { pc: 0x300 }))
        ));
        // the failed push changed nothing
        assert_eq!(DEPTH as u8, sp);
        assert_eq!(DEPTH as Adr * 2 - 2, stack.pop(&mut sp, 0x200).unwrap());
    }

    #[test]
    fn underflow() {
        let (mut stack, mut sp) = (Stack::default(), 0);
        assert!(matches!(
            stack.pop(&mut sp, 0x200),
            Err(Error::Fault(Fault::StackUnderflow { pc: 0x200 }))
        ));
        assert_eq!(0, sp);
    }

    #[test]
    fn corrupt_sp_underflows() {
        let (mut stack, mut sp) = (Stack::default(), 0xff);
        assert!(stack.pop(&mut sp, 0x200).is_err());
        assert_eq!(0xff, sp);
    }

    #[test]
    fn frames() {
        let (mut stack, mut sp) = (Stack::default(), 0);
        stack.push(&mut sp, 0x202).unwrap();
        stack.push(&mut sp, 0x404).unwrap();
        assert_eq!(&[0x202, 0x404], stack.frames(sp));
    }
}
