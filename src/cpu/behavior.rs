// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Contains implementations for each implemented [Insn]

use super::{registers::VF, *};

impl Machine {
    /// Executes a single [Insn]
    #[rustfmt::skip]
    #[inline(always)]
    pub(super) fn execute(&mut self, instruction: Insn) -> Result<()> {
        match instruction {
            Insn::cls               => self.clear_screen(),
            Insn::ret               => self.ret()?,
            Insn::jmp   {       A } => self.jump(A),
            Insn::call  {       A } => self.call(A)?,
            Insn::movb  {    x, B } => self.load_immediate(x, B),
            Insn::addb  {    x, B } => self.add_immediate(x, B),
            Insn::movI  {       A } => self.load_i_immediate(A),
            Insn::draw  { y, x, n } => self.draw(x, y, n)?,
        }
        Ok(())
    }
}

/// |`0aaa`| Issues a "System call" (ML routine)
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`00e0`| Clear screen memory to all 0       |
/// |`00ee`| Return from subroutine             |
impl Machine {
    /// |`00e0`| Clears the screen memory to 0
    #[inline(always)]
    pub(super) fn clear_screen(&mut self) {
        self.screen.clear();
    }
    /// |`00ee`| Returns from subroutine
    ///
    /// Returning with an empty stack is a [Fault::StackUnderflow]
    #[inline(always)]
    pub(super) fn ret(&mut self) -> Result<()> {
        let from = self.regs.pc.wrapping_sub(2);
        self.regs.pc = self.stack.pop(&mut self.regs.sp, from)?;
        Ok(())
    }
}

/// |`1aaa`| Sets pc to an absolute address
impl Machine {
    /// |`1aaa`| Sets the program counter to an absolute address
    #[inline(always)]
    pub(super) fn jump(&mut self, a: Adr) {
        self.regs.pc = a;
    }
}

/// |`2aaa`| Pushes pc onto the stack, then jumps to a
impl Machine {
    /// |`2aaa`| Pushes pc onto the stack, then jumps to a
    ///
    /// Calling with a full stack is a [Fault::StackOverflow]
    #[inline(always)]
    pub(super) fn call(&mut self, a: Adr) -> Result<()> {
        self.stack.push(&mut self.regs.sp, self.regs.pc)?;
        self.regs.pc = a;
        Ok(())
    }
}

/// |`6xbb`| Loads immediate byte b into register vX
impl Machine {
    /// |`6xbb`| Loads immediate byte b into register vX
    #[inline(always)]
    pub(super) fn load_immediate(&mut self, x: Reg, b: u8) {
        self.regs.v[x] = b;
    }
}

/// |`7xbb`| Adds immediate byte b to register vX
impl Machine {
    /// |`7xbb`| Adds immediate byte b to register vX
    ///
    /// Never touches vF, even on overflow
    #[inline(always)]
    pub(super) fn add_immediate(&mut self, x: Reg, b: u8) {
        self.regs.v[x] = self.regs.v[x].wrapping_add(b);
    }
}

/// |`Aaaa`| Load address #a into register I
impl Machine {
    /// |`Aadr`| Load address #adr into register I
    #[inline(always)]
    pub(super) fn load_i_immediate(&mut self, a: Adr) {
        self.regs.i = a;
    }
}

/// |`Dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY)
impl Machine {
    /// |`Dxyn`| XORs an n-byte sprite from memory at I onto the screen at (vX, vY)
    ///
    /// vF is set to 1 if any lit pixel was turned off, else 0.
    ///
    /// The origin always wraps around the screen. The rest of the sprite wraps
    /// when [screen_wrap](quirks::Quirks::screen_wrap) is set; otherwise rows that fall off the bottom
    /// are skipped, and pixels that fall off the right side are clipped.
    ///
    /// Returns [Fault::SpriteTooTall] without touching the screen if `n` > 15.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.mem_mut().write_byte(0x300, 0b1000_0001).unwrap();
    /// machine.registers_mut().i = 0x300;
    /// machine.draw(0, 1, 1).unwrap();
    /// assert_eq!(Some(true), machine.screen().get(0, 0));
    /// assert_eq!(Some(true), machine.screen().get(7, 0));
    /// assert_eq!(0, machine.v()[0xf]);
    /// ```
    pub fn draw(&mut self, x: Reg, y: Reg, n: Nib) -> Result<()> {
        if n > 15 {
            return Err(Fault::SpriteTooTall { height: n }.into());
        }
        let (vx, vy) = (
            *self.regs.v.get(x).ok_or(Error::InvalidRegister { reg: x })?,
            *self.regs.v.get(y).ok_or(Error::InvalidRegister { reg: y })?,
        );
        let (w, h) = (self.screen.width(), self.screen.height());
        let (x, y) = (vx as usize % w, vy as usize % h);
        let wrap = self.flags.quirks.screen_wrap;
        self.regs.v[VF] = 0;
        for line in 0..n as usize {
            let sprite = self
                .mem
                .read_byte((self.regs.i as usize + line) % self.mem.len())?;
            let row = match y + line {
                row if wrap => row % h,
                row if row < h => row,
                _ => continue,
            };
            for bit in 0..8 {
                let col = match x + bit {
                    col if wrap => col % w,
                    col if col < w => col,
                    _ => break,
                };
                if sprite & (0x80 >> bit) != 0 && self.screen.toggle(col, row) {
                    self.regs.v[VF] = 1;
                }
            }
        }
        Ok(())
    }
}
