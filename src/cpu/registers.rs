// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The register file: v0..vF, I, the timers, SP, and PC

use super::Adr;
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Index of the flags register, vF
pub const VF: usize = 0xf;

/// Holds every register in the machine
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Registers {
    /// General purpose registers. vF doubles as the flags register.
    pub v: [u8; 16],
    /// Index register, usually an address
    pub i: Adr,
    /// Delay timer, decremented by the driver
    pub delay: u8,
    /// Sound timer, decremented by the driver
    pub sound: u8,
    /// Stack pointer: the number of return addresses on the stack
    pub sp: u8,
    /// Program counter
    pub pc: Adr,
}

impl Registers {
    /// Creates a zeroed register file with the program counter at `pc`
    pub fn new(pc: Adr) -> Self {
        Registers {
            pc,
            ..Default::default()
        }
    }

    /// Sets a general purpose register.
    /// If the register doesn't exist, returns [Error::InvalidRegister]
    /// # Examples
    /// ```rust
    /// # use chipcore::cpu::registers::Registers;
    /// let mut regs = Registers::default();
    /// regs.set_v(0x4, 0x41).unwrap();
    /// assert_eq!(0x41, regs.v[4]);
    /// assert!(regs.set_v(0x10, 0x41).is_err());
    /// ```
    pub fn set_v(&mut self, reg: usize, value: u8) -> Result<()> {
        let gpr = self.v.get_mut(reg).ok_or(Error::InvalidRegister { reg })?;
        *gpr = value;
        Ok(())
    }

    /// Decrements both timers by one, stopping at zero
    pub fn decrement_timers(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}

impl Display for Registers {
    /// Formats the registers as a dump:
    /// ```text
    /// PC: 0200, SP: 00, I: 0000
    /// v0: 00 v1: 00 v2: 00 v3: 00
    /// v4: 00 v5: 00 v6: 00 v7: 00
    /// v8: 00 v9: 00 vA: 00 vB: 00
    /// vC: 00 vD: 00 vE: 00 vF: 00
    /// DLY: 0, SND: 0
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PC: {:04x}, SP: {:02x}, I: {:04x}", self.pc, self.sp, self.i)?;
        for (i, gpr) in self.v.iter().enumerate() {
            write!(f, "v{i:X}: {gpr:02x}")?;
            f.write_str(if i % 4 == 3 { "\n" } else { " " })?;
        }
        write!(f, "DLY: {}, SND: {}", self.delay, self.sound)
    }
}
