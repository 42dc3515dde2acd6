// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
#![allow(clippy::bad_bit_mask)]
//! Contains the decoded views of an instruction word: [Instruction] and [Insn]

pub mod disassembler;

use super::{Adr, Nib, Reg};
use imperative_rs::InstructionSet;
use std::fmt::Display;

/// The raw fields of a 16-bit instruction word.
///
/// Decoding never fails; whether the word *means* anything is decided at dispatch.
/// ```text
///  15..12  11..8   7..4    3..0
/// [family][  x  ][  y  ][  n  ]
///         [     nnn (address)  ]
///                 [ kk (byte)  ]
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instruction {
    opcode: u16,
}

impl Instruction {
    /// Decodes a word into its fields
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::cpu::instruction::Instruction;
    /// let insn = Instruction::decode(0xd5a3);
    /// assert_eq!(0xd, insn.family());
    /// assert_eq!(0x5, insn.x());
    /// assert_eq!(0xa, insn.y());
    /// assert_eq!(0x3, insn.n());
    /// assert_eq!(0xa3, insn.kk());
    /// assert_eq!(0x5a3, insn.nnn());
    /// ```
    pub const fn decode(opcode: u16) -> Self {
        Instruction { opcode }
    }
    /// The whole instruction word
    pub const fn opcode(&self) -> u16 {
        self.opcode
    }
    /// Bits 15..12: the instruction family
    pub const fn family(&self) -> u8 {
        (self.opcode >> 12) as u8
    }
    /// Bits 11..0: an address
    pub const fn nnn(&self) -> Adr {
        self.opcode & 0x0fff
    }
    /// Bits 11..8: the first register operand
    pub const fn x(&self) -> Reg {
        (self.opcode as usize >> 8) & 0xf
    }
    /// Bits 7..4: the second register operand
    pub const fn y(&self) -> Reg {
        (self.opcode as usize >> 4) & 0xf
    }
    /// Bits 3..0: a nibble
    pub const fn n(&self) -> Nib {
        (self.opcode & 0xf) as u8
    }
    /// Bits 7..0: an immediate byte
    pub const fn kk(&self) -> u8 {
        self.opcode as u8
    }
}

impl From<u16> for Instruction {
    fn from(opcode: u16) -> Self {
        Self::decode(opcode)
    }
}

#[allow(non_camel_case_types, non_snake_case, missing_docs)]
#[derive(Clone, Copy, Debug, InstructionSet, PartialEq, Eq)]
/// The implemented instruction families. Anything else is skipped at dispatch.
pub enum Insn {
    /// | 00e0 | Clear screen memory to 0s
    #[opcode = "0x00e0"]
    cls,
    /// | 00ee | Return from subroutine
    #[opcode = "0x00ee"]
    ret,
    /// | 1aaa | Jumps to an absolute address
    #[opcode = "0x1AAA"]
    jmp { A: u16 },
    /// | 2aaa | Pushes pc onto the stack, then jumps to a
    #[opcode = "0x2AAA"]
    call { A: u16 },
    /// | 6xbb | Loads immediate byte b into register vX
    #[opcode = "0x6xBB"]
    movb { B: u8, x: usize },
    /// | 7xbb | Adds immediate byte b to register vX
    #[opcode = "0x7xBB"]
    addb { B: u8, x: usize },
    /// | Aaaa | Load address #a into register I
    #[opcode = "0xaAAA"]
    movI { A: u16 },
    /// | Dxyn | Draws n-byte sprite to the screen at coordinates (vX, vY)
    #[opcode = "0xdxyn"]
    draw { y: usize, x: usize, n: u8 },
}

impl Insn {
    /// Classifies a word, or returns [None] if it's outside the implemented set
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::cpu::instruction::Insn;
    /// assert_eq!(Some(Insn::movb { B: 0x65, x: 5 }), Insn::classify(0x6565));
    /// assert_eq!(None, Insn::classify(0x0123));
    /// assert_eq!(None, Insn::classify(0x8014));
    /// ```
    pub fn classify(word: u16) -> Option<Insn> {
        Insn::decode(&word.to_be_bytes()).ok().map(|(_, insn)| insn)
    }
}

impl Display for Insn {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Insn::cls               => write!(f, "cls    "),
            Insn::ret               => write!(f, "ret    "),
            Insn::jmp { A }         => write!(f, "jmp    {A:03x}"),
            Insn::call { A }        => write!(f, "call   {A:03x}"),
            Insn::movb { B, x }     => write!(f, "mov    #{B:02x}, v{x:X}"),
            Insn::addb { B, x }     => write!(f, "add    #{B:02x}, v{x:X}"),
            Insn::movI { A }        => write!(f, "mov    ${A:03x}, I"),
            Insn::draw { y, x, n }  => write!(f, "draw   #{n:x}, v{x:X}, v{y:X}"),
        }
    }
}
