// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error types for chipcore

use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// A fault raised while executing an instruction.
///
/// Every fault except [Fault::SpriteTooTall] halts the machine.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The program counter was odd, or left no room for a 2-byte instruction
    #[error("tried to execute invalid address {pc:04x}")]
    InvalidProgramCounter {
        /// The offending program counter
        pc: u16,
    },
    /// Tried to access memory outside of the address space
    #[error("address {addr:04x} is not in memory")]
    AddressFault {
        /// The offending address
        addr: usize,
    },
    /// Tried to call a subroutine with a full stack
    #[error("stack overflow calling from {pc:04x}")]
    StackOverflow {
        /// The return address which did not fit
        pc: u16,
    },
    /// Tried to return with an empty stack
    #[error("stack underflow returning from {pc:04x}")]
    StackUnderflow {
        /// The address the return was issued from
        pc: u16,
    },
    /// Tried to draw a sprite with more rows than a sprite can have
    #[error("sprite of height {height:x} too tall, must be <= 15")]
    SpriteTooTall {
        /// The requested sprite height
        height: u8,
    },
}

impl Fault {
    /// Whether this fault must halt the machine
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Fault::SpriteTooTall { .. })
    }
}

/// Error type for chipcore.
#[derive(Debug, Error)]
pub enum Error {
    /// Represents a fault raised during execution
    #[error(transparent)]
    Fault(#[from] Fault),
    /// The machine is halted, and will not execute any more instructions
    #[error("machine is halted")]
    Halted,
    /// Represents a breakpoint being hit
    #[error("breakpoint hit: {addr:03x} ({next:04x})")]
    BreakpointHit {
        /// The address of the breakpoint
        addr: u16,
        /// The instruction at the breakpoint
        next: u16,
    },
    /// The program image does not fit in memory past its entry point
    #[error("program of {len} bytes does not fit at {entry:03x} ({capacity} bytes free)")]
    ProgramTooLarge {
        /// The length of the program image
        len: usize,
        /// The requested entry point
        entry: u16,
        /// The number of bytes between the entry point and the end of memory
        capacity: usize,
    },
    /// Tried to press a key that doesn't exist
    #[error("tried to press key {key:X} which does not exist")]
    InvalidKey {
        /// The offending key
        key: usize,
    },
    /// Tried to get/set an out-of-bounds register
    #[error("tried to access register v{reg:X} which does not exist")]
    InvalidRegister {
        /// The offending register
        reg: usize,
    },
    /// Error originated in [std::io]
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "minifb")]
    /// Error originated in [minifb]
    #[error(transparent)]
    MinifbError(#[from] minifb::Error),
}

impl Error {
    /// Whether this error leaves the machine unable to continue
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Fault(fault) => fault.is_fatal(),
            Error::Halted => true,
            _ => false,
        }
    }
}
