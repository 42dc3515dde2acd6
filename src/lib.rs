// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! This crate implements the core of a Chip-8 interpreter: memory, registers,
//! the call stack, the screen, and the fetch-decode-execute cycle which ties them together.
//!
//! It never touches a window, a keyboard, or a clock. The embedding application
//! decides when to call [Machine::tick], hands it a [Keypad] snapshot, and renders
//! [Machine::screen] however it likes.
//!
//! # Examples
//! ```rust
//! use chipcore::prelude::*;
//! let mut machine = Machine::default();
//! machine.load_program_bytes(&[
//!     0xa2, 0x06, // mov $206, I
//!     0xd0, 0x01, // draw #1, v0, v0
//!     0x12, 0x04, // jmp 204
//!     0xc0,       // sprite data
//! ])?;
//! machine.multistep(&Keypad::default(), 4)?;
//! assert_eq!(Some(true), machine.screen().get(0, 0));
//! assert_eq!(Some(false), machine.screen().get(2, 0));
//! # Ok::<(), chipcore::error::Error>(())
//! ```

pub mod cpu;
pub mod error;
pub mod mem;
pub mod screen;

pub use cpu::{
    diagnostics::{Diagnostics, Event, Log},
    flags::Flags,
    instruction::{
        disassembler::{Dis, Disassembler},
        Insn, Instruction,
    },
    keypad::Keypad,
    quirks::Quirks,
    registers::Registers,
    run_state::RunState,
    Machine,
};
pub use error::{Error, Fault, Result};

/// Common imports for chipcore
pub mod prelude {
    use super::*;
    pub use cpu::{
        diagnostics::{Diagnostics, Event, Log},
        flags::Flags,
        instruction::{
            disassembler::{Dis, Disassembler},
            Insn, Instruction,
        },
        keypad::Keypad,
        quirks::Quirks,
        registers::Registers,
        run_state::RunState,
        Machine,
    };
    pub use error::{Error, Fault, Result};
    pub use mem::Mem;
    pub use screen::Screen;
}
