// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Structured events raised while executing, for whoever wants to hear about them

use super::Adr;
use crate::error::Fault;

/// Something noteworthy which happened while executing the instruction at `addr`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// An opcode outside the implemented instruction set was skipped
    Unimplemented {
        /// Address of the instruction
        addr: Adr,
        /// The offending word
        opcode: u16,
    },
    /// An instruction raised a [Fault]
    Fault {
        /// Address of the instruction
        addr: Adr,
        /// The offending word (0 if it couldn't be fetched)
        opcode: u16,
        /// What went wrong
        fault: Fault,
    },
}

/// Receives [Event]s from the machine
pub trait Diagnostics {
    /// Reports a single event
    fn report(&mut self, event: Event);
}

/// Forwards [Event]s to the [log] facade
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Log;

impl Diagnostics for Log {
    fn report(&mut self, event: Event) {
        match event {
            Event::Unimplemented { addr, opcode } => {
                log::warn!("Address: {addr:04x}, unimplemented instruction: {opcode:04x}")
            }
            Event::Fault {
                addr,
                opcode,
                fault,
            } if fault.is_fatal() => {
                log::error!("Address: {addr:04x}, opcode: {opcode:04x}: {fault}")
            }
            Event::Fault {
                addr,
                opcode,
                fault,
            } => log::warn!("Address: {addr:04x}, opcode: {opcode:04x}: {fault}"),
        }
    }
}

/// Records every [Event], in order
impl Diagnostics for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event)
    }
}
