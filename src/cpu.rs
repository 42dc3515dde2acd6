// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Decodes and runs instructions


pub mod behavior;
pub mod diagnostics;
pub mod flags;
pub mod instruction;
pub mod keypad;
pub mod quirks;
pub mod registers;
pub mod run_state;
pub mod stack;

use self::{
    diagnostics::{Diagnostics, Event, Log},
    flags::Flags,
    instruction::{Insn, Instruction},
    keypad::Keypad,
    registers::Registers,
    run_state::RunState,
    stack::Stack,
};
use crate::{
    error::{Error, Fault, Result},
    mem::Mem,
    screen::Screen,
};

type Reg = usize;
type Adr = u16;
type Nib = u8;

/// The whole machine: memory, registers, stack, screen, and run-state
#[derive(Clone, Debug, PartialEq)]
pub struct Machine {
    /// Flags that control how the machine behaves, but which aren't
    /// inherent to the chip-8. Includes [Quirks](quirks::Quirks) and debug tracing.
    pub flags: Flags,
    // memory
    mem: Mem,
    stack: Stack,
    screen: Screen,
    // registers
    regs: Registers,
    // I/O
    keys: Keypad,
    // Execution data
    state: RunState,
    instruction: Instruction,
    entry: Adr,
    cycle: usize,
    breakpoints: Vec<Adr>,
}

// public interface
impl Machine {
    /// Constructs a new machine with zeroed memory, taking all configurable parameters
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let machine = Machine::new(
    ///     0x200,  // start of program
    ///     64, 32, // screen size
    ///     Flags::default(),
    /// );
    /// assert_eq!(0x200, machine.pc());
    /// assert_eq!(64 * 32, machine.screen().pixels().len());
    /// ```
    pub fn new(entry: Adr, width: usize, height: usize, flags: Flags) -> Self {
        Machine {
            flags,
            mem: Mem::default(),
            stack: Stack::default(),
            screen: Screen::new(width.max(1), height.max(1)),
            regs: Registers::new(entry),
            keys: Keypad::default(),
            state: RunState::default(),
            instruction: Instruction::default(),
            entry,
            cycle: 0,
            breakpoints: vec![],
        }
    }

    /// Loads a program from a file into memory at the entry point
    pub fn load_program(&mut self, rom: impl AsRef<std::path::Path>) -> Result<&mut Self> {
        self.load_program_bytes(&std::fs::read(rom)?)
    }

    /// Loads bytes into memory at the entry point
    ///
    /// Returns [Error::ProgramTooLarge] if they don't fit.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.load_program_bytes(&[0x00, 0xe0]).unwrap();
    /// assert!(machine.load_program_bytes(&[0; 0xe01]).is_err());
    /// ```
    pub fn load_program_bytes(&mut self, rom: &[u8]) -> Result<&mut Self> {
        self.mem.load(self.entry, rom)?;
        Ok(self)
    }

    /// Gets the machine's memory
    pub fn mem(&self) -> &Mem {
        &self.mem
    }

    /// Gets the machine's memory, mutably
    pub fn mem_mut(&mut self) -> &mut Mem {
        &mut self.mem
    }

    /// Gets the screen, for rendering
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the register file
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Gets the register file, mutably
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// Sets a general purpose register.
    /// If the register doesn't exist, returns [Error::InvalidRegister]
    pub fn set_v(&mut self, reg: Reg, value: u8) -> Result<()> {
        self.regs.set_v(reg, value)
    }

    /// Gets a slice of the entire general purpose registers
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.set_v(0x0, 0x41).unwrap();
    /// assert_eq!(
    ///     machine.v(),
    ///     [0x41, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    /// )
    /// ```
    pub fn v(&self) -> &[u8] {
        self.regs.v.as_slice()
    }

    /// Gets the program counter
    pub fn pc(&self) -> Adr {
        self.regs.pc
    }

    /// Gets the I register
    pub fn i(&self) -> Adr {
        self.regs.i
    }

    /// Gets the stack pointer
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Gets the live return addresses, bottom first
    pub fn stack(&self) -> &[Adr] {
        self.stack.frames(self.regs.sp)
    }

    /// Gets the value in the Sound Timer register
    pub fn sound(&self) -> u8 {
        self.regs.sound
    }

    /// Gets the value in the Delay Timer register
    pub fn delay(&self) -> u8 {
        self.regs.delay
    }

    /// Decrements the delay and sound timers. The driver calls this at 60Hz.
    pub fn decrement_timers(&mut self) {
        self.regs.decrement_timers()
    }

    /// Gets the keypad snapshot from the most recent cycle
    pub fn keys(&self) -> &Keypad {
        &self.keys
    }

    /// Gets the most recently decoded instruction
    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    /// Gets the number of cycles the machine has executed
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Gets the current [RunState]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Toggles pause. See [RunState::toggle_pause]
    pub fn pause(&mut self) {
        self.state.toggle_pause()
    }

    /// Requests a single step from a paused machine. See [RunState::step]
    pub fn singlestep(&mut self) {
        self.state.step()
    }

    /// Halts the machine for good
    pub fn halt(&mut self) {
        self.state.halt()
    }

    /// Resets the machine.
    ///
    /// Touches the registers, stack, screen, keys, and cycle count.
    ///
    /// Does not touch memory, [Flags], breakpoints, or the [RunState].
    /// A halted machine stays halted.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.registers_mut().pc = 0x340;
    /// machine.pause();
    /// machine.reset();
    /// assert_eq!(0x200, machine.pc());
    /// assert_eq!(RunState::Paused, machine.state());
    /// ```
    pub fn reset(&mut self) {
        self.regs = Registers::new(self.entry);
        self.stack.clear();
        self.screen.clear();
        self.keys = Keypad::default();
        self.instruction = Instruction::default();
        self.cycle = 0;
    }

    /// Set a breakpoint
    pub fn set_break(&mut self, point: Adr) -> &mut Self {
        if !self.breakpoints.contains(&point) {
            self.breakpoints.push(point)
        }
        self
    }

    /// Unset a breakpoint
    pub fn unset_break(&mut self, point: Adr) -> &mut Self {
        self.breakpoints.retain(|&bp| bp != point);
        self
    }

    /// Gets a slice of breakpoints
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// assert_eq!(machine.breakpoints(), &[]);
    /// ```
    pub fn breakpoints(&self) -> &[Adr] {
        self.breakpoints.as_slice()
    }

    /// Runs one fetch-decode-execute cycle, reporting to the [log]
    ///
    /// See [Machine::step_with]
    pub fn step(&mut self, keys: &Keypad) -> Result<()> {
        self.step_with(keys, &mut Log)
    }

    /// Runs one fetch-decode-execute cycle, regardless of [RunState]
    ///
    /// Unimplemented opcodes are reported to `diag`, and otherwise skipped.
    /// Faults are reported to `diag`, then returned.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.load_program_bytes(&[
    ///     0x65, 0x65, // mov #65, v5
    ///     0x75, 0x05, // add #05, v5
    /// ]).unwrap();
    /// let keys = Keypad::default();
    /// machine.step(&keys).unwrap();
    /// machine.step(&keys).unwrap();
    /// assert_eq!(0x6a, machine.v()[5]);
    /// assert_eq!(0x204, machine.pc());
    /// ```
    pub fn step_with(&mut self, keys: &Keypad, diag: &mut impl Diagnostics) -> Result<()> {
        let addr = self.regs.pc;
        let result = self.cycle_once(keys, diag);
        if let Err(Error::Fault(fault)) = &result {
            diag.report(Event::Fault {
                addr,
                opcode: self.instruction.opcode(),
                fault: *fault,
            });
        }
        result
    }

    /// Runs one cycle if the [RunState] allows it, reporting to the [log]
    ///
    /// See [Machine::tick_with]
    pub fn tick(&mut self, keys: &Keypad) -> Result<()> {
        self.tick_with(keys, &mut Log)
    }

    /// Drives the machine through one cycle, honoring the [RunState]:
    ///
    /// | state    | effect
    /// |----------|--------
    /// | Running  | Executes one instruction
    /// | Stepping | Executes one instruction, then pauses
    /// | Paused   | Does nothing
    /// | Halted   | Returns [Error::Halted]
    ///
    /// A fatal error halts the machine. Landing on a breakpoint pauses the machine,
    /// and returns [Error::BreakpointHit], which can be safely ignored.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut machine = Machine::default();
    /// machine.registers_mut().pc = 0xfff;
    /// let keys = Keypad::default();
    /// assert!(machine.tick(&keys).unwrap_err().is_fatal());
    /// assert_eq!(RunState::Halted, machine.state());
    /// assert!(matches!(machine.tick(&keys), Err(Error::Halted)));
    /// ```
    pub fn tick_with(&mut self, keys: &Keypad, diag: &mut impl Diagnostics) -> Result<()> {
        match self.state {
            RunState::Halted => return Err(Error::Halted),
            RunState::Paused => return Ok(()),
            RunState::Stepping => self.state = RunState::Paused,
            RunState::Running => {}
        }
        if let Err(e) = self.step_with(keys, diag) {
            if e.is_fatal() {
                self.state.halt();
            }
            return Err(e);
        }
        // process breakpoints
        if self.breakpoints.contains(&self.regs.pc) {
            self.state = RunState::Paused;
            return Err(Error::BreakpointHit {
                addr: self.regs.pc,
                next: self.mem.read_word(self.regs.pc as usize).unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Ticks the machine up to `steps` times, stopping early if it pauses
    pub fn multistep(&mut self, keys: &Keypad, steps: usize) -> Result<&mut Self> {
        for _ in 0..steps {
            if self.state.is_paused() {
                break;
            }
            self.tick(keys)?;
        }
        Ok(self)
    }

    /// Fetches, decodes, and executes the instruction at pc
    fn cycle_once(&mut self, keys: &Keypad, diag: &mut impl Diagnostics) -> Result<()> {
        self.keys = *keys;
        self.instruction = Instruction::default();
        let pc = self.regs.pc;
        // instructions are aligned, and need room for both bytes
        if pc as usize >= self.mem.len().saturating_sub(1) || pc % 2 != 0 {
            return Err(Fault::InvalidProgramCounter { pc }.into());
        }
        // fetch opcode
        self.instruction = Instruction::decode(self.mem.read_word(pc as usize)?);
        self.regs.pc = pc.wrapping_add(2);
        self.cycle += 1;

        // Print opcode disassembly:
        if self.flags.debug {
            log::debug!("{}", self.trace(pc));
        }

        match Insn::classify(self.instruction.opcode()) {
            Some(insn) => self.execute(insn),
            None => {
                diag.report(Event::Unimplemented {
                    addr: pc,
                    opcode: self.instruction.opcode(),
                });
                Ok(())
            }
        }
    }
}

// debug output
impl Machine {
    /// Formats one line of the debug trace for the instruction at `addr`, as plain text
    fn trace(&self, addr: Adr) -> String {
        let opcode = self.instruction.opcode();
        match Insn::classify(opcode) {
            Some(insn) => format!("{:3} {addr:03x}: {insn}", self.cycle),
            None => format!("{:3} {addr:03x}: inval  {opcode:04x}", self.cycle),
        }
    }
}

impl Default for Machine {
    /// Constructs a new machine with sane defaults
    ///
    /// | value  | default | description
    /// |--------|---------|------------
    /// | entry  |`0x0200` | Start location of the program
    /// | screen | `64x32` | Size of the screen
    /// | flags  | all off | No debug trace, no screen wrap
    ///
    /// # Examples
    /// ```rust
    /// use chipcore::*;
    /// let mut machine = Machine::default();
    /// ```
    fn default() -> Self {
        Machine::new(0x200, 64, 32, Flags::default())
    }
}
