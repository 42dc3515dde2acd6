// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! chipcore: A chip-8 interpreter core, in a minifb window

#[cfg(test)]
mod tests;
mod ui;

use chipcore::prelude::*;
use gumdrop::*;
use owo_colors::OwoColorize;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};
use ui::*;

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("chipcore=debug,warn"),
    )
    .init();
    let options = Arguments::parse_args_default_or_exit();
    let state = State::new(options)?;
    for result in state {
        if let Err(e) = result {
            eprintln!("{}", e.bold().red());
            break;
        }
    }
    Ok(())
}

/// Parses a hexadecimal string into a u16
fn parse_hex(value: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(value, 16)
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Load a ROM to run.", required, free)]
    pub file: PathBuf,
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Enable debug mode at startup.")]
    pub debug: bool,
    #[options(help = "Enable pause mode at startup.")]
    pub pause: bool,
    #[options(help = "Wrap sprites around the edges of the screen.")]
    pub wrap: bool,

    #[options(help = "Set the instructions-per-frame rate.", default = "10")]
    pub speed: usize,
    #[options(help = "Set the target framerate.", default = "60", meta = "FR")]
    pub frame_rate: u64,

    #[options(
        long = "break",
        help = "Set breakpoints for the emulator to stop at.",
        parse(try_from_str = "parse_hex"),
        meta = "BP"
    )]
    pub breakpoints: Vec<u16>,

    #[options(
        help = "Load the ROM at this address (default 200).",
        parse(try_from_str = "parse_hex"),
        meta = "ADR"
    )]
    pub entry: Option<u16>,
}

#[derive(Debug)]
struct State {
    pub speed: usize,
    pub rate: u64,
    pub machine: Machine,
    pub keys: Keypad,
    pub ui: UI,
    pub ft: Instant,
}

impl State {
    fn new(options: Arguments) -> Result<Self> {
        let mut machine = Machine::new(
            options.entry.unwrap_or(0x200),
            64,
            32,
            Flags {
                debug: options.debug,
                quirks: Quirks::from(options.wrap),
            },
        );
        machine.load_program(&options.file)?;
        for point in options.breakpoints {
            machine.set_break(point);
        }
        if options.pause {
            machine.pause();
        }
        let (width, height) = (machine.screen().width(), machine.screen().height());
        Ok(State {
            speed: options.speed,
            rate: options.frame_rate.max(1),
            ui: UIBuilder::new(width, height).build()?,
            machine,
            keys: Keypad::default(),
            ft: Instant::now(),
        })
    }
    fn keys(&mut self) -> Result<bool> {
        self.ui.keys(&mut self.machine, &mut self.keys)
    }
    fn frame(&mut self) -> Result<bool> {
        self.ui.frame(&self.machine)
    }
    fn tick_machine(&mut self) -> Result<()> {
        if !self.machine.state().is_paused() {
            self.machine.decrement_timers();
        }
        self.machine.multistep(&self.keys, self.speed)?;
        Ok(())
    }
    fn wait_for_next_frame(&mut self) {
        let rate = Duration::from_nanos(1_000_000_000 / self.rate + 1);
        std::thread::sleep(rate.saturating_sub(self.ft.elapsed()));
        self.ft += rate;
    }
}

impl Iterator for State {
    type Item = Result<()>;

    fn next(&mut self) -> Option<Self::Item> {
        self.wait_for_next_frame();
        match self.keys() {
            Ok(opt) if !opt => return None,
            Err(e) => return Some(Err(e)),
            _ => (),
        }
        // Allow breakpoint hit messages
        match self.tick_machine() {
            Err(Error::BreakpointHit { addr, next }) => {
                eprintln!("Breakpoint hit: {:3x} ({:4x})", addr, next);
            }
            Err(e) => return Some(Err(e)),
            _ => (),
        }
        match self.frame() {
            Ok(opt) if !opt => return None,
            Err(e) => return Some(Err(e)),
            _ => (),
        }
        Some(Ok(()))
    }
}
