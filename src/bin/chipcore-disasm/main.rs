// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Prints a listing of a chip-8 program, one instruction word per line

use chipcore::{error::Result, *};
use gumdrop::*;
use owo_colors::OwoColorize;
use std::{fs::read, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Show help text")]
    help: bool,
    #[options(help = "Load a ROM to disassemble", free, required)]
    pub file: PathBuf,
    #[options(
        help = "Load address (default 200)",
        parse(try_from_str = "parse_hex"),
        meta = "ADR"
    )]
    pub loadaddr: Option<u16>,
    #[options(help = "Start disassembling at offset...")]
    pub offset: usize,
}

fn parse_hex(value: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(value, 16)
}

fn main() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    let contents = read(&options.file)?;
    let base = options.loadaddr.unwrap_or(0x200) as usize + options.offset;
    let program = contents.get(options.offset..).unwrap_or_default();
    for line in listing(&Dis::default(), base, program) {
        println!("{line}");
    }
    Ok(())
}

/// Disassembles `program`, loaded at `base`, one line per word.
///
/// A trailing odd byte gets a line of its own.
fn listing(dis: &Dis, base: usize, program: &[u8]) -> Vec<String> {
    let words = program.chunks_exact(2);
    let remainder = words.remainder();
    let mut lines: Vec<String> = words
        .enumerate()
        .map(|(idx, word)| {
            let word = u16::from_be_bytes([word[0], word[1]]);
            format!(
                "{:03x}: {} {:04x}",
                base + 2 * idx,
                dis.once(word),
                word.bright_black(),
            )
        })
        .collect();
    if let [byte] = remainder {
        lines.push(format!(
            "{:03x}: {} {:02x}",
            base + program.len() - 1,
            format_args!("byte   {byte:02x}").style(dis.invalid),
            byte.bright_black(),
        ));
    }
    lines
}
