// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! A disassembler for instruction words
use super::Insn;
use owo_colors::{OwoColorize, Style};

/// Disassembles instruction words
pub trait Disassembler {
    /// Disassemble a single instruction
    fn once(&self, insn: u16) -> String;
}

/// Disassembles instruction words, printing them in the provided [owo_colors::Style]s
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dis {
    /// Styles invalid instructions
    pub invalid: Style,
    /// Styles valid instruction
    pub normal: Style,
}

impl Default for Dis {
    fn default() -> Self {
        Self {
            invalid: Style::new().bold().red(),
            normal: Style::new().green(),
        }
    }
}

impl Disassembler for Dis {
    fn once(&self, insn: u16) -> String {
        match Insn::classify(insn) {
            Some(insn) => format!("{}", insn.style(self.normal)),
            None => format!("{}", format_args!("inval  {insn:04x}").style(self.invalid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once() {
        let dis = Dis::default();
        assert!(dis.once(0x00e0).contains("cls"));
        assert!(dis.once(0x1200).contains("jmp    200"));
        assert!(dis.once(0x22a4).contains("call   2a4"));
        assert!(dis.once(0xd12f).contains("draw   #f, v1, v2"));
        assert!(dis.once(0x8014).contains("inval  8014"));
        assert!(dis.once(0xffff).contains("inval  ffff"));
    }
}
