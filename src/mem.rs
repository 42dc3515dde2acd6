// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Mem is the machine's byte-addressable memory
//!
//! Contains some handy utils for reading, writing, and loading programs

use crate::error::{Error, Fault, Result};
use owo_colors::{OwoColorize, Style};
use std::{
    fmt::{Display, Formatter},
    ops::Range,
};

/// Size of the address space, in bytes
pub const MSIZE: usize = 0x1000;

/// A [Display]able view into a range of [Mem]
pub struct MemWindow<'a> {
    base: usize,
    mem: &'a [u8],
}

impl<'a> Display for MemWindow<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Green phosphor style formatting, for taste
        let term: Style = Style::new().bold().green().on_black();
        for (index, byte) in self.mem.iter().enumerate() {
            if index % 16 == 0 {
                write!(f, "{:>03x}{} ", (self.base + index).style(term), ":".style(term))?
            }
            write!(f, "{byte:02x}")?;
            write!(
                f,
                "{}",
                match index % 16 {
                    0xf => "\n",
                    0x7 => "  ",
                    _ if index % 2 == 1 => " ",
                    _ => "",
                }
            )?
        }
        Ok(())
    }
}

/// Fixed-size, byte-addressable memory
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mem {
    mem: Vec<u8>,
}

impl Mem {
    /// Creates a new, zeroed `Mem` with the specified length
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::mem::Mem;
    /// let mem = Mem::new(0x100);
    /// assert_eq!(mem.len(), 0x100);
    /// ```
    pub fn new(len: usize) -> Self {
        Mem { mem: vec![0; len] }
    }

    /// Returns the number of bytes in the `Mem`
    pub fn len(&self) -> usize {
        self.mem.len()
    }

    /// Because clippy is so kind:
    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Reads a single byte.
    ///
    /// Returns [Fault::AddressFault] if `addr` is outside of memory.
    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.mem
            .get(addr)
            .copied()
            .ok_or(Fault::AddressFault { addr }.into())
    }

    /// Writes a single byte.
    ///
    /// Returns [Fault::AddressFault] if `addr` is outside of memory.
    pub fn write_byte(&mut self, addr: usize, data: u8) -> Result<()> {
        let byte = self
            .mem
            .get_mut(addr)
            .ok_or(Error::from(Fault::AddressFault { addr }))?;
        *byte = data;
        Ok(())
    }

    /// Reads a big-endian instruction word.
    ///
    /// Words must be aligned to an even address, and both bytes must be in memory.
    /// # Examples
    /// ```rust
    /// # use chipcore::mem::Mem;
    /// let mut mem = Mem::new(0x10);
    /// mem.load(0x2, &[0x12, 0x34]).unwrap();
    /// assert_eq!(0x1234, mem.read_word(0x2).unwrap());
    /// assert!(mem.read_word(0x3).is_err());
    /// assert!(mem.read_word(0xf).is_err());
    /// ```
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        if addr % 2 != 0 {
            return Err(Fault::AddressFault { addr }.into());
        }
        match self.mem.get(addr..addr + 2) {
            Some(&[hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
            _ => Err(Fault::AddressFault { addr: addr + 1 }.into()),
        }
    }

    /// Copies a program image into memory, starting at `entry`
    ///
    /// Returns [Error::ProgramTooLarge] if the image runs off the end of memory,
    /// or if `entry` is past the end of memory.
    pub fn load(&mut self, entry: u16, bytes: &[u8]) -> Result<&mut Self> {
        let start = entry as usize;
        let capacity = self.len().saturating_sub(start);
        self.mem
            .get_mut(start..start + bytes.len())
            .ok_or(Error::ProgramTooLarge {
                len: bytes.len(),
                entry,
                capacity,
            })?
            .copy_from_slice(bytes);
        Ok(self)
    }

    /// Gets the entire backing memory as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.mem
    }

    /// Creates a window into the Mem which implements Display
    ///
    /// The range is clamped to the bounds of memory.
    pub fn window(&self, range: Range<usize>) -> MemWindow {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        MemWindow {
            base: start,
            mem: &self.mem[start..end],
        }
    }
}

impl Default for Mem {
    fn default() -> Self {
        Self::new(MSIZE)
    }
}

impl Display for Mem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.window(0..self.len()))
    }
}
