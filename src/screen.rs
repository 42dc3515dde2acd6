// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Stores and displays the machine's monochrome pixel buffer

use owo_colors::{OwoColorize, Style};
use std::fmt::{Display, Formatter, Result};

/// A width × height grid of on/off pixels, stored row-major (`y * width + x`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Screen {
    pixels: Vec<bool>,
    width: usize,
    height: usize,
}

impl Screen {
    /// Creates a blank screen
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::screen::Screen;
    /// let screen = Screen::new(64, 32);
    /// assert_eq!((64, 32), (screen.width(), screen.height()));
    /// assert!(screen.pixels().iter().all(|&p| !p));
    /// ```
    pub fn new(width: usize, height: usize) -> Screen {
        Screen {
            pixels: vec![false; width * height],
            width,
            height,
        }
    }

    /// The width of the screen, in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the screen, in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Gets the state of the pixel at (x, y), or None if it's off-screen
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Sets the state of the pixel at (x, y). Off-screen writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = on;
        }
    }

    /// XORs a lit sprite pixel onto (x, y), returning true on collision
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::screen::Screen;
    /// let mut screen = Screen::new(8, 8);
    /// assert!(!screen.toggle(3, 4));
    /// assert_eq!(Some(true), screen.get(3, 4));
    /// assert!(screen.toggle(3, 4));
    /// assert_eq!(Some(false), screen.get(3, 4));
    /// ```
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                let collided = self.pixels[idx];
                self.pixels[idx] = !collided;
                collided
            }
            None => false,
        }
    }

    /// Gets the raw pixel buffer, row-major
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new(64, 32)
    }
}

impl Display for Screen {
    /// Draws the screen two rows per line, using half-block characters
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let style = Style::new().green().on_black();
        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top = self.get(x, y).unwrap_or_default();
                let bottom = self.get(x, y + 1).unwrap_or_default();
                let c = match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };
                write!(f, "{}", c.style(style))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
