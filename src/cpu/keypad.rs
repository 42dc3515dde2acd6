// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! A snapshot of the 16-key hexadecimal keypad

use crate::error::{Error, Result};

/// The state of each key, `0x0..=0xF`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    /// Presses a key, and reports whether the key's state changed.
    /// If key does not exist, returns [Error::InvalidKey].
    ///
    /// # Examples
    /// ```rust
    /// # use chipcore::cpu::keypad::Keypad;
    /// let mut keys = Keypad::default();
    /// // press key `7`
    /// assert!(keys.press(0x7).unwrap());
    /// // it was already pressed, so nothing's changed.
    /// assert!(!keys.press(0x7).unwrap());
    /// ```
    pub fn press(&mut self, key: usize) -> Result<bool> {
        let keyref = self.keys.get_mut(key).ok_or(Error::InvalidKey { key })?;
        let changed = !*keyref;
        *keyref = true;
        Ok(changed)
    }

    /// Releases a key, and reports whether the key's state changed.
    /// If key is outside range `0..=0xF`, returns [Error::InvalidKey].
    pub fn release(&mut self, key: usize) -> Result<bool> {
        let keyref = self.keys.get_mut(key).ok_or(Error::InvalidKey { key })?;
        let changed = *keyref;
        *keyref = false;
        Ok(changed)
    }

    /// Whether the key is held. Nonexistent keys are never held.
    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release() {
        let mut keys = Keypad::default();
        keys.press(0x7).unwrap();
        assert!(keys.release(0x7).unwrap());
        assert!(!keys.release(0x7).unwrap());
        assert!(!keys.is_pressed(0x7));
    }

    #[test]
    fn invalid_key() {
        let mut keys = Keypad::default();
        assert!(matches!(
            keys.press(0x21345134),
            Err(Error::InvalidKey { key: 0x21345134 })
        ));
        assert!(keys.release(0x10).is_err());
        assert!(!keys.is_pressed(0x10));
        assert_eq!(Keypad::default(), keys);
    }
}
