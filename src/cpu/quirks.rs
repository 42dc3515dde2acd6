// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Controls the [Quirks] behavior of the machine on a granular level.

/// Controls the quirk behavior of the machine on a granular level.
///
/// `false` is Cosmac-VIP-like behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quirks {
    /// Draw operations should wrap from bottom to top and side to side,
    /// instead of clipping at the edges of the screen
    pub screen_wrap: bool,
}

impl From<bool> for Quirks {
    fn from(value: bool) -> Self {
        Quirks { screen_wrap: value }
    }
}
