// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Selects whether, and how, the machine advances

use std::fmt::Display;

/// The run-state of the machine, checked by the driver between cycles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RunState {
    /// Executing one instruction per cycle
    #[default]
    Running,
    /// Doing nothing until resumed
    Paused,
    /// Executing exactly one more instruction, then pausing
    Stepping,
    /// Stopped for good. The machine must not be stepped again.
    Halted,
}

impl RunState {
    /// Toggles between [RunState::Running] and [RunState::Paused].
    ///
    /// [RunState::Stepping] pauses, and [RunState::Halted] stays halted.
    /// # Examples
    /// ```rust
    /// # use chipcore::prelude::*;
    /// let mut state = RunState::Running;
    /// state.toggle_pause();
    /// assert_eq!(RunState::Paused, state);
    /// state.toggle_pause();
    /// assert_eq!(RunState::Running, state);
    /// ```
    pub fn toggle_pause(&mut self) {
        *self = match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stepping => RunState::Paused,
            RunState::Halted => RunState::Halted,
        }
    }

    /// Requests a single step. Only a paused machine can single-step.
    pub fn step(&mut self) {
        if *self == RunState::Paused {
            *self = RunState::Stepping
        }
    }

    /// Halts the machine. Halted is terminal.
    pub fn halt(&mut self) {
        *self = RunState::Halted
    }

    /// Whether the machine is halted
    pub fn is_halted(&self) -> bool {
        *self == RunState::Halted
    }

    /// Whether the machine is paused (and not about to step)
    pub fn is_paused(&self) -> bool {
        *self == RunState::Paused
    }
}

impl Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::Stepping => "Stepping",
            RunState::Halted => "Halted",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halted_is_terminal() {
        let mut state = RunState::Halted;
        state.toggle_pause();
        state.step();
        assert!(state.is_halted());
    }

    #[test]
    fn step_only_from_paused() {
        let mut state = RunState::Running;
        state.step();
        assert_eq!(RunState::Running, state);
        state.toggle_pause();
        state.step();
        assert_eq!(RunState::Stepping, state);
        state.toggle_pause();
        assert!(state.is_paused());
    }
}
