//! Welcome sequence run once the entry animation hands off: pull back to a
//! wide shot of the whole system, hold, then lock onto the first planet.

use crate::constants::{OVERVIEW_HOLD_SEC, OVERVIEW_TWEEN_SEC};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntroPhase {
    Idle,
    Overview { remaining: f32 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WelcomeSequence {
    phase: IntroPhase,
    pub glide_sec: f32,
    pub hold_sec: f32,
}

impl Default for WelcomeSequence {
    fn default() -> Self {
        Self::new(OVERVIEW_TWEEN_SEC, OVERVIEW_HOLD_SEC)
    }
}

impl WelcomeSequence {
    pub fn new(glide_sec: f32, hold_sec: f32) -> Self {
        Self {
            phase: IntroPhase::Idle,
            glide_sec,
            hold_sec,
        }
    }

    #[inline]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, IntroPhase::Overview { .. })
    }

    pub fn start(&mut self) {
        self.phase = IntroPhase::Overview {
            remaining: self.glide_sec + self.hold_sec,
        };
    }

    /// User input takes over; the sequence won't yank focus afterwards.
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("[intro] cancelled by input");
            self.phase = IntroPhase::Done;
        }
    }

    /// Returns true exactly once, on the tick the overview hold runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let IntroPhase::Overview { remaining } = &mut self.phase {
            *remaining -= dt.max(0.0);
            if *remaining <= 0.0 {
                self.phase = IntroPhase::Done;
                return true;
            }
        }
        false
    }
}
