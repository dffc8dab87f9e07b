//! Start/stop/finished lifecycle of the egg timer and the text it derives for the UI.

use crate::error::{parse_duration_input, DurationInputError};

pub const DONE_LABEL: &str = "Done!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Finished,
}

impl TimerPhase {
    pub fn button_label(self) -> &'static str {
        match self {
            TimerPhase::Idle => "Start",
            TimerPhase::Running => "Stop",
            TimerPhase::Finished => "Finished",
        }
    }
}

/// Result of pressing the start/stop button.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    Started { boil_duration: f32 },
    Stopped { progress: f32 },
    /// Pressed after the sweep completed; the timer is back at zero.
    Reset,
    Rejected(DurationInputError),
}

impl PressOutcome {
    /// Text the duration field must be overwritten with, if any.
    pub fn replacement_text(&self) -> Option<&'static str> {
        match self {
            PressOutcome::Rejected(err) => Some(err.user_message()),
            PressOutcome::Reset => Some(""),
            PressOutcome::Started { .. } | PressOutcome::Stopped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerState {
    boiling: bool,
    progress: f32,
    boil_duration: f32,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boiling(&self) -> bool {
        self.boiling
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn boil_duration(&self) -> f32 {
        self.boil_duration
    }

    pub fn phase(&self) -> TimerPhase {
        if !self.boiling {
            TimerPhase::Idle
        } else if self.progress < 1.0 {
            TimerPhase::Running
        } else {
            TimerPhase::Finished
        }
    }

    pub fn button_label(&self) -> &'static str {
        self.phase().button_label()
    }

    pub fn press(&mut self, input: &str) -> PressOutcome {
        match self.phase() {
            TimerPhase::Idle => self.start(input),
            TimerPhase::Running => {
                self.boiling = false;
                tracing::info!(progress = self.progress, "timer stopped");
                PressOutcome::Stopped {
                    progress: self.progress,
                }
            }
            TimerPhase::Finished => {
                self.boiling = false;
                self.progress = 0.0;
                tracing::info!("finished timer reset");
                PressOutcome::Reset
            }
        }
    }

    fn start(&mut self, input: &str) -> PressOutcome {
        match parse_duration_input(input) {
            Ok(parsed) => {
                // Scales a resumed run so the remaining share of the sweep covers `parsed` seconds.
                self.boil_duration = parsed / (1.0 - self.progress);
                self.boiling = true;
                tracing::info!(
                    boil_duration = self.boil_duration,
                    progress = self.progress,
                    "timer started"
                );
                PressOutcome::Started {
                    boil_duration: self.boil_duration,
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected boil duration input");
                self.boiling = false;
                self.progress = 0.0;
                PressOutcome::Rejected(err)
            }
        }
    }

    /// Applies one ticker increment. Returns whether progress moved.
    pub fn apply_tick(&mut self, increment: f32) -> bool {
        if self.phase() != TimerPhase::Running {
            return false;
        }

        self.progress = (self.progress + increment).min(1.0);
        if self.progress >= 1.0 {
            tracing::info!(boil_duration = self.boil_duration, "egg is done");
        }
        true
    }

    pub fn remaining_seconds(&self) -> f32 {
        (1.0 - self.progress) * self.boil_duration
    }

    /// What the duration field shows for the current phase; `None` leaves the user's text alone.
    pub fn display_text(&self) -> Option<String> {
        match self.phase() {
            TimerPhase::Idle => None,
            TimerPhase::Running => Some(format_remaining(self.remaining_seconds())),
            TimerPhase::Finished => Some(DONE_LABEL.to_string()),
        }
    }
}

fn format_remaining(seconds: f32) -> String {
    let rounded = (seconds * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
