//! UI actions and how they mutate the timer and the duration field.

use egg_core::{PressOutcome, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Start/Stop/Finished button clicked.
    StartStopPressed,
    /// Enter pressed inside the duration field.
    DurationSubmitted,
}

pub fn apply_action(
    action: UiAction,
    timer: &mut TimerState,
    duration_input: &mut String,
) -> PressOutcome {
    tracing::debug!(?action, phase = ?timer.phase(), "ui action");
    let outcome = timer.press(duration_input.as_str());
    if let Some(text) = outcome.replacement_text() {
        *duration_input = text.to_string();
    }
    sync_duration_field(timer, duration_input);
    outcome
}

/// Mirrors the timer into the duration field: remaining seconds while running,
/// "Done!" once finished, untouched while idle.
pub fn sync_duration_field(timer: &TimerState, duration_input: &mut String) {
    if let Some(text) = timer.display_text() {
        if *duration_input != text {
            *duration_input = text;
        }
    }
}
