//! Controller layer: ticker intake and button handling between the UI and the timer core.

pub mod events;
pub mod orchestration;
