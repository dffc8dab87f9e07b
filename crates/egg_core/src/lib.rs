//! Toolkit-independent core of the egg timer: the progress ticker, the
//! start/stop state machine, egg geometry and window titles.

pub mod egg;
pub mod error;
pub mod ticker;
pub mod timer;
pub mod title;

pub use error::{parse_duration_input, DurationInputError, INVALID_DURATION_MESSAGE};
pub use ticker::{tick_channel, Tick, TickReceiver, TickSender, Ticker, TickerConfig};
pub use timer::{PressOutcome, TimerPhase, TimerState};
