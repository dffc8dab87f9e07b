//! Ticker launch and tick intake for the UI thread.

use egg_core::{TickReceiver, Ticker, TickerConfig, TimerState};

/// Starts the ticker thread; every tick asks egui for a repaint so the next
/// frame takes the backlog.
pub fn launch_ticker(
    config: TickerConfig,
    ctx: egui::Context,
) -> std::io::Result<(Ticker, TickReceiver)> {
    Ticker::spawn(config, move || ctx.request_repaint())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickIntake {
    pub received: u32,
    pub applied: u32,
}

/// Applies every tick that elapsed since the last frame, one increment at a time.
pub fn drain_ticks(tick_rx: &TickReceiver, timer: &mut TimerState) -> TickIntake {
    let mut intake = TickIntake::default();
    let Some(tick) = tick_rx.try_take() else {
        return intake;
    };

    intake.received = tick.ticks;
    for _ in 0..tick.ticks {
        if !timer.apply_tick(tick.increment) {
            break;
        }
        intake.applied += 1;
    }
    tracing::trace!(
        received = intake.received,
        applied = intake.applied,
        progress = timer.progress(),
        "drained ticks"
    );
    intake
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg_core::{tick_channel, TimerPhase};

    #[test]
    fn drains_pending_ticks_into_running_timer() {
        let (tick_tx, tick_rx) = tick_channel(0.1);
        let mut timer = TimerState::new();
        timer.press("10");

        for _ in 0..3 {
            assert!(tick_tx.deliver());
        }
        let intake = drain_ticks(&tick_rx, &mut timer);
        assert_eq!(
            intake,
            TickIntake {
                received: 3,
                applied: 3
            }
        );
        assert!((timer.progress() - 0.3).abs() < 1e-6);
        assert_eq!(tick_rx.try_take(), None);
    }

    #[test]
    fn frames_skipped_for_a_while_still_see_all_progress() {
        let (tick_tx, tick_rx) = tick_channel(0.004);
        let mut timer = TimerState::new();
        timer.press("10");

        // A second of ticks arrives while the window draws nothing.
        for _ in 0..25 {
            assert!(tick_tx.deliver());
        }
        let intake = drain_ticks(&tick_rx, &mut timer);
        assert_eq!(intake.applied, 25);
        assert!((timer.progress() - 0.1).abs() < 1e-4);
        assert_eq!(timer.display_text().as_deref(), Some("9.0"));
    }

    #[test]
    fn backlog_past_completion_stops_at_finished() {
        let (tick_tx, tick_rx) = tick_channel(0.25);
        let mut timer = TimerState::new();
        timer.press("4");

        for _ in 0..10 {
            tick_tx.deliver();
        }
        let intake = drain_ticks(&tick_rx, &mut timer);
        assert_eq!(intake.received, 10);
        assert_eq!(intake.applied, 4);
        assert_eq!(timer.phase(), TimerPhase::Finished);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn idle_timer_consumes_but_ignores_ticks() {
        let (tick_tx, tick_rx) = tick_channel(0.004);
        let mut timer = TimerState::new();
        tick_tx.deliver();

        let intake = drain_ticks(&tick_rx, &mut timer);
        assert_eq!(intake.received, 1);
        assert_eq!(intake.applied, 0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn empty_backlog_is_a_no_op() {
        let (_tick_tx, tick_rx) = tick_channel(0.004);
        let mut timer = TimerState::new();
        assert_eq!(drain_ticks(&tick_rx, &mut timer), TickIntake::default());
    }
}
