use std::{thread, time::Duration};

use egg_core::{
    ticker::DEFAULT_TICK_INCREMENT, PressOutcome, Tick, TickReceiver, Ticker, TickerConfig,
    TimerPhase, TimerState,
};

fn fast_ticker() -> (Ticker, TickReceiver) {
    Ticker::spawn(
        TickerConfig {
            hz: 500,
            increment: DEFAULT_TICK_INCREMENT,
        },
        || {},
    )
    .expect("spawn ticker")
}

fn next_tick(tick_rx: &TickReceiver) -> Tick {
    tick_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("tick before timeout")
}

/// Applies up to `limit` of the ticks in `tick`, returning how many moved progress.
fn feed(timer: &mut TimerState, tick: Tick, limit: u32) -> u32 {
    let mut applied = 0;
    for _ in 0..tick.ticks.min(limit) {
        if timer.apply_tick(tick.increment) {
            applied += 1;
        }
    }
    applied
}

#[test]
fn full_sweep_takes_two_hundred_fifty_ticks_and_ends_done() {
    let (_ticker, tick_rx) = fast_ticker();
    let mut timer = TimerState::new();
    assert!(matches!(timer.press("240"), PressOutcome::Started { .. }));

    let mut applied = 0;
    while timer.phase() == TimerPhase::Running {
        applied += feed(&mut timer, next_tick(&tick_rx), u32::MAX);
        assert!(applied <= 260, "sweep did not finish");
    }

    assert!((250..=251).contains(&applied), "applied {applied} ticks");
    assert_eq!(timer.progress(), 1.0);
    assert_eq!(timer.display_text().as_deref(), Some("Done!"));
    assert_eq!(timer.button_label(), "Finished");
}

#[test]
fn late_take_catches_up_on_every_elapsed_tick() {
    let (_ticker, tick_rx) = Ticker::spawn(TickerConfig::default(), || {}).expect("spawn ticker");
    let mut timer = TimerState::new();
    timer.press("10");

    thread::sleep(Duration::from_secs(1));

    let tick = tick_rx.try_take().expect("ticks accumulated while not drawing");
    let applied = feed(&mut timer, tick, u32::MAX);
    assert!(applied >= 20, "expected about 25 ticks after 1s, got {applied}");
    assert!((timer.progress() - applied as f32 * DEFAULT_TICK_INCREMENT).abs() < 1e-4);
}

#[test]
fn idle_timer_ignores_live_ticks() {
    let (_ticker, tick_rx) = fast_ticker();
    let mut timer = TimerState::new();

    let mut seen = 0;
    while seen < 20 {
        let tick = next_tick(&tick_rx);
        assert_eq!(feed(&mut timer, tick, u32::MAX), 0);
        seen += tick.ticks;
    }
    assert_eq!(timer.progress(), 0.0);
}

#[test]
fn stop_and_resume_keeps_total_duration() {
    let (_ticker, tick_rx) = fast_ticker();
    let mut timer = TimerState::new();
    timer.press("100");

    let mut applied = 0;
    while applied < 125 {
        applied += feed(&mut timer, next_tick(&tick_rx), 125 - applied);
    }
    assert!((timer.progress() - 0.5).abs() < 1e-3);

    assert!(matches!(timer.press(""), PressOutcome::Stopped { .. }));
    let paused_at = timer.progress();
    for _ in 0..5 {
        feed(&mut timer, next_tick(&tick_rx), u32::MAX);
    }
    assert_eq!(timer.progress(), paused_at);

    timer.press("50");
    assert!((timer.boil_duration() - 100.0).abs() < 0.5);
    let remaining: f32 = timer
        .display_text()
        .expect("running timer shows remaining time")
        .parse()
        .expect("numeric remaining time");
    assert!((remaining - 50.0).abs() < 0.15);
}

#[test]
fn rejected_input_leaves_timer_idle() {
    let mut timer = TimerState::new();
    let outcome = timer.press("a dozen");
    assert_eq!(outcome.replacement_text(), Some("Please enter a number"));
    assert_eq!(timer.phase(), TimerPhase::Idle);
    assert_eq!(timer.progress(), 0.0);
}
