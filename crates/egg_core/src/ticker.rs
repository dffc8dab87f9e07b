//! Fixed-cadence progress ticker feeding the timer owner.
//!
//! Ticks are never dropped: the ticker adds to a shared backlog and raises a
//! single-slot signal, and the consumer takes the whole backlog at once. A
//! consumer that falls behind (hidden window, slow frame) catches up on its
//! next take.

use std::{
    io,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};

pub const DEFAULT_TICK_HZ: u32 = 25;
pub const DEFAULT_TICK_INCREMENT: f32 = 0.004;
/// Above this the period rounds towards zero and the ticker would spin.
pub const MAX_TICK_HZ: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerConfig {
    pub hz: u32,
    pub increment: f32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            hz: DEFAULT_TICK_HZ,
            increment: DEFAULT_TICK_INCREMENT,
        }
    }
}

impl TickerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(1) / self.hz.clamp(1, MAX_TICK_HZ)
    }

    /// Wall-clock time for progress to sweep from 0 to 1.
    pub fn sweep_duration(&self) -> Duration {
        let ticks = (1.0 / self.increment).round() as u32;
        self.period() * ticks
    }
}

/// One or more elapsed ticks, each worth `increment` of progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub ticks: u32,
    pub increment: f32,
}

impl Tick {
    pub fn progress(&self) -> f32 {
        self.ticks as f32 * self.increment
    }
}

/// Creates a connected sender/receiver pair sharing one backlog.
pub fn tick_channel(increment: f32) -> (TickSender, TickReceiver) {
    let (signal_tx, signal_rx) = bounded::<()>(1);
    let pending = Arc::new(AtomicU32::new(0));
    (
        TickSender {
            signal: signal_tx,
            pending: Arc::clone(&pending),
        },
        TickReceiver {
            signal: signal_rx,
            pending,
            increment,
        },
    )
}

pub struct TickSender {
    signal: Sender<()>,
    pending: Arc<AtomicU32>,
}

impl TickSender {
    /// Records one elapsed tick. Returns `false` once the receiver is gone.
    pub fn deliver(&self) -> bool {
        self.pending.fetch_add(1, Ordering::AcqRel);
        match self.signal.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => {
                tracing::trace!("consumer behind; tick added to backlog");
                true
            }
            Err(TrySendError::Disconnected(())) => false,
        }
    }
}

pub struct TickReceiver {
    signal: Receiver<()>,
    pending: Arc<AtomicU32>,
    increment: f32,
}

impl TickReceiver {
    /// Takes every tick accumulated since the last take, without blocking.
    pub fn try_take(&self) -> Option<Tick> {
        while self.signal.try_recv().is_ok() {}
        let ticks = self.pending.swap(0, Ordering::AcqRel);
        (ticks > 0).then_some(Tick {
            ticks,
            increment: self.increment,
        })
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<Tick> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(tick) = self.try_take() {
                return Some(tick);
            }
            let left = deadline.saturating_duration_since(Instant::now());
            match self.signal.recv_timeout(left) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return self.try_take();
                }
            }
        }
    }
}

pub struct Ticker {
    handle: thread::JoinHandle<()>,
}

impl Ticker {
    /// Starts the ticker thread. `wake` runs after every tick so the consumer
    /// can schedule a redraw and take the backlog.
    pub fn spawn<W>(config: TickerConfig, wake: W) -> io::Result<(Self, TickReceiver)>
    where
        W: Fn() + Send + 'static,
    {
        let (tick_tx, tick_rx) = tick_channel(config.increment);
        let handle = thread::Builder::new()
            .name("egg-ticker".to_string())
            .spawn(move || run(config.period(), tick_tx, wake))?;
        tracing::debug!(
            hz = config.hz,
            increment = config.increment,
            "ticker started"
        );
        Ok((Self { handle }, tick_rx))
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

fn run<W: Fn()>(period: Duration, tick_tx: TickSender, wake: W) {
    loop {
        thread::sleep(period);
        if !tick_tx.deliver() {
            tracing::debug!("tick receiver dropped; ticker exiting");
            return;
        }
        wake();
    }
}
