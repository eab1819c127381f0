//! Splash countdown: tick policy plus the ticker feeding it.

use crate::frame::{Disposable, MainThread};
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// What the guide screen does on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    Show(u64),
    /// Show the last second and route on the same tick.
    ShowAndRoute(u64),
    Route,
}

#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    total: u64,
}

impl Countdown {
    pub fn new(total: u64) -> Self {
        Self { total }
    }

    /// `elapsed` is the 1-based tick number. Routing happens when one second
    /// is left, not at zero; zero or less routes as a fallback.
    pub fn on_tick(&self, elapsed: u64) -> TickAction {
        match self.total.checked_sub(elapsed) {
            Some(0) | None => TickAction::Route,
            Some(1) => TickAction::ShowAndRoute(1),
            Some(remaining) => TickAction::Show(remaining),
        }
    }
}

pub fn format_remaining(remaining: u64) -> String {
    format!("{}s", remaining)
}

/// Post `make(n)` every `period`, n = 1, 2, ..., first one `period` from now.
/// Stops when the returned handle is disposed or the screen's queue closes.
/// A zero `period` is raised to one millisecond.
pub fn start_ticker<E, F>(main: MainThread<E>, period: Duration, make: F) -> Disposable
where
    E: Send + 'static,
    F: Fn(u64) -> E + Send + 'static,
{
    let period = period.max(MIN_TICK_PERIOD);
    let disposable = Disposable::new();
    let guard = disposable.clone();

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut elapsed = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = guard.disposed() => break,
                _ = ticker.tick() => {
                    elapsed += 1;
                    if !main.post(make(elapsed)) {
                        break;
                    }
                }
            }
        }
    });

    disposable
}
