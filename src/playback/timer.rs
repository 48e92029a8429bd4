use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Shortest period a ticker runs at
pub const MIN_TIMER_DELAY: Duration = Duration::from_millis(4);

/// Longest delay a host timer accepts, in ms. Longer delays fire at once.
pub const MAX_TIMER_DELAY_MS: f64 = i32::MAX as f64;

/// Schedulable period for a raw interval
///
/// NaN, infinite, negative and overlong intervals count as 0, and
/// everything is floored at `MIN_TIMER_DELAY`.
pub fn timer_period(interval_ms: f64) -> Duration {
    let schedulable = interval_ms.is_finite() && interval_ms > 0.0;
    let ms = if schedulable && interval_ms <= MAX_TIMER_DELAY_MS {
        interval_ms
    } else {
        0.0
    };
    Duration::from_micros((ms * 1000.0).round() as u64).max(MIN_TIMER_DELAY)
}

/// Owned handle to a repeating timer task
///
/// The first tick fires one period after spawning. Dropping the handle
/// cancels the task.
#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    period: Duration,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker calling `on_tick` every `period` until it returns `false`
    pub fn spawn<F>(runtime: &Handle, generation: u64, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });

        Self {
            generation,
            period,
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the timer
    pub fn cancel(self) {
        drop(self)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
