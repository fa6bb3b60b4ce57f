//! Periodic tick source for the simulation
//!
//! The driver wraps a `tokio::time::Interval` that exists only while the
//! game runs. Stopping drops the interval, so a stopped driver never fires.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub struct TickDriver {
    period: Duration,
    timer: Option<Interval>,
}

impl TickDriver {
    /// Create a stopped driver that will fire every `period` once started
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start (or restart) the schedule; the first tick fires one period from now
    pub fn start(&mut self) {
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Wait for the next tick; pends forever while stopped
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
