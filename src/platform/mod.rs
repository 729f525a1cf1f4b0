//! Platform abstraction layer
//!
//! Handles the outside world for the game loop:
//! - Time/ticks (`Clock`)
//! - Quit requests (`InputSource`)

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Paces the loop to a fixed tick rate
pub trait Clock {
    /// Block until the next tick boundary
    fn wait_for_next_tick(&mut self);
}

/// Polled once per tick
pub trait InputSource {
    fn quit_requested(&mut self) -> bool;
}

/// Sleep-until-next-tick clock.
///
/// Deadlines advance by one period per tick; when the loop falls behind by
/// more than a full period the schedule restarts from now instead of bursting.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Clock for FrameClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else if now - self.next > self.period {
            log::trace!("frame clock behind by {:?}, resyncing", now - self.next);
            self.next = now + self.period;
        } else {
            self.next += self.period;
        }
    }
}

/// Never waits; runs the simulation as fast as possible
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl Clock for Unpaced {
    fn wait_for_next_tick(&mut self) {}
}

/// Shared quit flag, settable from another thread or a signal handler
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl InputSource for StopFlag {
    fn quit_requested(&mut self) -> bool {
        self.is_stopped()
    }
}

/// Requests quit after a fixed number of polls, or when its flag is set
#[derive(Debug, Clone)]
pub struct TickLimit {
    remaining: Option<u64>,
    flag: StopFlag,
}

impl TickLimit {
    /// `None` never expires on its own
    pub fn new(limit: Option<u64>, flag: StopFlag) -> Self {
        Self {
            remaining: limit,
            flag,
        }
    }
}

impl InputSource for TickLimit {
    fn quit_requested(&mut self) -> bool {
        if self.flag.is_stopped() {
            return true;
        }
        match self.remaining.as_mut() {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        }
    }
}
