use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// One frame tick carrying the wall-clock gap since the previous tick,
    /// in seconds. The first tick of a loop carries 0.0.
    Tick(f32),
}

/// Drives the suite: a background thread that forwards terminal input and
/// emits ticks at a fixed cadence.
///
/// `start` replaces any loop already running instead of stacking a second
/// one, and after `stop` returns no further events are delivered.
pub struct Scheduler {
    tick_rate: Duration,
    inner: Option<Inner>,
}

struct Inner {
    rx: mpsc::Receiver<Event>,
    stop: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl Scheduler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            inner: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.is_some()
    }

    pub fn start(&mut self) {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let tick_rate = self.tick_rate;

        let handle = thread::spawn(move || {
            let mut last_tick: Option<Instant> = None;
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    return;
                }
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(crossterm::event::Event::Key(key)) => {
                            if key.kind == KeyEventKind::Press
                                && tx.send(Event::Key(key)).is_err()
                            {
                                return;
                            }
                        }
                        Ok(crossterm::event::Event::Mouse(mouse)) => {
                            if tx.send(Event::Mouse(mouse)).is_err() {
                                return;
                            }
                        }
                        _ => {}
                    }
                } else {
                    let now = Instant::now();
                    let dt = last_tick.map_or(0.0, |t| (now - t).as_secs_f32());
                    last_tick = Some(now);
                    if tx.send(Event::Tick(dt)).is_err() {
                        return;
                    }
                }
            }
        });

        self.inner = Some(Inner { rx, stop, handle });
    }

    /// Stop the loop and wait for the thread to exit. Events still queued
    /// in the channel are discarded with it.
    pub fn stop(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.stop.store(true, Ordering::Relaxed);
            let _ = inner.handle.join();
        }
    }

    pub fn next(&self) -> io::Result<Event> {
        let inner = self
            .inner
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "scheduler stopped"))?;
        inner
            .rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fixed-rate stepping helper: accumulates elapsed time and fires once the
/// target interval is crossed, carrying the remainder over. Used by Snake
/// for its discrete grid steps.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    interval: f32,
    accumulated: f32,
}

impl FixedStep {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval: interval_secs,
            accumulated: 0.0,
        }
    }

    pub fn set_interval(&mut self, interval_secs: f32) {
        self.interval = interval_secs;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Feed elapsed time; returns true when a step is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_carries_remainder() {
        let mut step = FixedStep::new(0.1);
        assert!(!step.tick(0.06));
        // 0.06 + 0.06 = 0.12 crosses the interval, 0.02 carries over
        assert!(step.tick(0.06));
        assert!(step.tick(0.08));
        assert!(!step.tick(0.01));
    }

    #[test]
    fn test_fixed_step_reset() {
        let mut step = FixedStep::new(0.1);
        step.tick(0.09);
        step.reset();
        assert!(!step.tick(0.09));
        assert!(step.tick(0.01));
    }

    #[test]
    fn test_scheduler_stop_ends_delivery() {
        let mut scheduler = Scheduler::new(5);
        scheduler.start();
        assert!(scheduler.is_running());
        // Without a terminal the loop still emits ticks at the fixed rate
        assert!(scheduler.next().is_ok());
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert!(scheduler.next().is_err());
    }

    #[test]
    fn test_scheduler_restart_replaces() {
        let mut scheduler = Scheduler::new(5);
        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_running());
        assert!(scheduler.next().is_ok());
        scheduler.stop();
    }
}
