//! The periodic timer driving the clocks.
//!
//! A [`Ticker`] owns a single background task, emitting a [`Tick`] each period. In
//! [`ClockMode::System`], the task reads the [`TimeSource`]. In [`ClockMode::Custom`], it
//! [advances](crate::advance::advance) the custom time instead. Setting a new mode replaces the
//! task, and dropping the ticker stops it, so two modes never tick for the same clock.

use std::{sync::Arc, time::Duration};

use mkenv::prelude::*;
use tokio::{sync::watch, task::JoinHandle, time};

use crate::{
    advance::advance,
    codec,
    error::{ClockError, ClockResult},
    source::TimeSource,
    time::{CanonicalTime, DisplayTime},
    validate::CustomTimeInput,
};

/// Where the time of the clocks comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockMode {
    /// The time is read from the time source at each tick.
    System,
    /// The time starts at the provided value and is advanced by one second at each tick.
    Custom(DisplayTime),
}

/// A time emitted by the ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The time to show.
    pub time: CanonicalTime,
    /// Whether this time is a simulated custom time.
    pub custom: bool,
    epoch: u64,
}

/// Receives the ticks of a [`Ticker`].
///
/// Only the latest tick is kept, so a slow receiver skips the ticks it missed.
#[derive(Clone, Debug)]
pub struct TickReceiver(watch::Receiver<Tick>);

impl TickReceiver {
    /// Returns the latest tick and marks it as seen.
    pub fn current(&mut self) -> Tick {
        *self.0.borrow_and_update()
    }

    /// Waits for a tick that wasn't seen yet, and returns it.
    ///
    /// Returns [`ClockError::TickerStopped`] once the ticker is dropped. After
    /// [`Ticker::stop`], this keeps waiting until a mode is set again or the ticker is dropped.
    pub async fn next(&mut self) -> ClockResult<Tick> {
        self.0
            .changed()
            .await
            .map_err(|_| ClockError::TickerStopped)?;
        Ok(self.current())
    }
}

/// The owner of the periodic task of a clock.
///
/// It must be created and used within a Tokio runtime.
pub struct Ticker {
    source: Arc<dyn TimeSource>,
    period: Duration,
    tx: Arc<watch::Sender<Tick>>,
    mode: ClockMode,
    epoch: u64,
    task: Option<JoinHandle<()>>,
}

async fn run<F>(
    tx: Arc<watch::Sender<Tick>>,
    period: Duration,
    epoch: u64,
    custom: bool,
    mut next: F,
) where
    F: FnMut() -> CanonicalTime,
{
    let mut interval = time::interval(period);
    // The first tick completes immediately, and its time was sent when the mode was set.
    interval.tick().await;

    loop {
        interval.tick().await;
        let time = next();

        let sent = tx.send_if_modified(|tick| {
            if tick.epoch != epoch {
                return false;
            }
            *tick = Tick {
                time,
                custom,
                epoch,
            };
            true
        });

        if !sent {
            tracing::debug!("Clock mode was replaced, stopping the tick task");
            break;
        }

        tracing::trace!(?time, custom, "Tick");
    }
}

impl Ticker {
    /// Returns a ticker in [`ClockMode::System`], ticking each `period`.
    ///
    /// A zero period is raised to one millisecond.
    pub fn new(source: Arc<dyn TimeSource>, period: Duration) -> Self {
        let period = if period.is_zero() {
            tracing::warn!("Tick period can't be zero, using 1ms");
            Duration::from_millis(1)
        } else {
            period
        };

        let (tx, _) = watch::channel(Tick {
            time: source.now(),
            custom: false,
            epoch: 0,
        });

        let mut ticker = Self {
            source,
            period,
            tx: Arc::new(tx),
            mode: ClockMode::System,
            epoch: 0,
            task: None,
        };
        ticker.set_mode(ClockMode::System);
        ticker
    }

    /// Returns a ticker in [`ClockMode::System`], ticking each `CLOCK_TICK_INTERVAL_MS`.
    ///
    /// **Caution**: The [`init_env()`](crate::init_env) function must have been called before.
    pub fn from_env(source: Arc<dyn TimeSource>) -> Self {
        Self::new(source, crate::env().tick_interval.get())
    }

    /// Returns a receiver of the ticks, starting with the current one marked as seen.
    pub fn subscribe(&self) -> TickReceiver {
        TickReceiver(self.tx.subscribe())
    }

    /// The current mode.
    ///
    /// For the custom mode, this is the time the mode was set with, not the advanced one.
    #[inline]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// The tick period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Replaces the current mode with the provided one.
    ///
    /// The first time of the new mode is emitted right away, and the task of the previous mode
    /// is stopped. A tick from the previous mode can't be emitted after this call.
    pub fn set_mode(&mut self, mode: ClockMode) {
        self.stop();
        self.epoch += 1;
        self.mode = mode;
        let epoch = self.epoch;

        let task = match mode {
            ClockMode::System => {
                let source = self.source.clone();
                self.tx.send_replace(Tick {
                    time: source.now(),
                    custom: false,
                    epoch,
                });
                tokio::spawn(run(self.tx.clone(), self.period, epoch, false, move || {
                    source.now()
                }))
            }
            ClockMode::Custom(start) => {
                self.tx.send_replace(Tick {
                    time: start.to_canonical(),
                    custom: true,
                    epoch,
                });
                let mut current = start;
                tokio::spawn(run(self.tx.clone(), self.period, epoch, true, move || {
                    current = advance(current);
                    current.to_canonical()
                }))
            }
        };

        tracing::debug!(?mode, "Clock mode set");
        self.task = Some(task);
    }

    /// Switches to the custom mode with the provided `HH:MM:SS AM|PM` text.
    ///
    /// If the text is malformed, the current mode and time are kept, and the error is returned.
    pub fn apply_custom_text(&mut self, text: &str) -> ClockResult {
        match codec::parse(text) {
            Ok(time) => {
                self.set_mode(ClockMode::Custom(time.into()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Ignoring custom time `{text}`: {e}");
                Err(e.into())
            }
        }
    }

    /// Switches to the custom mode with the provided user input.
    ///
    /// If a field is out of range, the current mode and time are kept, and the error is returned.
    pub fn apply_custom_input(&mut self, input: &CustomTimeInput) -> ClockResult {
        match input.validate() {
            Ok(time) => {
                self.set_mode(ClockMode::Custom(time));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Ignoring custom time {input:?}: {e}");
                Err(e.into())
            }
        }
    }

    /// Stops the task of the current mode. No more ticks are emitted until a mode is set again.
    ///
    /// The channel stays open, so the receivers wait for the next mode rather than getting
    /// [`ClockError::TickerStopped`].
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
