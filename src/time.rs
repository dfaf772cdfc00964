//! Simulated clock for the solar-system viewer core.
//!
//! The clock is owned by the embedding UI layer and passed down each frame;
//! the core only ever reads elapsed days since the J2000.0 epoch. Stepping
//! works in signed hour/day/month increments, and running advances the clock
//! by one step per real-time second.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{J2000_UNIX, SECONDS_PER_DAY};

/// Unit for discrete time stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepUnit {
    Hours,
    Days,
    /// A fixed 30-day month, matching the coarse stepping of the viewer.
    Months,
}

impl StepUnit {
    /// Step length in seconds.
    pub fn seconds(self) -> f64 {
        match self {
            StepUnit::Hours => 3600.0,
            StepUnit::Days => SECONDS_PER_DAY,
            StepUnit::Months => 30.0 * SECONDS_PER_DAY,
        }
    }
}

/// Simulated UTC instant with a step size and a run/pause flag.
///
/// Time is stored as seconds since J2000.0 and may be negative (past dates)
/// or arbitrarily far in the future; every derived quantity is recomputed
/// from scratch, so jumping backward is as valid as stepping forward.
#[derive(Clone, Debug)]
pub struct SimulatedClock {
    /// Current time in seconds since J2000 epoch
    pub current: f64,
    /// Step unit applied by the discrete step methods and, per real-time
    /// second, by `advance`
    pub step: StepUnit,
    /// Whether the clock is paused
    pub paused: bool,
    /// Initial time for reset functionality
    initial: f64,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::at_j2000_seconds(current_j2000_seconds())
    }
}

impl SimulatedClock {
    /// Create a clock starting at a specific J2000 seconds value.
    pub fn at_j2000_seconds(seconds: f64) -> Self {
        Self {
            current: seconds,
            step: StepUnit::Hours,
            paused: false,
            initial: seconds,
        }
    }

    /// Create a clock starting at the given UTC date.
    pub fn from_date(date: DateTime<Utc>) -> Self {
        Self::at_j2000_seconds(date_to_j2000_seconds(date))
    }

    /// Advance the running clock by `real_dt` seconds of wall-clock time.
    ///
    /// The clock runs at one configured step per real-time second; while
    /// paused this is a no-op.
    pub fn advance(&mut self, real_dt: f64) {
        if self.paused {
            return;
        }
        self.current += self.step.seconds() * real_dt;
    }

    /// Jump forward by one configured step.
    pub fn step_forward(&mut self) {
        self.current += self.step.seconds();
    }

    /// Jump backward by one configured step.
    pub fn step_backward(&mut self) {
        self.current -= self.step.seconds();
    }

    /// Jump to the current system time.
    pub fn jump_to_now(&mut self) {
        self.current = current_j2000_seconds();
    }

    /// Set the clock to a specific UTC date.
    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.current = date_to_j2000_seconds(date);
    }

    /// Current instant as a UTC date, if it is representable by `chrono`.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        j2000_seconds_to_date(self.current)
    }

    /// Reset to the initial time and pause.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.paused = true;
    }

    /// Toggle the run/pause flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Elapsed days since J2000 (signed).
    pub fn days(&self) -> f64 {
        self.current / SECONDS_PER_DAY
    }

    /// Format the current instant for display: `YYYY-MM-DD HH:MM UTC`.
    ///
    /// Instants beyond chrono's representable range fall back to a raw
    /// day offset readout.
    pub fn date_string(&self) -> String {
        match self.date() {
            Some(date) => date.format("%Y-%m-%d %H:%M UTC").to_string(),
            None => format!("J2000 {:+.1} days", self.days()),
        }
    }
}

/// Convert Unix timestamp to seconds since J2000 epoch
pub fn unix_to_j2000_seconds(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64
}

/// Convert J2000 seconds to Unix timestamp, saturating at the i64 range.
pub fn j2000_seconds_to_unix(j2000_seconds: f64) -> i64 {
    J2000_UNIX.saturating_add(j2000_seconds as i64)
}

/// Convert a UTC date to seconds since J2000 epoch.
pub fn date_to_j2000_seconds(date: DateTime<Utc>) -> f64 {
    unix_to_j2000_seconds(date.timestamp())
}

/// Convert J2000 seconds to a UTC date.
///
/// Returns `None` for instants outside chrono's representable year range;
/// the simulated clock itself is unbounded.
pub fn j2000_seconds_to_date(j2000_seconds: f64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(j2000_seconds_to_unix(j2000_seconds), 0).single()
}

/// Get current time as J2000 seconds (using the system clock).
pub fn current_j2000_seconds() -> f64 {
    date_to_j2000_seconds(Utc::now())
}
