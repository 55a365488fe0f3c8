
use chrono::{DateTime, Local};

/// Wall-clock source for timing a single submission.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real clock used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Seconds between two readings, clamped at zero so a clock stepping
/// backwards mid-submission can never report a negative duration.
pub fn elapsed_seconds(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    ((end - start).num_milliseconds() as f64 / 1000.0).max(0.0)
}
