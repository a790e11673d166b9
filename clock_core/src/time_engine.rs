//! Time Engine - wall-clock sampling for the hand update loop
//!
//! Decomposes an instant into the hour/minute/second fields the angle engine
//! consumes. A fresh sample is taken every frame and thrown away afterwards.

use chrono::{DateTime, Local, TimeZone, Timelike};

/// One reading of the wall clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Hour in 24-hour format (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Fractional seconds (0.0-1.0) for smooth animations
    pub second_fraction: f64,
}

impl TimeSample {
    /// Whole-second sample with no sub-second part
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            second_fraction: 0.0,
        }
    }

    /// Same reading with a sub-second fraction
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.second_fraction = fraction.clamp(0.0, NEARLY_ONE);
        self
    }

    /// Seconds including the fractional part
    pub fn precise_second(&self) -> f64 {
        self.second as f64 + self.second_fraction
    }

    /// Format the time as "hh:mm:ss" (24-hour)
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

const NEARLY_ONE: f64 = 1.0 - f64::EPSILON;

/// Sample the local wall clock now
pub fn sample_now() -> TimeSample {
    sample_at(&Local::now())
}

/// Sample a specific instant in its own time zone
pub fn sample_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> TimeSample {
    // chrono reports a leap second as nanos >= 1_000_000_000
    let nanos = instant.nanosecond().min(999_999_999);

    TimeSample {
        hour: instant.hour(),
        minute: instant.minute(),
        second: instant.second(),
        second_fraction: nanos as f64 / 1_000_000_000.0,
    }
}

/// Where the update loop gets its time from
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// The local system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeSample {
        sample_now()
    }
}

/// A frozen reading, always returning the same sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub TimeSample);

impl FixedClock {
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(sample_at(instant))
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_sample_now_ranges() {
        let data = sample_now();
        assert!(data.hour < 24);
        assert!(data.minute < 60);
        assert!(data.second < 60);
        assert!(data.second_fraction >= 0.0 && data.second_fraction < 1.0);
    }

    #[test]
    fn test_sample_at_fields() {
        let instant = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_milli_opt(15, 42, 7, 250)
            .unwrap()
            .and_utc();
        let sample = sample_at(&instant);
        assert_eq!((sample.hour, sample.minute, sample.second), (15, 42, 7));
        assert!((sample.second_fraction - 0.25).abs() < 1e-9);
        assert_eq!(sample.format_time(), "15:42:07");
    }

    #[test]
    fn test_leap_second_fraction_stays_below_one() {
        let instant = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap()
            .and_utc();
        let sample = sample_at(&instant);
        assert_eq!(sample.second, 59);
        assert!(sample.second_fraction < 1.0);
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let clock = FixedClock::at(&Utc::now());
        assert_eq!(clock.now(), clock.now());
    }
}
