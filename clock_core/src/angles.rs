//! Angle engine - maps a time sample to hand rotations
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, and normalised
//! into `[0, 360)`.

use serde::{Deserialize, Serialize};

use crate::geometry::HandKind;
use crate::time_engine::TimeSample;

/// How the slower hands absorb the faster fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepMode {
    /// `minute + (5 * second) / 3 / 100` and `hour + (5 * minute) / 3 / 100`,
    /// fed whole seconds only.
    ///
    /// `5 / 3 / 100` reduces to `1 / 60`, so this carries whole fields; the
    /// minute hand still steps once per second.
    #[default]
    Literal,
    /// `minute + second / 60` and `hour + minute / 60`, with the sub-second
    /// fraction carried into the minute hand as well.
    Continuous,
}

impl SweepMode {
    pub fn toggled(self) -> Self {
        match self {
            SweepMode::Literal => SweepMode::Continuous,
            SweepMode::Continuous => SweepMode::Literal,
        }
    }
}

impl std::fmt::Display for SweepMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepMode::Literal => write!(f, "Literal"),
            SweepMode::Continuous => write!(f, "Continuous"),
        }
    }
}

/// Rotation of each hand in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

impl HandAngles {
    pub fn get(&self, kind: HandKind) -> f64 {
        match kind {
            HandKind::Hour => self.hour_deg,
            HandKind::Minute => self.minute_deg,
            HandKind::Second => self.second_deg,
        }
    }

    /// Rotation for `kind` in radians, ready for a node's rotation field
    pub fn radians(&self, kind: HandKind) -> f32 {
        degrees_to_radians(self.get(kind)) as f32
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Compute all three hand angles for one sample
pub fn compute_angles(sample: &TimeSample, mode: SweepMode) -> HandAngles {
    let second = sample.precise_second();
    let minute = sample.minute as f64;
    let hour = sample.hour as f64;

    let (minute_pos, hour_pos) = match mode {
        SweepMode::Literal => (
            minute + (5.0 * sample.second as f64) / 3.0 / 100.0,
            hour + (5.0 * minute) / 3.0 / 100.0,
        ),
        SweepMode::Continuous => (minute + second / 60.0, hour + minute / 60.0),
    };

    HandAngles {
        hour_deg: normalize((360.0 / 12.0) * hour_pos),
        minute_deg: normalize((360.0 / 60.0) * minute_pos),
        second_deg: normalize((360.0 / 60.0) * second),
    }
}

fn normalize(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_angles() {
        let three = compute_angles(&TimeSample::hms(3, 0, 0), SweepMode::Literal);
        assert!(close(three.hour_deg, 90.0));

        let six = compute_angles(&TimeSample::hms(6, 0, 0), SweepMode::Literal);
        assert!(close(six.hour_deg, 180.0));

        let half = compute_angles(&TimeSample::hms(0, 0, 30), SweepMode::Literal);
        assert!(close(half.second_deg, 180.0));
    }

    #[test]
    fn test_second_hand_is_six_degrees_per_second() {
        let mut previous = -1.0;
        for s in 0..60 {
            let angles = compute_angles(&TimeSample::hms(10, 10, s), SweepMode::Literal);
            assert!(close(angles.second_deg, 6.0 * s as f64));
            assert!(angles.second_deg > previous);
            previous = angles.second_deg;
        }
    }

    #[test]
    fn test_second_hand_wraps_at_full_minute() {
        let angles = compute_angles(&TimeSample::hms(0, 0, 60), SweepMode::Literal);
        assert!(close(angles.second_deg, 0.0));
    }

    #[test]
    fn test_sub_second_fraction_moves_second_hand() {
        let sample = TimeSample::hms(0, 0, 15).with_fraction(0.5);
        let angles = compute_angles(&sample, SweepMode::Literal);
        assert!(close(angles.second_deg, 93.0));
    }

    #[test]
    fn test_minute_hand_strictly_increases_with_seconds() {
        for mode in [SweepMode::Literal, SweepMode::Continuous] {
            for m in 0..60 {
                let mut previous = f64::MIN;
                for s in 0..60 {
                    let angles = compute_angles(&TimeSample::hms(8, m, s), mode);
                    assert!(angles.minute_deg > previous, "mode {mode} m={m} s={s}");
                    previous = angles.minute_deg;
                }
            }
        }
    }

    #[test]
    fn test_literal_smoothing_term() {
        let angles = compute_angles(&TimeSample::hms(1, 30, 30), SweepMode::Literal);
        // 30 + 150/300 = 30.5 minutes; 1 + 150/300 = 1.5 hours
        assert!(close(angles.minute_deg, 183.0));
        assert!(close(angles.hour_deg, 45.0));
    }

    #[test]
    fn test_literal_ignores_fraction_for_minute_hand() {
        let sample = TimeSample::hms(0, 10, 0).with_fraction(0.9);
        let literal = compute_angles(&sample, SweepMode::Literal);
        let continuous = compute_angles(&sample, SweepMode::Continuous);
        assert!(close(literal.minute_deg, 60.0));
        assert!(continuous.minute_deg > literal.minute_deg);
    }

    #[test]
    fn test_continuous_sweep() {
        let angles = compute_angles(&TimeSample::hms(2, 30, 30), SweepMode::Continuous);
        assert!(close(angles.minute_deg, 183.0));
        assert!(close(angles.hour_deg, 75.0));
    }

    #[test]
    fn test_afternoon_hours_wrap() {
        let angles = compute_angles(&TimeSample::hms(15, 0, 0), SweepMode::Literal);
        assert!(close(angles.hour_deg, 90.0));
    }

    #[test]
    fn test_radians() {
        let angles = compute_angles(&TimeSample::hms(6, 0, 0), SweepMode::Literal);
        assert!((angles.radians(HandKind::Hour) - std::f32::consts::PI).abs() < 1e-6);
    }
}
