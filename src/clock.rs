//! Clock time model: random round times and the hand angles they map to.
//!
//! Angles are in radians with zero pointing at 12 o'clock, growing clockwise
//! in canvas space (y axis points down, so `cos`/`sin` of these angles can be
//! fed straight into canvas coordinates).

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

/// Minutes covered by one full turn of the hour hand.
pub const MINUTES_PER_DIAL: u32 = 12 * 60;

/// A time as shown on a 12-hour analog dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hours: u8,   // 0..=11, 0 is displayed as 12
    minutes: u8, // 0..=59
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        if hours < 12 && minutes < 60 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Hour as a player would read it off the dial (hour 0 reads as 12).
    pub fn display_hours(&self) -> u8 {
        if self.hours == 0 { 12 } else { self.hours }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.display_hours(), self.minutes)
    }
}

/// Rotation of both hands for a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
}

impl HandAngles {
    /// Pose the hands hold before the first round is picked.
    pub const RESTING: HandAngles = HandAngles { hour: 0.0, minute: FRAC_PI_2 };
}

/// Map a time onto hand angles. The hour hand creeps with the minutes.
pub fn angles_for(time: ClockTime) -> HandAngles {
    let dial_minutes = time.hours as f64 * 60.0 + time.minutes as f64;
    HandAngles {
        hour: dial_minutes / MINUTES_PER_DIAL as f64 * TAU - FRAC_PI_2,
        minute: time.minutes as f64 / 60.0 * TAU - FRAC_PI_2,
    }
}

// --- Randomness -------------------------------------------------------------

/// Source of raw random words for the time generator.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `0..bound` (rejection sampling, no modulo bias).
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        let zone = u32::MAX - (u32::MAX % bound);
        loop {
            let r = self.next_u32();
            if r < zone {
                return r % bound;
            }
        }
    }
}

/// Browser crypto RNG (through `getrandom`'s `js` backend on wasm32).
#[cfg(feature = "rng")]
#[derive(Debug, Default)]
pub struct OsRandom;

#[cfg(feature = "rng")]
impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        if getrandom::getrandom(&mut buf).is_err() {
            // Entropy unavailable: fall back to the timestamp generator for this draw.
            return Lcg::from_clock().next_u32();
        }
        u32::from_le_bytes(buf)
    }
}

/// Linear congruential generator (not crypto secure).
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from `performance.now()`; seed 0 when there is no browser window.
    pub fn from_clock() -> Self {
        Self::new(crate::performance_now().to_bits())
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
}

/// The generator used by the running game.
#[cfg(feature = "rng")]
pub fn default_source() -> Box<dyn RandomSource> {
    Box::new(OsRandom)
}

#[cfg(not(feature = "rng"))]
pub fn default_source() -> Box<dyn RandomSource> {
    Box::new(Lcg::from_clock())
}

/// Pick a fresh round time: hour and minute sampled independently.
pub fn next_time(rng: &mut dyn RandomSource) -> ClockTime {
    let hours = rng.below(12) as u8;
    let minutes = rng.below(60) as u8;
    ClockTime { hours, minutes }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of words, cycling.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_angles_follow_formula_for_every_time() {
        for h in 0..12u8 {
            for m in 0..60u8 {
                let a = angles_for(ClockTime::new(h, m).unwrap());
                let hour = ((h as f64 * 60.0 + m as f64) / 720.0) * 2.0 * std::f64::consts::PI
                    - std::f64::consts::PI / 2.0;
                let minute = (m as f64 / 60.0) * 2.0 * std::f64::consts::PI
                    - std::f64::consts::PI / 2.0;
                assert!((a.hour - hour).abs() < 1e-6, "hour angle off at {h}:{m}");
                assert!((a.minute - minute).abs() < 1e-6, "minute angle off at {h}:{m}");
            }
        }
    }

    #[test]
    fn test_twelve_oclock_points_up() {
        let a = angles_for(ClockTime::new(0, 0).unwrap());
        assert!((a.hour + FRAC_PI_2).abs() < 1e-9);
        assert!((a.minute + FRAC_PI_2).abs() < 1e-9);
        // Three o'clock: hour hand points east (angle 0).
        let a = angles_for(ClockTime::new(3, 0).unwrap());
        assert!(a.hour.abs() < 1e-9);
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!(ClockTime::new(12, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
        assert!(ClockTime::new(11, 59).is_some());
    }

    #[test]
    fn test_display_uses_twelve_for_hour_zero() {
        let t = ClockTime::new(0, 5).unwrap();
        assert_eq!(t.display_hours(), 12);
        assert_eq!(t.to_string(), "12:05");
        assert_eq!(ClockTime::new(7, 30).unwrap().to_string(), "7:30");
    }

    #[test]
    fn test_below_rejects_biased_zone() {
        // u32::MAX lies in the rejected tail for bound 12, so the second word is used.
        let mut rng = Scripted(vec![u32::MAX, 25], 0);
        assert_eq!(rng.below(12), 1);
    }

    #[test]
    fn test_next_time_covers_full_range_uniformly() {
        let mut rng = Lcg::new(0x5eed);
        let mut hours = [0u32; 12];
        let mut minutes = [0u32; 60];
        let draws = 120_000;
        for _ in 0..draws {
            let t = next_time(&mut rng);
            hours[t.hours() as usize] += 1;
            minutes[t.minutes() as usize] += 1;
        }
        let hour_mean = draws as f64 / 12.0;
        for (h, &n) in hours.iter().enumerate() {
            assert!((n as f64 - hour_mean).abs() < hour_mean * 0.1, "hour {h} drawn {n} times");
        }
        let minute_mean = draws as f64 / 60.0;
        for (m, &n) in minutes.iter().enumerate() {
            assert!((n as f64 - minute_mean).abs() < minute_mean * 0.15, "minute {m} drawn {n} times");
        }
    }

    #[cfg(feature = "rng")]
    #[test]
    fn test_os_random_yields_valid_times() {
        let mut rng = OsRandom;
        for _ in 0..200 {
            let t = next_time(&mut rng);
            assert!(t.hours() < 12 && t.minutes() < 60);
        }
    }
}
