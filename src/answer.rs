//! Checking a typed `HHMM` answer against the clock.

use crate::clock::ClockTime;
use crate::input::InputBuffer;

/// Outcome of comparing the buffer with the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Fewer than four digits typed.
    Incomplete,
    Correct,
    Incorrect,
}

pub fn verdict(buffer: &InputBuffer, time: ClockTime) -> Verdict {
    let [h1, h0, m1, m0] = match buffer.digits() {
        &[a, b, c, d] => [a, b, c, d],
        _ => return Verdict::Incomplete,
    };
    if [h1, h0, m1, m0].iter().any(|d| *d > 9) {
        return Verdict::Incorrect;
    }
    let hours = h1 * 10 + h0;
    let minutes = m1 * 10 + m0;
    if hours > 12 || minutes > 59 {
        return Verdict::Incorrect;
    }
    if hours == time.display_hours() && minutes == time.minutes() {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

pub fn matches(buffer: &InputBuffer, time: ClockTime) -> bool {
    verdict(buffer, time) == Verdict::Correct
}
