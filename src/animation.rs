//! Hand animation: current angles chase target angles a little each frame.

use crate::clock::HandAngles;

/// Default convergence rate (per second) of the hands toward their targets.
pub const DEFAULT_CONVERGENCE_RATE: f64 = 4.0;

fn lerp(current: f64, target: f64, t: f64) -> f64 {
    (target - current) * t + current
}

/// Current and target pose of both hands.
///
/// Angles are never wrapped, so a retarget that crosses 12 o'clock swings the
/// long way round. That is accepted as cosmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    current: HandAngles,
    target: HandAngles,
    rate: f64,
}

impl AnimationState {
    pub fn new(rate: f64) -> Self {
        Self {
            current: HandAngles::RESTING,
            target: HandAngles::RESTING,
            rate,
        }
    }

    pub fn current(&self) -> HandAngles {
        self.current
    }

    pub fn target(&self) -> HandAngles {
        self.target
    }

    /// Move both hands toward the target. The step factor is capped at 1 so a
    /// long frame lands on the target instead of overshooting it.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let t = (dt * self.rate).min(1.0);
        self.current.hour = lerp(self.current.hour, self.target.hour, t);
        self.current.minute = lerp(self.current.minute, self.target.minute, t);
    }

    /// Replace the target only; the hands animate there on later frames.
    pub fn retarget(&mut self, angles: HandAngles) {
        self.target = angles;
    }

    pub fn is_settled(&self, eps: f64) -> bool {
        (self.current.hour - self.target.hour).abs() <= eps
            && (self.current.minute - self.target.minute).abs() <= eps
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERGENCE_RATE)
    }
}
