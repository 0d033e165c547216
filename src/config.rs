//! Game configuration. Defaults reproduce the stock 400x600 game; a page can
//! override fields with a JSON object when the `serde_json` feature is on.

use crate::animation::DEFAULT_CONVERGENCE_RATE;
use crate::error::GameError;

/// Logical drawing surface every layout coordinate is expressed in.
pub const LOGICAL_WIDTH: f64 = 400.0;
pub const LOGICAL_HEIGHT: f64 = 600.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Id of the canvas to draw on; created under `<body>` when missing.
    pub canvas_id: String,
    /// Canvas size in pixels. The logical 400x600 surface is scaled to fit.
    pub width: u32,
    pub height: u32,
    /// How fast the hands chase their targets (per second).
    pub convergence_rate: f64,
    /// Longest frame delta fed to the animation, in seconds (e.g. after a
    /// background tab resumes).
    pub max_frame_dt: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "clock-canvas".to_string(),
            width: LOGICAL_WIDTH as u32,
            height: LOGICAL_HEIGHT as u32,
            convergence_rate: DEFAULT_CONVERGENCE_RATE,
            max_frame_dt: 0.25,
        }
    }
}

impl GameConfig {
    pub fn validate(self) -> Result<Self, GameError> {
        if self.canvas_id.trim().is_empty() {
            return Err(GameError::InvalidConfig("canvas_id must not be empty".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfig("canvas size must be positive".into()));
        }
        if !(self.convergence_rate.is_finite() && self.convergence_rate > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "convergence_rate must be positive, got {}",
                self.convergence_rate
            )));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        Ok(self)
    }

    /// Scale from logical units to canvas pixels, per axis.
    pub fn scale(&self) -> (f64, f64) {
        (self.width as f64 / LOGICAL_WIDTH, self.height as f64 / LOGICAL_HEIGHT)
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.validate()
    }
}
