//! Data-driven game feel parameters
//!
//! Defaults are the canonical constants; a frontend may load overrides from
//! JSON to retune the game without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Paddle vertical speed, world units per second
    pub paddle_speed: f32,
    /// Ball speed, world units per second
    pub ball_speed: f32,
    /// Vertical steer factor on paddle hits (0 = flat bounce)
    pub bounce_steer: f32,
    /// Tracker dead-zone in world units
    pub ai_deadzone: f32,
    /// Minimum |x| of the serve direction before normalization
    pub min_serve_dx: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            bounce_steer: BOUNCE_STEER,
            ai_deadzone: AI_DEADZONE,
            min_serve_dx: MIN_SERVE_DX,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
