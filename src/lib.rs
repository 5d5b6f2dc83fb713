//! Rally Pong - a classic two-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state, AI)
//! - `tuning`: Data-driven game feel parameters
//!
//! Windowing, input polling, and rendering are deliberately absent: the
//! frame loop is an external orchestrator that feeds `sim::advance` elapsed
//! time and paddle intents, then reads back a snapshot to draw.

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameWorld, Intent, Side, TickInput, WorldSnapshot, advance};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena bounds in world units (orthographic, origin at center)
    pub const ARENA_TOP: f32 = 3.75;
    pub const ARENA_BOTTOM: f32 = -3.75;
    pub const ARENA_LEFT: f32 = -5.0;
    pub const ARENA_RIGHT: f32 = 5.0;

    /// Paddle geometry - x positions are fixed per side
    pub const PADDLE_WIDTH: f32 = 0.2;
    pub const PADDLE_HEIGHT: f32 = 1.0;
    pub const LEFT_PADDLE_X: f32 = -4.5;
    pub const RIGHT_PADDLE_X: f32 = 4.5;

    /// Ball is a square, BALL_SIZE on a side
    pub const BALL_SIZE: f32 = 0.2;

    /// Movement speeds (world units per second)
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const BALL_SPEED: f32 = 3.0;

    /// Vertical steer applied on paddle hits, scaled by hit offset.
    /// A feel parameter, not a physical law.
    pub const BOUNCE_STEER: f32 = 0.75;

    /// AI tracker ignores ball offsets smaller than this
    pub const AI_DEADZONE: f32 = 0.1;

    /// Minimum |x| of the serve direction before normalization, so a fresh
    /// ball never starts out bouncing near-vertically between the walls
    pub const MIN_SERVE_DX: f32 = 0.5;
}
