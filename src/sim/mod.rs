//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable timestep, but identical (dt, input) sequences replay identically
//! - Seeded RNG only (serve direction is the single random draw)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{aabb_overlap, paddle_hits_ball};
pub use state::{Ball, GamePhase, GameWorld, Intent, Paddle, Side, WorldSnapshot};
pub use tick::{TickInput, advance};
