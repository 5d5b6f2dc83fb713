//! Per-frame simulation step
//!
//! `advance` is the whole engine surface: the frame loop feeds it elapsed
//! time and paddle intents, then reads entity positions back for drawing.
//! The integrator is variable-timestep, so callers own frame timing.

use super::ai::track_ball;
use super::collision::{deflect_off_paddle, paddle_hits_ball};
use super::state::{GamePhase, GameWorld, Intent, Side};
use crate::consts::*;

/// Input for a single frame
///
/// `restart` and `toggle_mode` are edge-triggered signals; the paddle
/// fields are level state resampled every frame. `left: None` means "no
/// explicit override": the engine derives the left intent from the tracker
/// in single-player mode and holds otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Option<Intent>,
    pub right: Intent,
    /// Start the first round, or restart after game over
    pub restart: bool,
    /// Flip two-player / single-player while playing
    pub toggle_mode: bool,
}

/// Advance the world by `dt` seconds.
///
/// `dt` must be finite and non-negative; anything else is a caller bug and
/// panics. Signals are processed in every phase, physics only while
/// Playing. `dt == 0.0` is a valid no-motion update that still evaluates
/// collisions and scoring at the current positions.
pub fn advance(world: &mut GameWorld, input: &TickInput, dt: f32) {
    assert!(
        dt.is_finite() && dt >= 0.0,
        "elapsed time must be finite and non-negative, got {dt}"
    );

    // Frame-to-frame timing is tracked in every phase
    world.elapsed += dt;

    if input.restart && matches!(world.phase, GamePhase::Start | GamePhase::GameOver) {
        world.reset_round();
    }
    if input.toggle_mode && world.phase == GamePhase::Playing {
        world.two_player = !world.two_player;
        log::info!(
            "mode toggled: {}",
            if world.two_player { "two-player" } else { "single-player" }
        );
    }

    // Entities are frozen outside Playing
    if world.phase != GamePhase::Playing {
        return;
    }

    let left_intent = match input.left {
        Some(intent) => intent,
        None if !world.two_player => {
            track_ball(world.left.pos.y, world.ball.pos.y, world.tuning.ai_deadzone)
        }
        None => Intent::Hold,
    };

    // Paddles: integrate, then hard clamp to the arena
    world.left.integrate(left_intent, world.tuning.paddle_speed, dt);
    world.right.integrate(input.right, world.tuning.paddle_speed, dt);
    world.left.clamp_to_arena();
    world.right.clamp_to_arena();

    // Ball
    world.ball.pos += world.ball.dir * world.tuning.ball_speed * dt;

    // Top/bottom walls: clamp and reflect the vertical component
    let half = world.ball.half();
    if world.ball.pos.y + half > ARENA_TOP {
        world.ball.pos.y = ARENA_TOP - half;
        world.ball.dir.y = -world.ball.dir.y;
    } else if world.ball.pos.y - half < ARENA_BOTTOM {
        world.ball.pos.y = ARENA_BOTTOM + half;
        world.ball.dir.y = -world.ball.dir.y;
    }

    // Paddles: left takes priority, though arena geometry keeps both from
    // ever being true at once
    if paddle_hits_ball(&world.left, &world.ball) {
        deflect_off_paddle(
            &mut world.ball,
            &world.left,
            Side::Left,
            world.tuning.bounce_steer,
        );
    } else if paddle_hits_ball(&world.right, &world.ball) {
        deflect_off_paddle(
            &mut world.ball,
            &world.right,
            Side::Right,
            world.tuning.bounce_steer,
        );
    }

    // Scoring: crossing a side boundary ends the round, positions freeze
    if world.ball.pos.x < ARENA_LEFT {
        end_round(world, Side::Right);
    } else if world.ball.pos.x > ARENA_RIGHT {
        end_round(world, Side::Left);
    }
}

fn end_round(world: &mut GameWorld, winner: Side) {
    world.winner = Some(winner);
    world.phase = GamePhase::GameOver;
    log::info!(
        "round {} over after {:.1}s: {} wins",
        world.rounds,
        world.elapsed,
        winner.label()
    );
}
