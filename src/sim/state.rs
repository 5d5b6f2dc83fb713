//! Game state and core simulation types
//!
//! The whole world lives in one owned aggregate so the engine has no
//! module-level singletons; the frame loop passes it into `advance`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Which player a paddle (or a win) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Display label for the state overlay ("Player 1 Wins" etc.)
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first restart signal
    Start,
    /// Active gameplay
    Playing,
    /// Round ended, winner set, world frozen until restart
    GameOver,
}

/// A caller-supplied vertical movement request for one paddle.
///
/// Intents are direction only; speed comes from tuning. How an intent was
/// derived (key state, AI tracker) is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    Up,
    #[default]
    Hold,
    Down,
}

impl Intent {
    /// Signed scale applied to paddle speed: +1 up, -1 down, 0 hold
    #[inline]
    pub fn as_f32(&self) -> f32 {
        match self {
            Intent::Up => 1.0,
            Intent::Hold => 0.0,
            Intent::Down => -1.0,
        }
    }
}

/// A paddle entity. `pos.x` is fixed per side; only `pos.y` moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            pos: Vec2::new(x, 0.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// Move vertically by intent * speed * dt
    pub fn integrate(&mut self, intent: Intent, speed: f32, dt: f32) {
        self.pos.y += intent.as_f32() * speed * dt;
    }

    /// Hard clamp so the paddle's vertical extent stays inside the arena
    pub fn clamp_to_arena(&mut self) {
        let half = self.size.y / 2.0;
        if self.pos.y + half > ARENA_TOP {
            self.pos.y = ARENA_TOP - half;
        } else if self.pos.y - half < ARENA_BOTTOM {
            self.pos.y = ARENA_BOTTOM + half;
        }
    }
}

/// The ball entity. `dir` is a unit vector; speed is scalar and lives in
/// tuning so direction stays normalized across bounces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }

    #[inline]
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the world for renderers and overlays
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldSnapshot {
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
    pub phase: GamePhase,
    pub winner: Option<Side>,
}

/// Complete game world (entities, phase, mode, timing, RNG)
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Seed for reproducibility; the serve direction is the only random draw
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Two human players, or AI on the left paddle when false
    pub two_player: bool,
    pub winner: Option<Side>,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Wall-clock seconds fed in so far, accumulated in every phase
    pub elapsed: f32,
    /// Rounds started since creation
    pub rounds: u32,
    pub tuning: Tuning,
}

impl GameWorld {
    /// Create a world in the Start phase with canonical geometry
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            two_player: true,
            winner: None,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::new(),
            elapsed: 0.0,
            rounds: 0,
            tuning,
        }
    }

    /// Start a fresh round: canonical positions, cleared winner, a new
    /// random serve direction, and the Playing phase.
    pub fn reset_round(&mut self) {
        self.left = Paddle::new(Side::Left);
        self.right = Paddle::new(Side::Right);
        self.ball = Ball::new();
        self.ball.dir = self.serve_direction();
        self.winner = None;
        self.phase = GamePhase::Playing;
        self.rounds += 1;
        log::info!("round {} serving, direction {}", self.rounds, self.ball.dir);
    }

    /// Uniform random angle, with the horizontal component forced to a
    /// minimum magnitude so the serve always heads toward a paddle.
    fn serve_direction(&mut self) -> Vec2 {
        let degrees = self.rng.random_range(0..360u32);
        let angle = (degrees as f32).to_radians();
        let mut dir = Vec2::new(angle.cos(), angle.sin());
        if dir.x.abs() < self.tuning.min_serve_dx {
            dir.x = if dir.x > 0.0 {
                self.tuning.min_serve_dx
            } else {
                -self.tuning.min_serve_dx
            };
        }
        dir.normalize()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            left_paddle: self.left.pos,
            right_paddle: self.right.pos,
            ball: self.ball.pos,
            phase: self.phase,
            winner: self.winner,
        }
    }
}
