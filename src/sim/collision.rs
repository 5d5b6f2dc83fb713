//! Axis-aligned collision tests and the paddle bounce response
//!
//! Everything here is center + size AABB math. There is no rotation and no
//! continuous collision: tunneling is mitigated by repositioning the ball
//! after a hit is detected, which is fine at this speed and timestep range
//! but would not survive very large deltas.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};

/// Standard AABB overlap: per-axis center distance strictly less than the
/// sum of half-extents on that axis.
#[inline]
pub fn aabb_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    let d = (center_a - center_b).abs();
    d.x < (size_a.x + size_b.x) / 2.0 && d.y < (size_a.y + size_b.y) / 2.0
}

/// Paddle vs. ball test (the ball is a square)
#[inline]
pub fn paddle_hits_ball(paddle: &Paddle, ball: &Ball) -> bool {
    aabb_overlap(paddle.pos, paddle.size, ball.pos, Vec2::splat(ball.size))
}

/// Resolve a paddle hit in place.
///
/// The ball is pushed just outside the paddle's near edge (prevents
/// sticking), the horizontal direction is forced away from the paddle, and
/// the vertical component is steered by where on the paddle the ball
/// struck, then the direction is renormalized to unit length.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, steer: f32) {
    let gap = (paddle.size.x + ball.size) / 2.0;
    match side {
        Side::Left => {
            ball.pos.x = paddle.pos.x + gap;
            ball.dir.x = ball.dir.x.abs();
        }
        Side::Right => {
            ball.pos.x = paddle.pos.x - gap;
            ball.dir.x = -ball.dir.x.abs();
        }
    }

    // -1 at the paddle's top edge, +1 at the bottom; geometry keeps it in
    // range because the AABB test already passed
    let relative_intersect = (paddle.pos.y - ball.pos.y) / (paddle.size.y / 2.0);
    ball.dir.y = -relative_intersect * steer;
    ball.dir = ball.dir.normalize();
}
