//! The computer opponent
//!
//! A stateless tracker: follow the ball's y with a small dead-zone so the
//! paddle doesn't jitter when already lined up. No prediction, no reaction
//! delay, no error - a perfectly reactive opponent by construction.

use super::state::Intent;

/// Vertical intent for a paddle at `paddle_y` chasing a ball at `ball_y`
pub fn track_ball(paddle_y: f32, ball_y: f32, deadzone: f32) -> Intent {
    if ball_y > paddle_y + deadzone {
        Intent::Up
    } else if ball_y < paddle_y - deadzone {
        Intent::Down
    } else {
        Intent::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_follows_ball() {
        assert_eq!(track_ball(0.0, 0.5, 0.1), Intent::Up);
        assert_eq!(track_ball(0.0, -0.5, 0.1), Intent::Down);
    }

    #[test]
    fn test_tracker_holds_inside_deadzone() {
        assert_eq!(track_ball(0.0, 0.0, 0.1), Intent::Hold);
        assert_eq!(track_ball(0.0, 0.09, 0.1), Intent::Hold);
        assert_eq!(track_ball(0.0, -0.09, 0.1), Intent::Hold);
        // Exactly on the dead-zone edge is still a hold
        assert_eq!(track_ball(0.0, 0.1, 0.1), Intent::Hold);
    }
}
