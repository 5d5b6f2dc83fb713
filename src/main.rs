//! Rally Pong headless demo
//!
//! Runs the simulation with the tracker driving both paddles at a fixed
//! cadence and logs the outcome. Timing, intent collection, and output all
//! live out here; the engine only ever sees `advance` calls.

use rally_pong::consts::AI_DEADZONE;
use rally_pong::sim::{GamePhase, GameWorld, TickInput, advance, track_ball};

/// Demo cadence (the engine itself accepts any non-negative dt)
const DT: f32 = 1.0 / 120.0;

/// Two perfect trackers can rally forever; stop the demo eventually
const MAX_DEMO_SECONDS: f32 = 120.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("rally-pong demo, seed {seed}");
    let mut world = GameWorld::new(seed);

    // Kick off the round, then switch the left paddle to the built-in AI
    advance(&mut world, &TickInput { restart: true, ..Default::default() }, 0.0);
    advance(&mut world, &TickInput { toggle_mode: true, ..Default::default() }, 0.0);

    while world.phase == GamePhase::Playing && world.elapsed < MAX_DEMO_SECONDS {
        let input = TickInput {
            // None lets the engine derive the left intent from its tracker
            left: None,
            right: track_ball(world.right.pos.y, world.ball.pos.y, AI_DEADZONE),
            ..Default::default()
        };
        advance(&mut world, &input, DT);
    }

    let snapshot = world.snapshot();
    match snapshot.winner {
        Some(side) => log::info!("{} wins after {:.1}s", side.label(), world.elapsed),
        None => log::info!(
            "rally still going after {:.0}s, calling it a draw",
            world.elapsed
        ),
    }
}
