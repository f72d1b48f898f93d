pub mod board;
pub mod components;
pub mod config;
pub mod driver;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use params::*;
pub use render::{Canvas, DrawCommand, RecordingCanvas};
pub use resources::*;
pub use systems::PointerMove;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed tick.
///
/// The order is significant: a ball can bounce off a wall and a paddle in the
/// same tick, and both adjustments apply.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Top/bottom walls
    check_wall_bounce(world, &config.board, events);

    // 3-4. Left then right paddle
    check_paddle_collisions(world, events);

    // 5. Check scoring (ball exited the board)
    check_scoring(world, &config.board, score, events, rng);

    // 6. AI paddle follows the ball
    move_ai_paddle(world, &config.board);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let mut paddle = Paddle::new(
        side,
        config.paddle_x(side),
        y,
        config.paddle_width,
        config.paddle_height,
        config.paddle_color,
    );
    paddle.clamp_to_board(config.board.height);
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        vel,
        config.ball_size,
        config.ball_speed,
        config.ball_color,
    ),))
}

/// Copy of the ball, if one exists
pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Copy of the paddle guarding `side`
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .find(|paddle| paddle.side == side)
}
