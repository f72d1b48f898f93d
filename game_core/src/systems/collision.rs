use crate::{Ball, Board, Events, Paddle, Side};
use hecs::World;

/// True iff the ball's bounding square penetrates the paddle rectangle.
/// Touching edges do not count.
pub fn collision(paddle: &Paddle, ball: &Ball) -> bool {
    paddle.bounds().overlaps(&ball.bounds())
}

/// Reflect the ball off the top and bottom walls.
///
/// Only the vertical velocity flips; the ball may sit past the wall for up to
/// one tick of travel.
pub fn check_wall_bounce(world: &mut World, board: &Board, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() < 0.0 || ball.bottom() > board.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off the paddles, left first then right.
///
/// A hit places the ball flush against the paddle face, reverses the horizontal
/// velocity and replaces the vertical velocity with `speed * collide_point`.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !collision(paddle, ball) {
                continue;
            }

            ball.pos.x = match paddle.side {
                Side::Left => paddle.x + paddle.width + ball.radius(),
                Side::Right => paddle.x - ball.radius(),
            };
            ball.vel.x = -ball.vel.x;
            ball.vel.y = ball.speed * paddle.collide_point(ball.pos.y);

            events.ball_hit_paddle = true;
            log::trace!(
                "ball hit {:?} paddle at y={:.1}, new velocity {:?}",
                paddle.side,
                ball.pos.y,
                ball.vel
            );
        }
    }
}
