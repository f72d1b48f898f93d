use crate::{find_ball, Board, Paddle, Params, Side};
use hecs::World;

/// Ease the right paddle toward the ball.
///
/// Each call closes `AI_TRACKING_GAIN` of the gap between the paddle and a
/// target that would centre it on the ball, then clamps to the board.
pub fn move_ai_paddle(world: &mut World, board: &Board) {
    let Some(ball) = find_ball(world) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let target = ball.pos.y - paddle.height / 2.0;
        paddle.y += (target - paddle.y) * Params::AI_TRACKING_GAIN;
        paddle.clamp_to_board(board.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, find_paddle, Config};
    use glam::Vec2;

    #[test]
    fn test_ai_moves_fraction_of_gap() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Right, 100.0);
        create_ball(&mut world, &config, Vec2::new(400.0, 400.0), Vec2::new(5.0, 5.0));

        move_ai_paddle(&mut world, &config.board);

        let paddle = find_paddle(&world, Side::Right).expect("right paddle exists");
        assert!((paddle.y - 120.8).abs() < 1e-4, "got {}", paddle.y);
    }

    #[test]
    fn test_ai_leaves_left_paddle_alone() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Left, 100.0);
        create_ball(&mut world, &config, Vec2::new(400.0, 400.0), Vec2::new(5.0, 5.0));

        move_ai_paddle(&mut world, &config.board);

        let paddle = find_paddle(&world, Side::Left).expect("left paddle exists");
        assert_eq!(paddle.y, 100.0);
    }

    #[test]
    fn test_ai_converges_and_stays_on_board() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Right, 200.0);
        // Ball hugging the bottom wall pulls the target past the board edge
        create_ball(&mut world, &config, Vec2::new(400.0, 479.0), Vec2::ZERO);

        for _ in 0..500 {
            move_ai_paddle(&mut world, &config.board);
            let paddle = find_paddle(&world, Side::Right).expect("right paddle exists");
            assert!(paddle.y >= 0.0);
            assert!(paddle.y <= config.board.height - paddle.height);
        }

        let paddle = find_paddle(&world, Side::Right).expect("right paddle exists");
        assert!((paddle.y - (config.board.height - paddle.height)).abs() < 1e-3);
    }

    #[test]
    fn test_ai_without_ball_is_noop() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Right, 42.0);

        move_ai_paddle(&mut world, &config.board);

        assert_eq!(find_paddle(&world, Side::Right).map(|p| p.y), Some(42.0));
    }
}
