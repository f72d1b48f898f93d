use crate::{Ball, Board, Events, RandomSource, Score, Side};
use hecs::World;

/// Check if ball left the board (scoring) and serve it again from the centre
pub fn check_scoring(
    world: &mut World,
    board: &Board,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.left() < 0.0 {
            Side::Right
        } else if ball.right() > board.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }

        ball.reset(board.center(), rng);
        log::debug!(
            "{:?} scored ({}-{}), serving {:?}",
            scorer,
            score.left,
            score.right,
            ball.vel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, find_ball, Config, GameRng, ScriptedRandom};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(6.0, 240.0), Vec2::new(-5.0, 0.0));
        let mut rng = GameRng::new(12345);

        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        let x = config.board.width - 6.0;
        create_ball(&mut world, &config, Vec2::new(x, 240.0), Vec2::new(5.0, 0.0));
        let mut rng = GameRng::new(12345);

        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(-3.0, 10.0), Vec2::new(-5.0, -5.0));
        let mut rng = ScriptedRandom::new(&[true, false]);

        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut rng);

        let ball = find_ball(&world).expect("ball exists");
        assert_eq!(ball.pos, config.board_center(), "Ball should reset to centre");
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(ball.size, config.ball_size);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        // Left edge exactly on the board edge is still in play
        create_ball(&mut world, &config, Vec2::new(7.0, 240.0), Vec2::new(-5.0, 4.0));

        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut GameRng::default());

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
        let ball = find_ball(&world).expect("ball exists");
        assert_eq!(ball.pos, Vec2::new(7.0, 240.0));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        let mut rng = GameRng::default();
        let entity = create_ball(&mut world, &config, Vec2::new(900.0, 240.0), Vec2::new(5.0, 0.0));

        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut rng);
        events.clear();

        world
            .get::<&mut Ball>(entity)
            .expect("ball exists")
            .pos = Vec2::new(900.0, 240.0);
        check_scoring(&mut world, &config.board, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
