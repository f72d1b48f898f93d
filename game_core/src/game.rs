//! Single-player game session: mouse-driven left paddle, AI right paddle

use glam::Vec2;
use hecs::World;

use crate::render::{self, Canvas};
use crate::systems::{apply_pointer, PointerMove};
use crate::{
    create_ball, create_paddle, find_ball, find_paddle, step, Ball, Config, Events, GameRng,
    Paddle, RandomSource, Score, Side,
};

/// Owns every entity and resource of a running game.
///
/// The frame loop and the pointer callback both go through this type, so each
/// field has exactly one writer at a time.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    rng: Box<dyn RandomSource>,
    ticks: u64,
}

impl Game {
    /// Spawn both paddles centred vertically and serve the ball from the centre
    pub fn new(config: Config, rng: impl RandomSource + 'static) -> Self {
        let mut world = World::new();
        let mut rng: Box<dyn RandomSource> = Box::new(rng);

        let paddle_y = config.paddle_start_y();
        create_paddle(&mut world, &config, Side::Left, paddle_y);
        create_paddle(&mut world, &config, Side::Right, paddle_y);

        let center = config.board_center();
        let mut ball = Ball::new(
            center,
            Vec2::ZERO,
            config.ball_size,
            config.ball_speed,
            config.ball_color,
        );
        ball.reset(center, &mut *rng);
        create_ball(&mut world, &config, ball.pos, ball.vel);

        log::info!(
            "new game on {}x{} board, serving {:?}",
            config.board.width,
            config.board.height,
            ball.vel
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            ticks: 0,
        }
    }

    /// Seeded game, for reproducible runs
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Advance the world by one tick
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut *self.rng,
        );
        self.ticks += 1;
    }

    /// Pointer-move handler for the left paddle
    pub fn pointer_moved(&mut self, pointer: PointerMove) {
        apply_pointer(&mut self.world, &self.config.board, pointer);
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        render::draw(&self.world, &self.config, canvas);
    }

    pub fn ball(&self) -> Option<Ball> {
        find_ball(&self.world)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        find_paddle(&self.world, side)
    }

    /// Overwrite the ball's position and velocity
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle to `y`, clamped to the board
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let board_height = self.config.board.height;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
                paddle.clamp_to_board(board_height);
            }
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
