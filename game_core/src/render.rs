//! Drawing through a minimal 2D canvas abstraction

use crate::{Ball, Color, Config, Paddle};
use hecs::World;

/// Fill primitives provided by the host surface
pub trait Canvas {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
}

/// Draw one frame: clear the board, then the paddles (left first), then the ball
pub fn draw(world: &World, config: &Config, canvas: &mut impl Canvas) {
    canvas.draw_rect(
        0.0,
        0.0,
        config.board.width,
        config.board.height,
        config.background_color,
    );

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);
    for paddle in paddles {
        canvas.draw_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color);
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        canvas.draw_circle(ball.pos.x, ball.pos.y, ball.radius(), ball.color);
    }
}

/// Canvas that records every primitive, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        center_x: f32,
        center_y: f32,
        radius: f32,
        color: Color,
    },
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center_x,
            center_y,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_draw_order_and_geometry() {
        let mut world = World::new();
        let config = Config::new();
        // Spawn right first; draw order must not depend on spawn order
        create_paddle(&mut world, &config, Side::Right, 50.0);
        create_paddle(&mut world, &config, Side::Left, 150.0);
        create_ball(&mut world, &config, Vec2::new(300.0, 200.0), Vec2::ZERO);

        let mut canvas = RecordingCanvas::new();
        draw(&world, &config, &mut canvas);

        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 800.0,
                    h: 480.0,
                    color: config.background_color,
                },
                DrawCommand::Rect {
                    x: 0.0,
                    y: 150.0,
                    w: 12.0,
                    h: 80.0,
                    color: config.paddle_color,
                },
                DrawCommand::Rect {
                    x: 788.0,
                    y: 50.0,
                    w: 12.0,
                    h: 80.0,
                    color: config.paddle_color,
                },
                DrawCommand::Circle {
                    center_x: 300.0,
                    center_y: 200.0,
                    radius: 7.0,
                    color: config.ball_color,
                },
            ]
        );
    }
}
