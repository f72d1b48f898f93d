use glam::Vec2;

use crate::board::Board;
use crate::components::{Color, Side};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board: Board,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub background_color: Color,
    pub paddle_color: Color,
    pub ball_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::new(Params::BOARD_WIDTH, Params::BOARD_HEIGHT),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            background_color: Params::BACKGROUND_COLOR,
            paddle_color: Params::PADDLE_COLOR,
            ball_color: Params::BALL_COLOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a board of the given size (e.g. the canvas dimensions)
    pub fn for_board(width: f32, height: f32) -> Self {
        Self {
            board: Board::new(width, height),
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.board.width - self.paddle_width,
        }
    }

    /// Y position (top edge) that centres a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.board.height / 2.0 - self.paddle_height / 2.0
    }

    pub fn board_center(&self) -> Vec2 {
        self.board.center()
    }

    /// Reject geometry the simulation cannot play on
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("board width", self.board.width),
            ("board height", self.board.height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("ball size", self.ball_size),
            ("ball speed", self.ball_speed),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }

        if self.paddle_height > self.board.height {
            return Err(format!(
                "paddle height {} exceeds board height {}",
                self.paddle_height, self.board.height
            ));
        }
        if self.ball_size > self.board.height {
            return Err(format!(
                "ball size {} exceeds board height {}",
                self.ball_size, self.board.height
            ));
        }
        if 2.0 * self.paddle_width + self.ball_size > self.board.width {
            return Err(format!(
                "board width {} leaves no room between the paddles",
                self.board.width
            ));
        }

        Ok(())
    }
}
