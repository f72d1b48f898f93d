use glam::Vec2;

use crate::board::Aabb;
use crate::resources::RandomSource;

/// Which edge of the board a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#11ff00`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Paddle component - a vertical bar pinned to one side of the board
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed for the paddle's lifetime
    pub y: f32, // Top edge, clamped to the board
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }

    /// Keep the paddle inside `[0, board_height - height]`.
    /// The upper bound wins when the board is shorter than the paddle.
    pub fn clamp_to_board(&mut self, board_height: f32) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + self.height > board_height {
            self.y = board_height - self.height;
        }
    }

    /// Normalized hit offset: 0 at the paddle centre, +-1 at its ends
    pub fn collide_point(&self, ball_y: f32) -> f32 {
        (ball_y - self.center_y()) / (self.height / 2.0)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Pixels per tick
    pub size: f32, // Diameter
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, speed: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            size,
            speed,
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius()
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius()
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius()
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    /// Serve from `center` in one of the four diagonal directions
    pub fn reset(&mut self, center: Vec2, rng: &mut dyn RandomSource) {
        self.pos = center;

        let vx = if rng.coin_flip() { self.speed } else { -self.speed };
        let vy = if rng.coin_flip() { self.speed } else { -self.speed };
        self.vel = Vec2::new(vx, vy);
    }
}
