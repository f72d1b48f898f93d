use crate::components::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (pixels, origin top-left)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    // Ball
    pub const BALL_SIZE: f32 = 14.0; // diameter
    pub const BALL_SPEED: f32 = 5.0; // pixels per tick on each axis at serve

    // AI
    pub const AI_TRACKING_GAIN: f32 = 0.08; // fraction of the gap closed per tick

    // Colors
    pub const BACKGROUND_COLOR: Color = Color::rgb(0x11, 0x11, 0x11);
    pub const PADDLE_COLOR: Color = Color::WHITE;
    pub const BALL_COLOR: Color = Color::WHITE;
}
