use crate::{Board, Paddle, Side};
use hecs::World;

/// A pointer-move event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    pub client_y: f32,  // Pointer Y relative to the viewport
    pub board_top: f32, // On-screen top edge of the board
}

impl PointerMove {
    pub fn new(client_y: f32, board_top: f32) -> Self {
        Self {
            client_y,
            board_top,
        }
    }

    /// Pointer Y in board coordinates
    pub fn board_y(&self) -> f32 {
        self.client_y - self.board_top
    }
}

/// Centre the left paddle on the pointer, clamped to the board.
/// The latest event overwrites any earlier one.
pub fn apply_pointer(world: &mut World, board: &Board, pointer: PointerMove) {
    let board_y = pointer.board_y();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Left {
            continue;
        }
        paddle.y = board_y - paddle.height / 2.0;
        paddle.clamp_to_board(board.height);
    }
}
