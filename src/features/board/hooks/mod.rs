pub mod use_board;
pub mod use_drag;

pub use use_board::{use_board, BoardHook};
pub use use_drag::{use_drag, DragContext};
