//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and the front end can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, has_line, winning_line};
