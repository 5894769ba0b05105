//! 基本型モジュール
//!
//! 盤面エンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Player
//!   ↓
//! Coordinate ← Direction
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move, Drop
//!   ↓
//! Hand
//! ```

mod coordinate;
mod direction;
mod hand;
mod moves;
mod piece;
mod piece_type;
mod player;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use hand::Hand;
pub use moves::{Drop, Move};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use player::Player;
