//! # shogiban-core
//!
//! 将棋盤 UI のための局面表現と合法手判定のコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Player, Coordinate, Direction, PieceType, Piece, Hand, Move, Drop）
//! - `position`: 局面表現、局面文字列の解析・出力、局面遷移
//! - `movegen`: 指し手・駒打ちの生成と検証
//! - `engine`: 設定に従って上記をまとめる窓口
//! - `config`: TOML 設定
//!
//! 王手・詰み・千日手などの終局判定は行わない。
//!
//! ```
//! use shogiban_core::{Coordinate, Position};
//!
//! let pos = Position::startpos();
//! let moves = pos.legal_moves_from(Coordinate::new(6, 0));
//! assert_eq!(moves.len(), 1);
//!
//! let next = pos.apply_move(&moves[0]);
//! assert_eq!(next.to_string(), "LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/p8/1pppppppp/1b5r1/lksgogskl g - - 0");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod position;
pub mod types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{PositionField, Result, ShogiError};
pub use movegen::{DropPolicy, MoveList};
pub use position::{Position, PoolEncoding, START_POSITION};
pub use types::{Coordinate, Direction, Drop, Hand, Move, Piece, PieceType, Player};
