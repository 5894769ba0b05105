//! 局面（Position）
//!
//! - `pos`: 局面本体と盤面アクセス
//! - `notation`: 局面文字列の解析・出力、盤面文字列の展開・圧縮
//! - `apply`: 指し手・駒打ちによる局面遷移
//! - `json`: フロントエンド向けの JSON 表現

mod apply;
mod json;
mod notation;
mod pos;

pub use json::{BoardStateJson, CellJson, HandJson, HandsJson, PieceJson};
pub use notation::{condense_board, expand_board, PoolEncoding, START_POSITION};
pub use pos::Position;
