//! 指し手生成・検証
//!
//! 王手や打ち歩詰めは判定しない。駒の動き・手番・駒の有無だけを見る。

mod drops;
mod generator;

pub use drops::DropPolicy;
pub use generator::MoveList;
