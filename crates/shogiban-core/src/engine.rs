//! 設定付きの窓口
//!
//! 表示層は `Engine` を 1 つ持ち、局面文字列の読み書きと
//! 指し手・駒打ちの検証・適用をここ経由で行う。

use crate::config::EngineConfig;
use crate::error::Result;
use crate::movegen::MoveList;
use crate::position::Position;
use crate::types::{Coordinate, Drop, Move};

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 局面文字列を設定の持ち駒表記で解析する
    pub fn parse(&self, text: &str) -> Result<Position> {
        Position::parse_with(text, self.config.pool_encoding)
    }

    /// 局面文字列を設定の持ち駒表記で出力する
    pub fn format(&self, pos: &Position) -> String {
        pos.format_with(self.config.pool_encoding)
    }

    pub fn legal_moves_from(&self, pos: &Position, src: Coordinate) -> MoveList {
        pos.legal_moves_from(src)
    }

    pub fn legal_drops(&self, pos: &Position) -> Vec<Drop> {
        pos.legal_drops_for(pos.side_to_move())
            .into_iter()
            .filter(|d| pos.validate_drop_with(d, self.config.drop_policy))
            .collect()
    }

    pub fn validate(&self, pos: &Position, mv: &Move) -> bool {
        pos.validate(mv)
    }

    pub fn validate_drop(&self, pos: &Position, drop: &Drop) -> bool {
        pos.validate_drop_with(drop, self.config.drop_policy)
    }

    /// 検証して指し手を適用する
    pub fn play_move(&self, pos: &Position, mv: &Move) -> Result<Position> {
        pos.try_apply_move(mv)
    }

    /// 検証して駒打ちを適用する
    pub fn play_drop(&self, pos: &Position, drop: &Drop) -> Result<Position> {
        pos.try_apply_drop(drop, self.config.drop_policy)
    }
}
