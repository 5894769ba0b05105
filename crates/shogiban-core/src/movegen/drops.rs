//! 駒打ちの生成・検証
//!
//! 二歩・打ち歩詰め・行き所のない駒の制限は扱わない。

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Coordinate, Drop, Hand, Piece, Player};

/// 駒打ちの検証規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPolicy {
    /// 手番と持ち駒の枚数だけを見る。打つ先の空きは呼び出し側の責任
    #[default]
    Minimal,
    /// 加えて、打つ先が盤内の空きマスであることを要求する
    RequireVacant,
}

impl Position {
    /// `player` が打てる手を列挙する
    ///
    /// 手番でなければ空。持ち駒の出力順 × 空きマス（行優先）の順に並ぶ。
    pub fn legal_drops_for(&self, player: Player) -> Vec<Drop> {
        if player != self.side_to_move() {
            return Vec::new();
        }

        let vacant: Vec<Coordinate> = Coordinate::all().filter(|&c| self.is_vacant(c)).collect();
        self.hand(player)
            .iter()
            .flat_map(|(pt, _)| {
                let piece = Piece::new(player, pt);
                vacant.iter().map(move |&trg| Drop::new(piece, trg))
            })
            .collect()
    }

    /// 駒打ちが打てるかどうか（[`DropPolicy::Minimal`]）
    pub fn validate_drop(&self, drop: &Drop) -> bool {
        self.validate_drop_with(drop, DropPolicy::Minimal)
    }

    /// 駒打ちが打てるかどうか
    pub fn validate_drop_with(&self, drop: &Drop, policy: DropPolicy) -> bool {
        let player = drop.player();
        if player != self.side_to_move() {
            return false;
        }
        let pt = drop.piece.piece_type();
        if !Hand::can_hold(pt) || !self.hand(player).has(pt) {
            return false;
        }
        match policy {
            DropPolicy::Minimal => true,
            DropPolicy::RequireVacant => self.is_vacant(drop.trg),
        }
    }
}
