//! 指し手（Move）と駒打ち（Drop）
//!
//! どちらも一時的な要求値で、盤面データは持たない。

use super::{Coordinate, Piece, Player};

/// 盤上の駒を動かす指し手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub src: Coordinate,
    pub trg: Coordinate,
}

impl Move {
    #[inline]
    pub const fn new(player: Player, src: Coordinate, trg: Coordinate) -> Move {
        Move { player, src, trg }
    }

    /// 移動先が指し手側の敵陣（奥 3 段）にあるか
    #[inline]
    pub const fn is_promotable(self) -> bool {
        self.player.in_promotion_zone(self.trg.row())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.player.code(), self.src, self.trg)
    }
}

/// 持ち駒を盤上に打つ手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Drop {
    pub piece: Piece,
    pub trg: Coordinate,
}

impl Drop {
    #[inline]
    pub const fn new(piece: Piece, trg: Coordinate) -> Drop {
        Drop { piece, trg }
    }

    /// 打つ側の手番
    #[inline]
    pub const fn player(self) -> Player {
        self.piece.owner()
    }
}

impl std::fmt::Display for Drop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.piece.code(), self.trg)
    }
}
