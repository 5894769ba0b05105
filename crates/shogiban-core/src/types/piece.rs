//! 駒（Piece）
//!
//! 駒種と持ち主の組。移動パターンと表示文字は駒種・持ち主から導出し、
//! 個別には保持しない。局面文字列では先手を小文字、後手を大文字で表す。

use super::{Direction, PieceType, Player};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    owner: Player,
}

impl Piece {
    /// PlayerとPieceTypeから生成
    #[inline]
    pub const fn new(owner: Player, piece_type: PieceType) -> Piece {
        Piece { piece_type, owner }
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// 持ち主を取得
    #[inline]
    pub const fn owner(self) -> Player {
        self.owner
    }

    /// 成り駒を返す
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        match self.piece_type.promote() {
            Some(pt) => Some(Piece::new(self.owner, pt)),
            None => None,
        }
    }

    /// 元の駒を返す
    #[inline]
    pub const fn demote(self) -> Option<Piece> {
        match self.piece_type.demote() {
            Some(pt) => Some(Piece::new(self.owner, pt)),
            None => None,
        }
    }

    #[inline]
    pub const fn is_promotable(self) -> bool {
        self.piece_type.can_promote()
    }

    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.piece_type.is_promoted()
    }

    #[inline]
    pub const fn movement_pattern(self) -> [u8; Direction::NUM] {
        self.piece_type.movement_pattern()
    }

    /// 表示用の漢字（先手の玉は「王」、後手の玉は「玉」）
    #[inline]
    pub const fn glyph(self) -> char {
        match (self.piece_type, self.owner) {
            (PieceType::King, Player::Gote) => '玉',
            (pt, _) => pt.glyph(),
        }
    }

    /// 局面文字列での駒記号
    #[inline]
    pub const fn code(self) -> char {
        let c = self.piece_type.code();
        match self.owner {
            Player::Sente => c,
            Player::Gote => c.to_ascii_uppercase(),
        }
    }

    /// 駒記号から変換（小文字 = 先手、大文字 = 後手）
    pub fn from_code(c: char) -> Option<Piece> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let owner = if c.is_ascii_lowercase() { Player::Sente } else { Player::Gote };
        PieceType::from_code(c).map(|pt| Piece::new(owner, pt))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
