//! 手駒（Hand）

use super::PieceType;

/// 手駒（駒種ごとの枚数）
///
/// 持ち駒になれるのは生駒 7 種のみ。玉と成駒は常に 0 枚として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand([u8; Hand::NUM]);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand([0; Hand::NUM]);

    /// 手駒になる駒種の数
    pub const NUM: usize = 7;

    /// 手駒になる駒種一覧（局面文字列への出力順）
    pub const PIECES: [PieceType; Hand::NUM] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// 駒種ごとの駒の総数（局面文字列で持てる上限）
    ///
    /// 盤上の駒は 40 枚なので、この上限から取っても `u8` を超えない。
    pub const fn max_count(pt: PieceType) -> u32 {
        match pt {
            PieceType::Rook | PieceType::Bishop => 2,
            PieceType::Silver | PieceType::Gold | PieceType::Knight | PieceType::Lance => 4,
            PieceType::Pawn => 18,
            _ => 0,
        }
    }

    /// 持ち駒になれる駒種かどうか
    #[inline]
    pub const fn can_hold(pt: PieceType) -> bool {
        Self::slot(pt).is_some()
    }

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(self, pt: PieceType) -> u32 {
        match Self::slot(pt) {
            Some(i) => self.0[i] as u32,
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加（持ち駒になれない駒種は無視する）
    #[inline]
    pub const fn add(self, pt: PieceType) -> Hand {
        let mut counts = self.0;
        if let Some(i) = Self::slot(pt) {
            counts[i] = counts[i].saturating_add(1);
        }
        Hand(counts)
    }

    /// 1枚減らす
    #[inline]
    pub const fn sub(self, pt: PieceType) -> Hand {
        debug_assert!(self.has(pt));
        let mut counts = self.0;
        if let Some(i) = Self::slot(pt) {
            counts[i] = counts[i].saturating_sub(1);
        }
        Hand(counts)
    }

    /// 指定枚数をセット
    #[inline]
    pub const fn set(self, pt: PieceType, count: u8) -> Hand {
        let mut counts = self.0;
        if let Some(i) = Self::slot(pt) {
            counts[i] = count;
        }
        Hand(counts)
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        let mut i = 0;
        while i < Self::NUM {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// 1枚以上ある駒種と枚数を出力順に返す
    pub fn iter(self) -> impl Iterator<Item = (PieceType, u32)> {
        Self::PIECES
            .into_iter()
            .map(move |pt| (pt, self.count(pt)))
            .filter(|&(_, n)| n > 0)
    }

    const fn slot(pt: PieceType) -> Option<usize> {
        match pt {
            PieceType::Rook => Some(0),
            PieceType::Bishop => Some(1),
            PieceType::Silver => Some(2),
            PieceType::Gold => Some(3),
            PieceType::Knight => Some(4),
            PieceType::Lance => Some(5),
            PieceType::Pawn => Some(6),
            _ => None, // King, 成駒は手駒にならない
        }
    }
}
