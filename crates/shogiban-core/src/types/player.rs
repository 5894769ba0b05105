//! 手番（Player）

use serde::{Deserialize, Serialize};

/// 手番（先手/後手）
///
/// 先手は小文字の駒記号で表され、盤の下側（6-8段目）から 0 段目方向へ進む。
/// 後手は大文字の駒記号で表され、逆向きに進む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Sente = 0,
    Gote = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全ての手番（手番順）
    pub const ALL: [Player; 2] = [Player::Sente, Player::Gote];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Sente => Player::Gote,
            Player::Gote => Player::Sente,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 局面文字列での手番記号
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Player::Sente => 's',
            Player::Gote => 'g',
        }
    }

    /// 手番記号から変換
    #[inline]
    pub const fn from_code(c: char) -> Option<Player> {
        match c {
            's' => Some(Player::Sente),
            'g' => Some(Player::Gote),
            _ => None,
        }
    }

    /// 方向オフセットに掛ける符号（先手基準の表を後手用に反転する）
    #[inline]
    pub const fn orientation(self) -> i32 {
        match self {
            Player::Sente => 1,
            Player::Gote => -1,
        }
    }

    /// 成れる段かどうか（先手は 0-2 段、後手は 6-8 段）
    #[inline]
    pub const fn in_promotion_zone(self, row: i8) -> bool {
        match self {
            Player::Sente => row >= 0 && row <= 2,
            Player::Gote => row >= 6 && row <= 8,
        }
    }

    /// 1 ラウンドの最後に指す手番かどうか
    #[inline]
    pub const fn closes_round(self) -> bool {
        matches!(self, Player::Gote)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Player::Sente => "sente",
            Player::Gote => "gote",
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
