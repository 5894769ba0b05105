//! 移動方向（Direction）

use super::{Coordinate, Player};

/// 駒の移動方向（8 方向 + 桂馬の 2 方向）
///
/// 前後左右は指す側から見た向き。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    FrontLeft = 4,
    FrontRight = 5,
    BackLeft = 6,
    BackRight = 7,
    KnightLeft = 8,
    KnightRight = 9,
}

/// 先手から見た各方向のオフセット（展開済み盤面文字列の添字差分）
const SENTE_OFFSETS: [i32; Direction::NUM] = [-10, 10, -1, 1, -11, -9, 9, 11, -21, -19];

impl Direction {
    /// 方向の数
    pub const NUM: usize = 10;

    /// 全ての方向（インデックス順）
    pub const ALL: [Direction; 10] = [
        Direction::Front,
        Direction::Back,
        Direction::Left,
        Direction::Right,
        Direction::FrontLeft,
        Direction::FrontRight,
        Direction::BackLeft,
        Direction::BackRight,
        Direction::KnightLeft,
        Direction::KnightRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 指定手番から見た 1 歩分のオフセット
    #[inline]
    pub const fn offset(self, player: Player) -> i32 {
        SENTE_OFFSETS[self.index()] * player.orientation()
    }

    /// `from` から `steps` 歩進んだ座標（盤外になりうる）
    #[inline]
    pub const fn step(self, from: Coordinate, player: Player, steps: i32) -> Coordinate {
        Coordinate::from_fen_index(from.fen_index() + self.offset(player) * steps)
    }
}
