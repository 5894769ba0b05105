//! 升目の座標（Coordinate）

/// 升目の座標（行・列とも 0-8）
///
/// 展開済み盤面文字列の添字とは `index = 10 * row + col` で相互変換する。
/// 1 行あたり 10 文字（9 マス + 区切り `/`）なので、方向オフセットで
/// 盤外にはみ出した座標は次の行に回り込まず区切り列に落ちる。
///
/// 演算の途中で盤外の値を持つことは許容する。判定は [`Coordinate::is_on_board`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: i8,
    col: i8,
}

impl Coordinate {
    /// 盤の一辺
    pub const SIZE: i8 = 9;

    /// 升目の数
    pub const NUM: usize = 81;

    /// 展開済み盤面文字列の 1 行分の幅（区切り列を含む）
    pub const STRIDE: i32 = 10;

    /// 展開済み盤面文字列の長さ（9 行 × 10 - 末尾の区切り）
    pub const EXPANDED_LEN: i32 = Self::STRIDE * Self::SIZE as i32 - 1;

    #[inline]
    pub const fn new(row: i8, col: i8) -> Coordinate {
        Coordinate { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// 盤内かどうか
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < Self::SIZE && self.col >= 0 && self.col < Self::SIZE
    }

    /// 展開済み盤面文字列での添字
    #[inline]
    pub const fn fen_index(self) -> i32 {
        Self::STRIDE * self.row as i32 + self.col as i32
    }

    /// 展開済み盤面文字列の添字から生成
    ///
    /// 負の添字でも行・列の組が一意に決まるよう floor 除算を使う。
    #[inline]
    pub const fn from_fen_index(idx: i32) -> Coordinate {
        Coordinate {
            row: idx.div_euclid(Self::STRIDE) as i8,
            col: idx.rem_euclid(Self::STRIDE) as i8,
        }
    }

    /// 盤面配列（行優先、81 要素）での添字。盤外なら None
    #[inline]
    pub const fn square_index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * Self::SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    /// 盤面配列の添字から生成（範囲チェックあり）
    #[inline]
    pub const fn from_square_index(n: usize) -> Option<Coordinate> {
        if n < Self::NUM {
            Some(Coordinate::new((n / 9) as i8, (n % 9) as i8))
        } else {
            None
        }
    }

    /// 全ての升を行優先で返すイテレータ
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::NUM).filter_map(Coordinate::from_square_index)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
