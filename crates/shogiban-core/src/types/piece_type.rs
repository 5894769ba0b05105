//! 駒種（PieceType）

use super::Direction;

/// 駒種（先後の区別なし）
///
/// 判別値は駒記号表 `"orbgsklpdhznct"` の位置に一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceType {
    // 生駒
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
    // 成駒
    Dragon = 8, // 成飛
    Horse = 9,  // 成角
    ProSilver = 10,
    ProKnight = 11,
    ProLance = 12,
    ProPawn = 13,
}

/// 駒記号（先手＝小文字）
const CODES: [u8; PieceType::NUM] = *b"orbgsklpdhznct";

/// 表示用の漢字（玉は手番で変わるので別扱い）
const GLYPHS: [char; PieceType::NUM] = [
    '王', '飛', '角', '金', '銀', '桂', '香', '歩', '龍', '馬', '全', '圭', '杏', 'と',
];

/// 方向ごとの最大歩数（0 = 動けない、8 = 走り駒）
const MOVEMENT_PATTERNS: [[u8; Direction::NUM]; PieceType::NUM] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 0], // 玉
    [8, 8, 8, 8, 0, 0, 0, 0, 0, 0], // 飛
    [0, 0, 0, 0, 8, 8, 8, 8, 0, 0], // 角
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0], // 金
    [1, 0, 0, 0, 1, 1, 1, 1, 0, 0], // 銀
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1], // 桂
    [8, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 香
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 歩
    [8, 8, 8, 8, 1, 1, 1, 1, 0, 0], // 龍
    [1, 1, 1, 1, 8, 8, 8, 8, 0, 0], // 馬
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0], // 成銀
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0], // 成桂
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0], // 成香
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0], // と
];

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 14;

    /// 走り駒の歩数上限（盤の端から端まで届く）
    pub const SLIDE: u8 = 8;

    /// 全ての駒種（判別値順）
    pub const ALL: [PieceType; 14] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
        PieceType::Dragon,
        PieceType::Horse,
        PieceType::ProSilver,
        PieceType::ProKnight,
        PieceType::ProLance,
        PieceType::ProPawn,
    ];

    /// 成れるかどうか
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    /// 成り駒を返す（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<PieceType> {
        match self {
            PieceType::Rook => Some(PieceType::Dragon),
            PieceType::Bishop => Some(PieceType::Horse),
            PieceType::Silver => Some(PieceType::ProSilver),
            PieceType::Knight => Some(PieceType::ProKnight),
            PieceType::Lance => Some(PieceType::ProLance),
            PieceType::Pawn => Some(PieceType::ProPawn),
            _ => None,
        }
    }

    /// 元の駒を返す（成駒でなければNone）
    #[inline]
    pub const fn demote(self) -> Option<PieceType> {
        match self {
            PieceType::Dragon => Some(PieceType::Rook),
            PieceType::Horse => Some(PieceType::Bishop),
            PieceType::ProSilver => Some(PieceType::Silver),
            PieceType::ProKnight => Some(PieceType::Knight),
            PieceType::ProLance => Some(PieceType::Lance),
            PieceType::ProPawn => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// 生駒を返す（既に生駒の場合はそのまま）
    #[inline]
    pub const fn unpromote(self) -> PieceType {
        match self.demote() {
            Some(pt) => pt,
            None => self,
        }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self as u8 >= PieceType::Dragon as u8
    }

    /// 移動パターン（方向ごとの最大歩数）
    #[inline]
    pub const fn movement_pattern(self) -> [u8; Direction::NUM] {
        MOVEMENT_PATTERNS[self.index()]
    }

    /// 駒記号（小文字）
    #[inline]
    pub const fn code(self) -> char {
        CODES[self.index()] as char
    }

    /// 駒記号から変換（大文字・小文字を区別しない）
    pub fn from_code(c: char) -> Option<PieceType> {
        let lower = c.to_ascii_lowercase();
        PieceType::ALL.into_iter().find(|pt| pt.code() == lower)
    }

    /// 表示用の漢字。玉は手番で「王」「玉」を使い分けるので [`super::Piece::glyph`] を使う
    #[inline]
    pub const fn glyph(self) -> char {
        GLYPHS[self.index()]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceType> {
        if (n as usize) < PieceType::NUM {
            Some(PieceType::ALL[n as usize])
        } else {
            None
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
