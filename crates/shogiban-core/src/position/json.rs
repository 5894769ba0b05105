//! フロントエンド向けの局面の JSON 表現

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, Hand, Piece, PieceType, Player};

use super::pos::Position;

/// フロントエンド側で扱う駒のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "sente" | "gote"
    pub owner: Player,
    /// 局面文字列での駒記号（"o", "R" など）
    pub code: char,
    /// 表示用の漢字
    pub glyph: char,
    /// 成駒かどうか
    pub promoted: bool,
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    pub row: i8,
    pub col: i8,
    /// 駒（存在しない場合はnull）
    pub piece: Option<PieceJson>,
}

/// 持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandJson {
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub rook: Option<u32>,
    #[serde(rename = "b", skip_serializing_if = "Option::is_none")]
    pub bishop: Option<u32>,
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    #[serde(rename = "g", skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(rename = "k", skip_serializing_if = "Option::is_none")]
    pub knight: Option<u32>,
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub lance: Option<u32>,
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    pub pawn: Option<u32>,
}

/// 両者の持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandsJson {
    pub sente: HandJson,
    pub gote: HandJson,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    /// 9x9のセル配列（行優先、0 行目が後手側）
    pub cells: Vec<Vec<CellJson>>,
    /// 持ち駒
    pub hands: HandsJson,
    /// 手番: "sente" | "gote"
    pub turn: Player,
    /// ラウンド数
    pub move_number: u32,
    /// 局面文字列
    pub position: String,
}

impl From<Piece> for PieceJson {
    fn from(piece: Piece) -> Self {
        PieceJson {
            owner: piece.owner(),
            code: piece.code(),
            glyph: piece.glyph(),
            promoted: piece.is_promoted(),
        }
    }
}

impl From<Hand> for HandJson {
    fn from(hand: Hand) -> Self {
        let count = |pt: PieceType| Some(hand.count(pt)).filter(|&n| n > 0);
        HandJson {
            rook: count(PieceType::Rook),
            bishop: count(PieceType::Bishop),
            silver: count(PieceType::Silver),
            gold: count(PieceType::Gold),
            knight: count(PieceType::Knight),
            lance: count(PieceType::Lance),
            pawn: count(PieceType::Pawn),
        }
    }
}

impl Position {
    /// フロントエンド向けのJSON表現に変換
    pub fn to_json(&self) -> BoardStateJson {
        let cells = (0..Coordinate::SIZE)
            .map(|row| {
                (0..Coordinate::SIZE)
                    .map(|col| CellJson {
                        row,
                        col,
                        piece: self.piece_on(Coordinate::new(row, col)).map(PieceJson::from),
                    })
                    .collect()
            })
            .collect();

        BoardStateJson {
            cells,
            hands: HandsJson {
                sente: self.hand(Player::Sente).into(),
                gote: self.hand(Player::Gote).into(),
            },
            turn: self.side_to_move(),
            move_number: self.move_number(),
            position: self.format(),
        }
    }
}
