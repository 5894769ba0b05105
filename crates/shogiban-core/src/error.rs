//! エラー型

use crate::types::Coordinate;

/// 局面文字列のどのフィールドが不正だったか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionField {
    /// フィールド数
    FieldCount,
    Board,
    SideToMove,
    Pool,
    MoveNumber,
}

impl std::fmt::Display for PositionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PositionField::FieldCount => "field count",
            PositionField::Board => "board",
            PositionField::SideToMove => "side to move",
            PositionField::Pool => "pool",
            PositionField::MoveNumber => "move number",
        };
        f.write_str(name)
    }
}

/// 盤面エンジンのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShogiError {
    /// 局面文字列の形式が不正
    #[error("Malformed position ({field}): {reason}")]
    MalformedPosition { field: PositionField, reason: String },

    /// 盤外の座標を参照した
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(Coordinate),

    /// 検証されていない指し手・駒打ちを適用しようとした
    #[error("Illegal action: {0}")]
    IllegalAction(String),

    /// 設定ファイルの読み込み・解釈に失敗
    #[error("Invalid config: {0}")]
    Config(String),
}

impl ShogiError {
    pub(crate) fn malformed(field: PositionField, reason: impl Into<String>) -> ShogiError {
        ShogiError::MalformedPosition { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ShogiError>;
