//! 局面文字列の解析・出力
//!
//! 形式は空白区切りの 5 フィールド:
//!
//! ```text
//! <盤面> <手番> <先手の持ち駒> <後手の持ち駒> <ラウンド数>
//! ```
//!
//! 盤面は 9 行を `/` で区切り、連続する空きマスを数字で圧縮する。
//! 空きマス 1 つは `1` のまま残る。

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PositionField, Result, ShogiError};
use crate::types::{Coordinate, Hand, Piece, Player};

use super::pos::Position;

/// 平手初期局面
pub const START_POSITION: &str = "LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/9/ppppppppp/1b5r1/lksgogskl s - - 0";

/// 空きマスの記号（展開済み盤面）
const EMPTY: char = '1';

/// 空きの持ち駒欄
const EMPTY_POOL: &str = "-";

/// 持ち駒欄の表記
///
/// どちらの表記でも駒記号は持ち主の大文字・小文字で書く。
/// 解析時にもう一方の表記が混ざっていればエラーにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolEncoding {
    /// 1 枚ごとに駒記号を並べる（例: `rppp`）
    #[default]
    Flat,
    /// 2 枚以上の駒種に枚数を前置する（例: `r3p`）
    Counted,
}

impl FromStr for PoolEncoding {
    type Err = ShogiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(PoolEncoding::Flat),
            "counted" => Ok(PoolEncoding::Counted),
            _ => Err(ShogiError::Config(format!(
                "Expected 'flat' or 'counted', got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for PoolEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolEncoding::Flat => f.write_str("flat"),
            PoolEncoding::Counted => f.write_str("counted"),
        }
    }
}

/// 盤面文字列を展開する（数字 2-9 をその個数の `1` に置き換える）
///
/// 区切りの `/` は残すので、結果は `Coordinate::fen_index` でそのまま引ける。
pub fn expand_board(board: &str) -> String {
    let mut out = String::with_capacity(Coordinate::EXPANDED_LEN as usize);
    for c in board.chars() {
        match c.to_digit(10) {
            Some(n @ 2..=9) => out.extend(std::iter::repeat_n(EMPTY, n as usize)),
            _ => out.push(c),
        }
    }
    out
}

/// 展開済み盤面を圧縮する（連続する `1` を長い順に 9 から 2 までの数字へ）
///
/// 孤立した `1` はそのまま残す。
pub fn condense_board(expanded: &str) -> String {
    let mut out = String::with_capacity(expanded.len());
    let mut run = 0u32;
    for c in expanded.chars() {
        if c == EMPTY {
            run += 1;
        } else {
            flush_empty_run(&mut out, run);
            run = 0;
            out.push(c);
        }
    }
    flush_empty_run(&mut out, run);
    out
}

fn flush_empty_run(out: &mut String, mut run: u32) {
    while run >= 9 {
        out.push('9');
        run -= 9;
    }
    match run {
        0 => {}
        1 => out.push(EMPTY),
        n => out.extend(char::from_digit(n, 10)),
    }
}

impl Position {
    /// 平手初期局面
    pub fn startpos() -> Position {
        // 定数文字列なので失敗しない
        Self::parse(START_POSITION).unwrap_or_else(|e| panic!("START_POSITION is invalid: {e}"))
    }

    /// 局面文字列から生成（持ち駒欄は既定の表記）
    pub fn parse(text: &str) -> Result<Position> {
        Self::parse_with(text, PoolEncoding::default())
    }

    /// 局面文字列から生成
    pub fn parse_with(text: &str, encoding: PoolEncoding) -> Result<Position> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(ShogiError::malformed(
                PositionField::FieldCount,
                format!("Expected 5 fields, got {}", parts.len()),
            ));
        }

        let mut pos = Position::empty();

        // 1. 盤面
        pos.board = parse_board(parts[0])?;

        // 2. 手番
        let mut side = parts[1].chars();
        pos.side_to_move = match (side.next().and_then(Player::from_code), side.next()) {
            (Some(player), None) => player,
            _ => {
                return Err(ShogiError::malformed(
                    PositionField::SideToMove,
                    format!("Expected 's' or 'g', got '{}'", parts[1]),
                ));
            }
        };

        // 3. 手駒
        pos.hands[Player::Sente.index()] = parse_pool(parts[2], Player::Sente, encoding)?;
        pos.hands[Player::Gote.index()] = parse_pool(parts[3], Player::Gote, encoding)?;

        // 4. ラウンド数
        pos.move_number = parts[4]
            .parse::<u32>()
            .ok()
            .filter(|&n| n <= Position::MAX_MOVE_NUMBER)
            .ok_or_else(|| {
                ShogiError::malformed(
                    PositionField::MoveNumber,
                    format!(
                        "Expected an integer in 0..={}, got '{}'",
                        Position::MAX_MOVE_NUMBER,
                        parts[4]
                    ),
                )
            })?;

        log::trace!("parsed position '{text}' ({encoding})");
        Ok(pos)
    }

    /// 局面文字列に変換（持ち駒欄は既定の表記）
    pub fn format(&self) -> String {
        self.format_with(PoolEncoding::default())
    }

    /// 局面文字列に変換
    pub fn format_with(&self, encoding: PoolEncoding) -> String {
        [
            self.board_string(),
            self.side_to_move.code().to_string(),
            format_pool(self.hand(Player::Sente), Player::Sente, encoding),
            format_pool(self.hand(Player::Gote), Player::Gote, encoding),
            self.move_number.to_string(),
        ]
        .join(" ")
    }

    /// 圧縮済みの盤面文字列
    pub fn board_string(&self) -> String {
        condense_board(&self.expanded_board())
    }

    /// 展開済みの盤面文字列（空きマス = `1`、行区切り `/` を含む）
    pub fn expanded_board(&self) -> String {
        let mut out = String::with_capacity(Coordinate::EXPANDED_LEN as usize);
        for (i, cell) in self.board.iter().enumerate() {
            if i > 0 && i % Coordinate::SIZE as usize == 0 {
                out.push('/');
            }
            out.push(cell.map_or(EMPTY, Piece::code));
        }
        out
    }
}

impl FromStr for Position {
    type Err = ShogiError;

    fn from_str(s: &str) -> Result<Self> {
        Position::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

/// 盤面部分をパース
fn parse_board(board_str: &str) -> Result<[Option<Piece>; Coordinate::NUM]> {
    let expanded = expand_board(board_str);
    let rows: Vec<&str> = expanded.split('/').collect();
    if rows.len() != Coordinate::SIZE as usize {
        return Err(ShogiError::malformed(
            PositionField::Board,
            format!("Expected 9 rows, got {}", rows.len()),
        ));
    }

    let mut board = [None; Coordinate::NUM];
    for (row, row_str) in rows.iter().enumerate() {
        let cells: Vec<char> = row_str.chars().collect();
        if cells.len() != Coordinate::SIZE as usize {
            return Err(ShogiError::malformed(
                PositionField::Board,
                format!("Row {row} has {} squares", cells.len()),
            ));
        }
        for (col, &c) in cells.iter().enumerate() {
            if c == EMPTY {
                continue;
            }
            let piece = Piece::from_code(c).ok_or_else(|| {
                ShogiError::malformed(PositionField::Board, format!("Unknown piece: {c}"))
            })?;
            board[row * Coordinate::SIZE as usize + col] = Some(piece);
        }
    }
    Ok(board)
}

/// 持ち駒欄をパース
fn parse_pool(pool_str: &str, owner: Player, encoding: PoolEncoding) -> Result<Hand> {
    if pool_str == EMPTY_POOL {
        return Ok(Hand::EMPTY);
    }

    let mut hand = Hand::EMPTY;
    let mut pending: Option<u32> = None;
    for c in pool_str.chars() {
        if let Some(digit) = c.to_digit(10) {
            if encoding == PoolEncoding::Flat {
                return Err(pool_error(owner, format!("Unexpected count '{c}' in flat pool")));
            }
            let count = pending.unwrap_or(0) * 10 + digit;
            if count > u8::MAX as u32 {
                return Err(pool_error(owner, "Count out of range"));
            }
            pending = Some(count);
            continue;
        }

        let piece = Piece::from_code(c)
            .filter(|p| Hand::can_hold(p.piece_type()))
            .ok_or_else(|| pool_error(owner, format!("Unknown hand piece: {c}")))?;
        if piece.owner() != owner {
            return Err(pool_error(owner, format!("Piece '{c}' belongs to {}", piece.owner())));
        }
        let pt = piece.piece_type();

        match encoding {
            PoolEncoding::Flat => {
                if hand.count(pt) >= Hand::max_count(pt) {
                    return Err(pool_error(owner, format!("Too many '{c}' (at most {})", Hand::max_count(pt))));
                }
                hand = hand.add(pt);
            }
            PoolEncoding::Counted => {
                if hand.has(pt) {
                    return Err(pool_error(owner, format!("Repeated piece '{c}' in counted pool")));
                }
                let count = pending.take().unwrap_or(1);
                if count == 0 {
                    return Err(pool_error(owner, format!("Zero count for '{c}'")));
                }
                if count > Hand::max_count(pt) {
                    return Err(pool_error(owner, format!("Too many '{c}' (at most {})", Hand::max_count(pt))));
                }
                hand = hand.set(pt, count as u8);
            }
        }
    }

    if pending.is_some() {
        return Err(pool_error(owner, "Count without piece"));
    }
    Ok(hand)
}

fn pool_error(owner: Player, reason: impl std::fmt::Display) -> ShogiError {
    ShogiError::malformed(PositionField::Pool, format!("{owner}: {reason}"))
}

/// 持ち駒欄を文字列に変換
fn format_pool(hand: Hand, owner: Player, encoding: PoolEncoding) -> String {
    if hand.is_empty() {
        return EMPTY_POOL.to_string();
    }

    let mut result = String::new();
    for (pt, cnt) in hand.iter() {
        let c = Piece::new(owner, pt).code();
        match encoding {
            PoolEncoding::Flat => result.extend(std::iter::repeat_n(c, cnt as usize)),
            PoolEncoding::Counted => {
                if cnt > 1 {
                    result.push_str(&cnt.to_string());
                }
                result.push(c);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    #[test]
    fn test_startpos() {
        let pos = Position::startpos();
        assert_eq!(pos.side_to_move(), Player::Sente);
        assert_eq!(pos.move_number(), 0);
        assert!(pos.hand(Player::Sente).is_empty());
        assert!(pos.hand(Player::Gote).is_empty());

        // 後手の駒は上側（大文字）
        let at = |r, c| pos.piece_at(Coordinate::new(r, c)).unwrap();
        assert_eq!(at(0, 4), Some(Piece::new(Player::Gote, PieceType::King)));
        assert_eq!(at(1, 1), Some(Piece::new(Player::Gote, PieceType::Rook)));
        assert_eq!(at(2, 0), Some(Piece::new(Player::Gote, PieceType::Pawn)));
        // 先手の駒は下側（小文字）
        assert_eq!(at(6, 8), Some(Piece::new(Player::Sente, PieceType::Pawn)));
        assert_eq!(at(7, 1), Some(Piece::new(Player::Sente, PieceType::Bishop)));
        assert_eq!(at(7, 7), Some(Piece::new(Player::Sente, PieceType::Rook)));
        assert_eq!(at(8, 1), Some(Piece::new(Player::Sente, PieceType::Knight)));
        assert_eq!(at(4, 4), None);
        assert_eq!(pos.pieces().count(), 40);
    }

    #[test]
    fn test_start_position_roundtrip() {
        assert_eq!(Position::startpos().format(), START_POSITION);
        assert_eq!(Position::startpos().to_string(), START_POSITION);
    }

    #[test]
    fn test_expand_board() {
        let expanded = expand_board("LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/9/ppppppppp/1b5r1/lksgogskl");
        assert_eq!(expanded.len(), Coordinate::EXPANDED_LEN as usize);
        assert_eq!(expanded.chars().filter(|&c| c != '/').count(), 81);
        assert_eq!(&expanded[10..19], "1R11111B1");
        assert_eq!(expanded.chars().nth(Coordinate::new(1, 1).fen_index() as usize), Some('R'));
    }

    #[test]
    fn test_condense_board() {
        assert_eq!(condense_board("1R11111B1"), "1R5B1");
        assert_eq!(condense_board("111111111"), "9");
        assert_eq!(condense_board("1p1"), "1p1");
        assert_eq!(condense_board("1111111111"), "91");
        assert_eq!(condense_board("11111111111"), "92");
        let board = "LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/9/ppppppppp/1b5r1/lksgogskl";
        assert_eq!(condense_board(&expand_board(board)), board);
    }

    #[test]
    fn test_pool_encodings() {
        let text = "9/9/9/9/4o4/9/9/9/4O4 g rppp BB 12";
        let pos = Position::parse_with(text, PoolEncoding::Flat).unwrap();
        assert_eq!(pos.hand(Player::Sente).count(PieceType::Pawn), 3);
        assert_eq!(pos.hand(Player::Sente).count(PieceType::Rook), 1);
        assert_eq!(pos.hand(Player::Gote).count(PieceType::Bishop), 2);
        assert_eq!(pos.move_number(), 12);
        assert_eq!(pos.format_with(PoolEncoding::Flat), text);
        assert_eq!(
            pos.format_with(PoolEncoding::Counted),
            "9/9/9/9/4o4/9/9/9/4O4 g r3p 2B 12"
        );

        let counted = Position::parse_with("9/9/9/9/4o4/9/9/9/4O4 g r3p 2B 12", PoolEncoding::Counted)
            .unwrap();
        assert_eq!(counted, pos);
    }

    #[test]
    fn test_flat_pool_order_insensitive() {
        let a = Position::parse("9/9/9/9/4o4/9/9/9/4O4 s ppgp - 0").unwrap();
        let b = Position::parse("9/9/9/9/4o4/9/9/9/4O4 s gppp - 0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.format(), "9/9/9/9/4o4/9/9/9/4O4 s gppp - 0");
    }

    #[test]
    fn test_mixed_pool_encoding_is_error() {
        let counted = "9/9/9/9/4o4/9/9/9/4O4 s 2p - 0";
        let flat = "9/9/9/9/4o4/9/9/9/4O4 s pp - 0";
        assert!(matches!(
            Position::parse_with(counted, PoolEncoding::Flat),
            Err(ShogiError::MalformedPosition { field: PositionField::Pool, .. })
        ));
        assert!(matches!(
            Position::parse_with(flat, PoolEncoding::Counted),
            Err(ShogiError::MalformedPosition { field: PositionField::Pool, .. })
        ));
    }

    #[test]
    fn test_pool_owner_case() {
        // 先手の欄に大文字
        assert!(Position::parse("9/9/9/9/4o4/9/9/9/4O4 s P - 0").is_err());
        // 成駒・玉は持ち駒にならない
        assert!(Position::parse("9/9/9/9/4o4/9/9/9/4O4 s t - 0").is_err());
        assert!(Position::parse("9/9/9/9/4o4/9/9/9/4O4 s o - 0").is_err());
    }

    #[test]
    fn test_malformed_field_count() {
        for text in ["", "9/9/9/9/9/9/9/9/9 s - -", "9/9/9/9/9/9/9/9/9 s - - 0 extra"] {
            assert!(matches!(
                Position::parse(text),
                Err(ShogiError::MalformedPosition { field: PositionField::FieldCount, .. })
            ));
        }
    }

    #[test]
    fn test_malformed_move_number() {
        for number in ["x", "-1", "1.5"] {
            let text = format!("9/9/9/9/9/9/9/9/9 s - - {number}");
            assert!(matches!(
                Position::parse(&text),
                Err(ShogiError::MalformedPosition { field: PositionField::MoveNumber, .. })
            ));
        }
    }

    #[test]
    fn test_move_number_leaves_room_for_gote_ply() {
        let max = format!("4O4/9/9/9/9/9/9/9/4o4 g - - {}", Position::MAX_MOVE_NUMBER);
        let pos = Position::parse(&max).unwrap();
        assert_eq!(pos.move_number(), u32::MAX - 1);

        let overflow = format!("4O4/9/9/9/9/9/9/9/4o4 g - - {}", u32::MAX);
        assert!(matches!(
            Position::parse(&overflow),
            Err(ShogiError::MalformedPosition { field: PositionField::MoveNumber, .. })
        ));
    }

    #[test]
    fn test_pool_count_limits() {
        let pawns = "p".repeat(18);
        let pos = Position::parse(&format!("9/9/9/9/4o4/9/9/9/4O4 s {pawns} - 0")).unwrap();
        assert_eq!(pos.hand(Player::Sente).count(PieceType::Pawn), 18);
        assert!(Position::parse(&format!("9/9/9/9/4o4/9/9/9/4O4 s {pawns}p - 0")).is_err());
        assert!(Position::parse("9/9/9/9/4o4/9/9/9/4O4 s - RRR 0").is_err());

        assert!(Position::parse_with("9/9/9/9/4o4/9/9/9/4O4 s 18p 4G 0", PoolEncoding::Counted).is_ok());
        for pool in ["19p", "3r", "5g", "255p"] {
            let text = format!("9/9/9/9/4o4/9/9/9/4O4 s {pool} - 0");
            assert!(matches!(
                Position::parse_with(&text, PoolEncoding::Counted),
                Err(ShogiError::MalformedPosition { field: PositionField::Pool, .. })
            ));
        }
    }

    #[test]
    fn test_malformed_board() {
        for board in ["9/9/9", "9/9/9/9/9/9/9/9/8", "9/9/9/9/9/9/9/9/91", "9/9/9/9/9/9/9/9/8x", "9/9/9/9/9/9/9/9/0"] {
            let text = format!("{board} s - - 0");
            assert!(
                matches!(
                    Position::parse(&text),
                    Err(ShogiError::MalformedPosition { field: PositionField::Board, .. })
                ),
                "board '{board}' should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_side_to_move() {
        for side in ["b", "w", "sg", "S"] {
            let text = format!("9/9/9/9/9/9/9/9/9 {side} - - 0");
            assert!(matches!(
                Position::parse(&text),
                Err(ShogiError::MalformedPosition { field: PositionField::SideToMove, .. })
            ));
        }
    }

    #[test]
    fn test_pool_encoding_from_str() {
        assert_eq!("flat".parse::<PoolEncoding>(), Ok(PoolEncoding::Flat));
        assert_eq!("counted".parse::<PoolEncoding>(), Ok(PoolEncoding::Counted));
        assert!("sfen".parse::<PoolEncoding>().is_err());
    }
}
