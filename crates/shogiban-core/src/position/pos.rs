//! 局面（Position）

use crate::error::{Result, ShogiError};
use crate::types::{Coordinate, Hand, Piece, Player};

/// 将棋の局面
///
/// 値として扱う。遷移は常に新しい `Position` を返し、元の局面は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    // === 盤面 ===
    /// 各マスの駒（行優先、81 マス）
    pub(super) board: [Option<Piece>; Coordinate::NUM],

    // === 手駒 ===
    /// 手駒 [Player]
    pub(super) hands: [Hand; Player::NUM],

    // === 状態 ===
    /// 手番
    pub(super) side_to_move: Player,
    /// ラウンド数（後手が指すたびに 1 増える）
    pub(super) move_number: u32,
}

impl Position {
    /// 局面文字列で受け付けるラウンド数の上限（後手の 1 手で 1 増やせる余地を残す）
    pub const MAX_MOVE_NUMBER: u32 = u32::MAX - 1;

    /// 空の局面を生成（先手番、手駒なし、0 手目）
    pub fn empty() -> Self {
        Position {
            board: [None; Coordinate::NUM],
            hands: [Hand::EMPTY; Player::NUM],
            side_to_move: Player::Sente,
            move_number: 0,
        }
    }

    // ========== 盤面アクセス ==========

    /// 指定座標の駒を取得
    ///
    /// 空きマスは `Ok(None)`。盤外（区切り列を含む）の座標は `InvalidCoordinate`。
    pub fn piece_at(&self, coord: Coordinate) -> Result<Option<Piece>> {
        coord
            .square_index()
            .map(|i| self.board[i])
            .ok_or(ShogiError::InvalidCoordinate(coord))
    }

    /// 盤内の座標の駒を取得。盤外は空きとして扱う
    #[inline]
    pub(crate) fn piece_on(&self, coord: Coordinate) -> Option<Piece> {
        coord.square_index().and_then(|i| self.board[i])
    }

    /// 指定座標が盤内の空きマスか
    #[inline]
    pub fn is_vacant(&self, coord: Coordinate) -> bool {
        matches!(self.piece_at(coord), Ok(None))
    }

    /// 駒を置く（`None` で取り除く）。盤外の座標は無視する
    pub fn set_piece(&mut self, coord: Coordinate, piece: Option<Piece>) {
        if let Some(i) = coord.square_index() {
            self.board[i] = piece;
        }
    }

    /// 盤上の駒を座標とともに行優先で返す
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |c| self.piece_on(c).map(|p| (c, p)))
    }

    // ========== 状態アクセス ==========

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    /// 手駒を取得
    #[inline]
    pub fn hand(&self, player: Player) -> Hand {
        self.hands[player.index()]
    }

    #[inline]
    pub fn set_hand(&mut self, player: Player, hand: Hand) {
        self.hands[player.index()] = hand;
    }

    /// ラウンド数
    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[inline]
    pub fn set_move_number(&mut self, n: u32) {
        self.move_number = n;
    }

    /// 手番を相手に渡し、後手が指し終えたならラウンド数を進める
    pub(super) fn pass_turn(&mut self) {
        if self.side_to_move.closes_round() {
            self.move_number = self.move_number.saturating_add(1);
        }
        self.side_to_move = !self.side_to_move;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}
