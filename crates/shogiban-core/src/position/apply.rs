//! 指し手・駒打ちによる局面遷移
//!
//! `apply_*` は検証済みの入力を前提とし、再検証しない。
//! 未検証の入力を扱う呼び出し側は `try_apply_*` を使う。

use crate::error::{Result, ShogiError};
use crate::movegen::DropPolicy;
use crate::types::{Drop, Move, Piece, PieceType};

use super::pos::Position;

impl Position {
    /// 指し手を適用した新しい局面を返す
    ///
    /// 前提: `self.validate(mv)` が真であること。
    pub fn apply_move(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        next.apply_move_in_place(mv);
        next
    }

    /// 駒打ちを適用した新しい局面を返す
    ///
    /// 前提: `self.validate_drop(drop)` が真であること。
    pub fn apply_drop(&self, drop: &Drop) -> Position {
        let mut next = self.clone();
        next.apply_drop_in_place(drop);
        next
    }

    /// 指し手をこの局面に直接適用する
    pub fn apply_move_in_place(&mut self, mv: &Move) {
        debug_assert!(self.validate(mv), "apply_move called with unvalidated move {mv}");
        let us = self.side_to_move;

        // 1. 動かす駒
        let Some(mut moving) = self.piece_on(mv.src) else {
            log::error!("apply_move: no piece on {} (move {mv})", mv.src);
            return;
        };

        // 2. 成り
        if mv.is_promotable() {
            if let Some(promoted) = moving.promote() {
                moving = promoted;
            }
        }

        // 3. 駒取り（成駒は元の駒に戻して手駒へ）
        if let Some(captured) = self.piece_on(mv.trg) {
            let base = captured.piece_type().unpromote();
            if base == PieceType::King {
                log::warn!("{us} captured the {} king on {}", captured.owner(), mv.trg);
            }
            self.hands[us.index()] = self.hands[us.index()].add(base);
        }

        // 4. 盤面の更新
        self.set_piece(mv.trg, Some(moving));
        self.set_piece(mv.src, None);

        // 5-6. 手番とラウンド数
        self.pass_turn();
        log::debug!("applied move {mv}: {}", self.format());
    }

    /// 駒打ちをこの局面に直接適用する
    pub fn apply_drop_in_place(&mut self, drop: &Drop) {
        debug_assert!(self.validate_drop(drop), "apply_drop called with unvalidated drop {drop}");
        let us = self.side_to_move;
        let pt = drop.piece.piece_type();

        self.hands[us.index()] = self.hands[us.index()].sub(pt);
        self.set_piece(drop.trg, Some(Piece::new(drop.piece.owner(), pt)));

        self.pass_turn();
        log::debug!("applied drop {drop}: {}", self.format());
    }

    /// 検証してから指し手を適用する
    pub fn try_apply_move(&self, mv: &Move) -> Result<Position> {
        if !self.validate(mv) {
            return Err(ShogiError::IllegalAction(format!("move {mv} is not legal")));
        }
        Ok(self.apply_move(mv))
    }

    /// 検証してから駒打ちを適用する
    pub fn try_apply_drop(&self, drop: &Drop, policy: DropPolicy) -> Result<Position> {
        if !self.validate_drop_with(drop, policy) {
            let held = self.hand(drop.player()).count(drop.piece.piece_type());
            return Err(ShogiError::IllegalAction(format!(
                "drop {drop} is not legal ({} holds {held})",
                drop.player()
            )));
        }
        Ok(self.apply_drop(drop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, Player};

    fn c(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_apply_move_is_pure() {
        let pos = Position::startpos();
        let mv = Move::new(Player::Sente, c(6, 0), c(5, 0));
        let next = pos.apply_move(&mv);

        assert_eq!(pos, Position::startpos());
        assert_eq!(next.piece_at(c(6, 0)), Ok(None));
        assert_eq!(next.piece_at(c(5, 0)), Ok(Some(Piece::new(Player::Sente, PieceType::Pawn))));
        assert_eq!(next.side_to_move(), Player::Gote);
        assert_eq!(next.move_number(), 0);
    }

    #[test]
    fn test_in_place_matches_pure() {
        let pos = Position::startpos();
        let mv = Move::new(Player::Sente, c(6, 2), c(5, 2));
        let mut in_place = pos.clone();
        in_place.apply_move_in_place(&mv);
        assert_eq!(in_place, pos.apply_move(&mv));
    }

    #[test]
    fn test_promotion_on_entering_zone() {
        let pos = Position::parse("4O4/9/9/4p4/9/9/9/9/4o4 s - - 3").unwrap();
        let next = pos.apply_move(&Move::new(Player::Sente, c(3, 4), c(2, 4)));
        assert_eq!(next.piece_at(c(2, 4)), Ok(Some(Piece::new(Player::Sente, PieceType::ProPawn))));

        // 金は成らない
        let pos = Position::parse("4O4/9/9/4g4/9/9/9/9/4o4 s - - 3").unwrap();
        let next = pos.apply_move(&Move::new(Player::Sente, c(3, 4), c(2, 4)));
        assert_eq!(next.piece_at(c(2, 4)), Ok(Some(Piece::new(Player::Sente, PieceType::Gold))));
    }

    #[test]
    fn test_gote_promotion_and_round_counter() {
        let pos = Position::parse("4O4/9/9/9/9/4S4/9/9/o8 g - - 7").unwrap();
        let next = pos.apply_move(&Move::new(Player::Gote, c(5, 4), c(6, 4)));
        assert_eq!(next.piece_at(c(6, 4)), Ok(Some(Piece::new(Player::Gote, PieceType::ProSilver))));
        assert_eq!(next.side_to_move(), Player::Sente);
        assert_eq!(next.move_number(), 8);
    }

    #[test]
    fn test_capture_demotes_into_hand() {
        let pos = Position::parse("4O4/9/9/9/4D4/9/9/4r4/4o4 s - - 0").unwrap();
        let next = pos.apply_move(&Move::new(Player::Sente, c(7, 4), c(4, 4)));
        assert_eq!(next.hand(Player::Sente).count(PieceType::Rook), 1);
        assert_eq!(next.hand(Player::Gote).count(PieceType::Rook), 0);
        assert_eq!(next.piece_at(c(4, 4)), Ok(Some(Piece::new(Player::Sente, PieceType::Rook))));
    }

    #[test]
    fn test_apply_drop() {
        let pos = Position::parse("4O4/9/9/9/9/9/9/9/4o4 s pp - 0").unwrap();
        let drop = Drop::new(Piece::new(Player::Sente, PieceType::Pawn), c(4, 4));
        let next = pos.apply_drop(&drop);
        assert_eq!(next.hand(Player::Sente).count(PieceType::Pawn), 1);
        assert_eq!(next.piece_at(c(4, 4)), Ok(Some(drop.piece)));
        assert_eq!(next.side_to_move(), Player::Gote);
        assert_eq!(next.move_number(), 0);
    }

    #[test]
    fn test_try_apply_rejects_illegal() {
        let pos = Position::startpos();
        let illegal = Move::new(Player::Sente, c(6, 0), c(4, 0));
        assert!(matches!(pos.try_apply_move(&illegal), Err(ShogiError::IllegalAction(_))));

        let drop = Drop::new(Piece::new(Player::Sente, PieceType::Pawn), c(4, 4));
        assert!(matches!(
            pos.try_apply_drop(&drop, DropPolicy::Minimal),
            Err(ShogiError::IllegalAction(_))
        ));
    }
}
