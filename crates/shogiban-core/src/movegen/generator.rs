//! 盤上の駒の指し手生成

use smallvec::SmallVec;

use crate::position::Position;
use crate::types::{Coordinate, Direction, Move};

/// 1 駒分の指し手リスト（龍・馬でも 20 手程度に収まる）
pub type MoveList = SmallVec<[Move; 32]>;

impl Position {
    /// `src` の駒が指せる手を列挙する
    ///
    /// 駒がない・手番側の駒でない場合は空。順序は方向のインデックス順、
    /// 同じ方向内では近い順。
    pub fn legal_moves_from(&self, src: Coordinate) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move();

        let Ok(Some(piece)) = self.piece_at(src) else {
            return moves;
        };
        if piece.owner() != us {
            return moves;
        }

        let pattern = piece.movement_pattern();
        for dir in Direction::ALL {
            let limit = pattern[dir.index()];
            for n in 1..=limit as i32 {
                let trg = dir.step(src, us, n);
                // 区切り列・盤の上下にはみ出したらこの方向は終わり
                let Ok(occupant) = self.piece_at(trg) else {
                    break;
                };

                match occupant {
                    // 味方の駒で止まる（そのマスには行けない）
                    Some(p) if p.owner() == us => break,
                    // 敵の駒は取れるが、その先には進めない
                    Some(_) => {
                        moves.push(Move::new(us, src, trg));
                        break;
                    }
                    None => moves.push(Move::new(us, src, trg)),
                }
            }
        }

        moves
    }

    /// 指し手が合法かどうか
    pub fn validate(&self, mv: &Move) -> bool {
        self.legal_moves_from(mv.src).contains(mv)
    }
}
