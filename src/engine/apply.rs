use crate::board::Board;
use crate::types::{Dir, Pos};

/// Apply a move against the cell at `target` as a pure transform: returns
/// a new board with `target` and the empty slot swapped, or `None` when the
/// move is a no-op.
///
/// A move is valid iff `target` is in range and its Manhattan distance to
/// the empty slot is exactly 1 (strict orthogonal adjacency; never
/// diagonal, never the empty slot itself). Rejection is not an error —
/// clicking a non-adjacent tile is expected input and leaves the caller's
/// board untouched. The won-game latch (no moves once solved) belongs to
/// the session layer, [`crate::state::Game`]; the transform itself stays a
/// plain adjacency rule so a solved board can still be perturbed when a
/// caller means to.
pub fn apply_move(board: &Board, target: Pos) -> Option<Board> {
    if !target.in_bounds(board.size()) {
        return None;
    }
    let empty = board.empty_pos();
    if target.manhattan(empty) != 1 {
        return None;
    }
    let mut next = board.clone();
    next.swap(target, empty);
    Some(next)
}

/// Apply an arrow-key press. A press slides the adjacent tile into the gap
/// from that side: Up takes the tile below the empty slot (row+1), Down the
/// tile above (row-1), Left the tile to its right (col+1), Right the tile
/// to its left (col-1). A press toward an edge with no tile on that side is
/// a no-op; there is no wraparound.
pub fn apply_dir(board: &Board, dir: Dir) -> Option<Board> {
    let n = board.size();
    let empty = board.empty_pos();
    let target = match dir {
        Dir::Up if empty.row + 1 < n => Pos::new(empty.row + 1, empty.col),
        Dir::Down if empty.row > 0 => Pos::new(empty.row - 1, empty.col),
        Dir::Left if empty.col + 1 < n => Pos::new(empty.row, empty.col + 1),
        Dir::Right if empty.col > 0 => Pos::new(empty.row, empty.col - 1),
        _ => return None,
    };
    apply_move(board, target)
}
