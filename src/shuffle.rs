use rand::Rng;

use crate::board::Board;
use crate::types::Pos;

/// Walk length multiplier: a shuffle performs `20 * size * size` steps.
const WALK_FACTOR: u32 = 20;

/// Scramble a board with a randomized walk of `20 * N²` legal moves.
///
/// Every step is itself a legal move, so the result is always reachable
/// from the input board (solvable when starting from the goal layout) —
/// parity is preserved by construction, never verified post hoc. The walk
/// may, astronomically rarely, end on the solved layout; callers treat
/// that as an immediately-won game, not an error.
pub fn shuffle<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let n = board.size() as u32;
    shuffle_steps(board, WALK_FACTOR * n * n, rng)
}

/// The shuffle walk with an explicit step count.
///
/// Each step swaps the empty slot with a uniformly chosen in-bounds
/// neighbor, excluding the cell the empty slot occupied before the
/// previous step. That one-slot exclusion is enough to rule out immediate
/// undos; no visit history is kept. A board of size >= 2 always leaves at
/// least one candidate, but an empty candidate set skips the step without
/// mutating.
pub fn shuffle_steps<R: Rng>(board: &Board, steps: u32, rng: &mut R) -> Board {
    let mut next = board.clone();
    let mut empty = next.empty_pos();
    let mut forbidden: Option<Pos> = None;

    for _ in 0..steps {
        let mut candidates = [Pos::new(0, 0); 4];
        let mut count = 0usize;
        for neighbor in next.neighbors(empty).into_iter().flatten() {
            if forbidden != Some(neighbor) {
                candidates[count] = neighbor;
                count += 1;
            }
        }
        if count == 0 {
            continue;
        }
        let chosen = candidates[rng.gen_range(0..count)];
        next.swap(empty, chosen);
        forbidden = Some(empty);
        empty = chosen;
    }

    next
}
