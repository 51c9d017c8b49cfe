use crate::types::{Cell, Pos, Proximity};

/// Goal cell for a tile label under row-major placement:
/// row = (v-1)/n, col = (v-1)%n. `None` for labels outside `1..=n*n-1`.
#[inline]
pub fn goal_pos(label: u8, size: u8) -> Option<Pos> {
    let total = (size as u16) * (size as u16);
    if label < 1 || (label as u16) >= total {
        return None;
    }
    Some(Pos::new((label - 1) / size, (label - 1) % size))
}

/// Classify a cell's distance to its goal for UI coloring.
///
/// Empty slot classifies `Empty`; a tile on its goal cell `Correct`; at
/// Manhattan distance exactly 1 `Close`; anything else `Far`, including
/// labels outside the valid range (the `goal_pos` fallback). Stateless and
/// purely presentational — game logic never reads this.
pub fn classify(cell: Cell, pos: Pos, size: u8) -> Proximity {
    let Some(label) = cell else {
        return Proximity::Empty;
    };
    let Some(goal) = goal_pos(label, size) else {
        return Proximity::Far;
    };
    if pos == goal {
        return Proximity::Correct;
    }
    if pos.manhattan(goal) == 1 {
        return Proximity::Close;
    }
    Proximity::Far
}
