use crate::types::{idx_to_rc, is_supported_size, rc_to_idx, Cell, Pos};

/// An N×N sliding-puzzle board. Cells are laid out row-major (r*size + c);
/// exactly one cell is `None` (the empty slot) and the tile labels form the
/// set `1..=size*size-1`, each present once.
///
/// Boards are plain values: every transform in this crate clones and
/// returns a fresh board rather than mutating one the caller still holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// The goal layout for the given grid size: labels ascending row-major,
    /// empty slot in the bottom-right cell. `None` unless size is 3, 4 or 5.
    pub fn solved(size: u8) -> Option<Self> {
        if !is_supported_size(size) {
            return None;
        }
        let total = (size as usize) * (size as usize);
        let mut cells: Vec<Cell> = (1..total).map(|v| Some(v as u8)).collect();
        cells.push(None);
        Some(Self { size, cells })
    }

    /// Assemble a board from already-validated parts (codec internal).
    pub(crate) fn from_parts(size: u8, cells: Vec<Cell>) -> Self {
        debug_assert!(is_supported_size(size));
        debug_assert_eq!(cells.len(), (size as usize) * (size as usize));
        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        rc_to_idx(pos, self.size).map(|idx| self.cells[idx as usize])
    }

    /// Locate a cell value (a tile label, or `None` for the empty slot) by
    /// full row-major scan. No positional index is maintained, so this is
    /// O(N²) by design; returns the first (only, under the invariant) hit.
    pub fn find(&self, value: Cell) -> Option<Pos> {
        self.cells
            .iter()
            .position(|c| *c == value)
            .map(|idx| idx_to_rc(idx as u8, self.size))
    }

    /// Position of the empty slot. Its presence is the board invariant;
    /// a miss means a violation upstream and is fatal, since no move logic
    /// can proceed without it.
    #[inline]
    pub fn empty_pos(&self) -> Pos {
        self.find(None)
            .expect("board invariant violated: no empty cell present")
    }

    /// Deterministic list of orthogonal neighbors of a cell in
    /// [Up, Right, Down, Left] order. `None` means off-board.
    pub fn neighbors(&self, pos: Pos) -> [Option<Pos>; 4] {
        let n = self.size;
        let up = if pos.row > 0 {
            Some(Pos::new(pos.row - 1, pos.col))
        } else {
            None
        };
        let right = if pos.col + 1 < n {
            Some(Pos::new(pos.row, pos.col + 1))
        } else {
            None
        };
        let down = if pos.row + 1 < n {
            Some(Pos::new(pos.row + 1, pos.col))
        } else {
            None
        };
        let left = if pos.col > 0 {
            Some(Pos::new(pos.row, pos.col - 1))
        } else {
            None
        };
        [up, right, down, left]
    }

    /// True iff every cell holds consecutive labels from 1 in row-major
    /// order with the empty slot last.
    pub fn is_solved(&self) -> bool {
        let total = self.cells.len();
        for (idx, cell) in self.cells.iter().enumerate() {
            let want = if idx + 1 == total {
                None
            } else {
                Some((idx + 1) as u8)
            };
            if *cell != want {
                return false;
            }
        }
        true
    }

    /// Check the board invariant: exactly one empty slot and the labels
    /// `1..=size*size-1` each present exactly once.
    pub fn is_permutation(&self) -> bool {
        let total = self.cells.len();
        let mut seen = [false; 25]; // labels are at most 24 (5×5 board)
        let mut empties = 0usize;
        for cell in &self.cells {
            match cell {
                None => empties += 1,
                Some(v) => {
                    let v = *v as usize;
                    if v < 1 || v >= total || seen[v] {
                        return false;
                    }
                    seen[v] = true;
                }
            }
        }
        empties == 1 && seen[1..total].iter().all(|&s| s)
    }

    /// Swap two in-bounds cells. Callers validate bounds beforehand.
    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let ia = rc_to_idx(a, self.size).expect("swap: position out of bounds") as usize;
        let ib = rc_to_idx(b, self.size).expect("swap: position out of bounds") as usize;
        self.cells.swap(ia, ib);
    }
}

/// Free-function surface for callers that prefer it over the method.
#[inline]
pub fn is_solved(board: &Board) -> bool {
    board.is_solved()
}
