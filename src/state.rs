use rand::Rng;
use serde::Serialize;

use crate::board::Board;
use crate::engine::apply::{apply_dir, apply_move};
use crate::engine::proximity::classify;
use crate::share::{decode_board, encode_board};
use crate::shuffle::shuffle;
use crate::types::{idx_to_rc, Dir, Pos, Proximity};

/// One cell as the rendering surface sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub label: Option<u8>,
    pub proximity: Proximity,
}

/// Value snapshot of a game for the rendering surface: per-cell label and
/// proximity in row-major order, plus the solved flag.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub size: u8,
    pub solved: bool,
    pub tiles: Vec<TileView>,
}

/// A single puzzle session: the current board, the starting arrangement it
/// can be reset to, and a successful-move counter. Timers, modals and
/// scoring stay with the caller; the engine owns board state only.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    initial: Board,
    moves: u32,
}

impl Game {
    /// Start a new shuffled game. `None` unless size is 3, 4 or 5. A
    /// shuffle that lands back on the goal layout (astronomically unlikely)
    /// is a valid, immediately-won game rather than an error.
    pub fn new<R: Rng>(size: u8, rng: &mut R) -> Option<Self> {
        let solved = Board::solved(size)?;
        let start = shuffle(&solved, rng);
        Some(Self::from_board(start))
    }

    /// Adopt an existing board as both the current and initial state.
    pub fn from_board(board: Board) -> Self {
        Self {
            initial: board.clone(),
            board,
            moves: 0,
        }
    }

    /// Restore a game from a shareable token.
    pub fn from_token(token: &str) -> Result<Self, String> {
        decode_board(token).map(Self::from_board)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Attempt a click/tap move. True iff the board changed; successful
    /// moves bump the counter. Once the board is solved every further move
    /// is rejected until `reset` or a new game. Callers key per-move
    /// feedback (audio, timer start) off the return value.
    pub fn play(&mut self, target: Pos) -> bool {
        if self.board.is_solved() {
            return false;
        }
        match apply_move(&self.board, target) {
            Some(next) => {
                self.board = next;
                self.moves += 1;
                true
            }
            None => false,
        }
    }

    /// Attempt an arrow-key move (see [`apply_dir`] for the mapping).
    /// Rejected once solved, like [`Game::play`].
    pub fn play_dir(&mut self, dir: Dir) -> bool {
        if self.board.is_solved() {
            return false;
        }
        match apply_dir(&self.board, dir) {
            Some(next) => {
                self.board = next;
                self.moves += 1;
                true
            }
            None => false,
        }
    }

    /// Back to the starting arrangement, move counter zeroed.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.moves = 0;
    }

    /// Shareable token for this game. Encodes the starting arrangement, so
    /// the recipient plays the same scramble from move zero.
    pub fn share_token(&self) -> String {
        encode_board(&self.initial)
    }

    /// Row-major render snapshot of the current board.
    pub fn snapshot(&self) -> Snapshot {
        let size = self.board.size();
        let tiles = self
            .board
            .cells()
            .iter()
            .enumerate()
            .map(|(idx, cell)| TileView {
                label: *cell,
                proximity: classify(*cell, idx_to_rc(idx as u8, size), size),
            })
            .collect();
        Snapshot {
            size,
            solved: self.board.is_solved(),
            tiles,
        }
    }
}
