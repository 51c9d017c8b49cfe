use crate::board::Board;
use crate::types::Cell;

/// Serialize a board into its shareable token: cells row-major, comma
/// joined, `e` for the empty slot, decimal labels otherwise. No whitespace,
/// no trailing delimiter. Example for the solved 3×3 board:
/// `1,2,3,4,5,6,7,8,e`.
pub fn encode_board(board: &Board) -> String {
    let parts: Vec<String> = board
        .cells()
        .iter()
        .map(|cell| match cell {
            None => "e".to_string(),
            Some(v) => v.to_string(),
        })
        .collect();
    parts.join(",")
}

/// Decode a shareable token back into a board.
///
/// Strips one leading `#` fragment marker, splits on commas, and accepts
/// only element counts 9, 16 and 25 (board sizes 3, 4 and 5). Every element
/// must be `e` or a decimal tile label, and the decoded cells must satisfy
/// the board invariant — one empty slot, each label `1..=N*N-1` exactly
/// once — so a malformed token never yields a partial or inconsistent
/// board. Failure is recoverable; callers fall back to a fresh shuffle.
pub fn decode_board(token: &str) -> Result<Board, String> {
    let token = token.strip_prefix('#').unwrap_or(token);
    let items: Vec<&str> = token.split(',').collect();

    let size: u8 = match items.len() {
        9 => 3,
        16 => 4,
        25 => 5,
        other => {
            return Err(format!(
                "unsupported cell count {other} (expected 9, 16 or 25)"
            ))
        }
    };

    let mut cells: Vec<Cell> = Vec::with_capacity(items.len());
    for item in &items {
        if *item == "e" {
            cells.push(None);
        } else {
            let label: u8 = item
                .parse()
                .map_err(|e| format!("bad tile label {item:?}: {e}"))?;
            cells.push(Some(label));
        }
    }

    let board = Board::from_parts(size, cells);
    if !board.is_permutation() {
        return Err(
            "cells do not form a tile permutation (one empty slot, each label 1..=N*N-1 once)"
                .to_string(),
        );
    }
    Ok(board)
}
