//! Text rendering of the board.
//!
//! Rows are printed from the Fox's side (y = 8) down to y = 0, three
//! characters per cell: blank for non-playable cells, ` . ` for empty
//! playable cells and ` F ` / ` G ` for pieces.

use std::fmt;

use crate::core::position::Position;

use super::grid::{is_playable, Board};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let pos = Position::new(x, y);
                if !is_playable(pos) {
                    f.write_str("   ")?;
                    continue;
                }
                match self.piece_at(pos) {
                    Some(piece) => write!(f, " {} ", piece.kind.symbol())?,
                    None => f.write_str(" . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the board with row and column labels, for terminal front ends.
#[must_use]
pub fn render_labelled(board: &Board) -> String {
    let plain = board.to_string();
    let mut out = String::new();

    for (line, y) in plain.lines().zip((0..board.height()).rev()) {
        out.push_str(&format!("{y} {line}\n"));
    }
    out.push_str("  ");
    for x in 0..board.width() {
        out.push_str(&format!(" {x} "));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceKind;

    #[test]
    fn test_initial_rendering() {
        let rendered = Board::initial().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        // Top row holds only the Fox
        assert_eq!(lines[0], " .     .     F     .     . ");
        // y = 2: four geese, (8,2) empty
        assert_eq!(lines[6], " G     G     G     G     . ");
        // y = 1
        assert_eq!(lines[7], "    G     G     G     G    ");
        // y = 0
        assert_eq!(lines[8], " G     G     G     G     G ");
    }

    #[test]
    fn test_every_line_has_full_width() {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Fox, Position::new(4, 4));
        for line in board.to_string().lines() {
            assert_eq!(line.len(), 27);
        }
    }

    #[test]
    fn test_labelled_rendering() {
        let rendered = render_labelled(&Board::initial());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("8 "));
        assert!(lines[8].starts_with("0 "));
        assert_eq!(lines[9], "   0  1  2  3  4  5  6  7  8 ");
    }
}
