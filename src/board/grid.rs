//! The playing grid and its live-piece collections.
//!
//! The `Board` tracks where every piece is and keeps three views of that
//! information consistent:
//! - the cell grid (position -> piece)
//! - the location index (piece id -> position)
//! - the live Geese and Fox collections, in insertion order
//!
//! All three are only ever changed together, inside `add_piece`, `place`,
//! `relocate` and `remove`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::piece::{Piece, PieceId, PieceKind};
use crate::core::position::Position;

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 9;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 9;

/// Number of Geese in the starting layout.
pub const INITIAL_GEESE: usize = 13;

/// Starting cell of the Fox.
pub const FOX_START: Position = Position::new(4, 8);

/// Rows the Geese are laid out on at the start.
const GOOSE_ROWS: i32 = 3;

const CELL_COUNT: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Whether `pos` is a playable cell: inside the 9×9 grid with an even
/// coordinate sum.
#[must_use]
pub const fn is_playable(pos: Position) -> bool {
    pos.x >= 0
        && pos.x < BOARD_WIDTH
        && pos.y >= 0
        && pos.y < BOARD_HEIGHT
        && (pos.x + pos.y) % 2 == 0
}

/// Iterate over every playable cell, row by row, columns ascending.
pub fn playable_cells() -> impl Iterator<Item = Position> {
    (0..BOARD_HEIGHT)
        .flat_map(|y| (0..BOARD_WIDTH).map(move |x| Position::new(x, y)))
        .filter(|&pos| is_playable(pos))
}

/// The Fox and Geese board.
///
/// ## Usage
///
/// ```
/// use fox_geese::board::Board;
/// use fox_geese::core::{PieceKind, Position};
///
/// let mut board = Board::empty();
/// let fox = board.add_piece(PieceKind::Fox, Position::new(4, 4)).unwrap();
/// board.add_piece(PieceKind::Goose, Position::new(5, 5));
///
/// assert_eq!(board.piece_at(Position::new(4, 4)).map(|p| p.id), Some(fox));
/// assert_eq!(board.goose_count(), 1);
///
/// // Non-playable cells fail closed.
/// assert!(board.piece_at(Position::new(4, 5)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major cells, `y * BOARD_WIDTH + x`.
    cells: Vec<Option<Piece>>,

    /// Piece locations: piece_id -> position
    locations: FxHashMap<PieceId, Position>,

    /// Live Geese in insertion order.
    geese: Vec<PieceId>,

    /// Live Foxes in insertion order.
    foxes: Vec<PieceId>,

    next_id: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create a board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![None; CELL_COUNT],
            locations: FxHashMap::default(),
            geese: Vec::new(),
            foxes: Vec::new(),
            next_id: 0,
        }
    }

    /// Create the starting position.
    ///
    /// Geese fill the playable cells of rows 0, 1 and 2 row by row until
    /// 13 are placed: 5 + 4 + 4, so the last playable cell of row 2, (8,2),
    /// stays empty. The Fox starts at (4,8).
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();

        for pos in playable_cells()
            .take_while(|pos| pos.y < GOOSE_ROWS)
            .take(INITIAL_GEESE)
        {
            board.add_piece(PieceKind::Goose, pos);
        }
        board.add_piece(PieceKind::Fox, FOX_START);

        board
    }

    // === Dimensions ===

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        BOARD_WIDTH
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        BOARD_HEIGHT
    }

    /// Whether `pos` is a playable cell of this board.
    #[must_use]
    pub const fn is_playable(&self, pos: Position) -> bool {
        is_playable(pos)
    }

    // === Lookup ===

    /// The piece on `pos`, if any.
    ///
    /// Returns `None` both for empty cells and for positions that are off
    /// the board or not playable.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        let index = Self::index(pos)?;
        self.cells[index].as_ref()
    }

    /// Whether `pos` is playable and empty.
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        is_playable(pos) && self.piece_at(pos).is_none()
    }

    /// Look up a live piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        let pos = *self.locations.get(&id)?;
        self.piece_at(pos)
    }

    /// Iterate over the live Geese in insertion order.
    pub fn geese(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.geese.iter().filter_map(|&id| self.piece(id))
    }

    /// Iterate over the live Foxes in insertion order.
    pub fn foxes(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.foxes.iter().filter_map(|&id| self.piece(id))
    }

    /// Iterate over the live pieces of one kind.
    pub fn pieces_of(&self, kind: PieceKind) -> Box<dyn Iterator<Item = &Piece> + '_> {
        match kind {
            PieceKind::Fox => Box::new(self.foxes()),
            PieceKind::Goose => Box::new(self.geese()),
        }
    }

    /// The first live Fox, if any.
    #[must_use]
    pub fn fox(&self) -> Option<&Piece> {
        self.foxes().next()
    }

    /// Number of live Geese.
    #[must_use]
    pub fn goose_count(&self) -> usize {
        self.geese.len()
    }

    /// Number of live Foxes.
    #[must_use]
    pub fn fox_count(&self) -> usize {
        self.foxes.len()
    }

    /// Iterate over every playable cell with its occupant.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<&Piece>)> + '_ {
        playable_cells().map(move |pos| (pos, self.piece_at(pos)))
    }

    // === Mutation ===

    /// Add a new piece on `pos` and register it with its collection.
    ///
    /// Returns `None` (and changes nothing) if `pos` is not playable or is
    /// already occupied.
    pub fn add_piece(&mut self, kind: PieceKind, pos: Position) -> Option<PieceId> {
        let index = Self::index(pos)?;
        if self.cells[index].is_some() {
            return None;
        }

        let id = PieceId::new(self.next_id);
        self.next_id += 1;

        self.cells[index] = Some(Piece::new(id, kind, pos));
        self.locations.insert(id, pos);
        match kind {
            PieceKind::Fox => self.foxes.push(id),
            PieceKind::Goose => self.geese.push(id),
        }

        Some(id)
    }

    /// Put an existing piece on `pos`, vacating the cell it came from.
    ///
    /// No-op returning `false` if `pos` is not playable, the piece is not
    /// on the board, or `pos` holds a different piece. Placing a piece on
    /// its own cell succeeds without change.
    pub fn place(&mut self, id: PieceId, pos: Position) -> bool {
        let Some(to) = Self::index(pos) else {
            return false;
        };
        let Some(&from_pos) = self.locations.get(&id) else {
            return false;
        };
        if let Some(occupant) = &self.cells[to] {
            return occupant.id == id;
        }

        let Some(from) = Self::index(from_pos) else {
            return false;
        };
        let Some(mut piece) = self.cells[from].take() else {
            return false;
        };

        piece.position = pos;
        self.cells[to] = Some(piece);
        self.locations.insert(id, pos);
        true
    }

    /// Move whatever stands on `from` to `to`.
    ///
    /// Returns `false` without change if `from` is empty or `to` is not a
    /// free playable cell.
    pub fn relocate(&mut self, from: Position, to: Position) -> bool {
        match self.piece_at(from) {
            Some(piece) if self.is_free(to) => {
                let id = piece.id;
                self.place(id, to)
            }
            _ => false,
        }
    }

    /// Remove the piece on `pos`.
    ///
    /// The piece leaves the grid and its collection together. No-op
    /// returning `None` for empty or non-playable cells.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let index = Self::index(pos)?;
        let piece = self.cells[index].take()?;

        self.locations.remove(&piece.id);
        let collection = match piece.kind {
            PieceKind::Fox => &mut self.foxes,
            PieceKind::Goose => &mut self.geese,
        };
        collection.retain(|&id| id != piece.id);

        Some(piece)
    }

    fn index(pos: Position) -> Option<usize> {
        if is_playable(pos) {
            Some((pos.y * BOARD_WIDTH + pos.x) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_consistency(board: &Board) {
        let mut on_grid = 0;
        for (pos, piece) in board.cells() {
            if let Some(piece) = piece {
                on_grid += 1;
                assert_eq!(piece.position, pos);
                assert_eq!(board.piece(piece.id), Some(piece));
                let listed = board.pieces_of(piece.kind).filter(|p| p.id == piece.id).count();
                assert_eq!(listed, 1);
            }
        }
        assert_eq!(on_grid, board.goose_count() + board.fox_count());
    }

    #[test]
    fn test_playability() {
        assert!(is_playable(Position::new(0, 0)));
        assert!(is_playable(Position::new(4, 8)));
        assert!(is_playable(Position::new(8, 8)));
        assert!(!is_playable(Position::new(1, 0)));
        assert!(!is_playable(Position::new(-1, 1)));
        assert!(!is_playable(Position::new(9, 1)));
        assert!(!is_playable(Position::new(4, 10)));
        assert_eq!(playable_cells().count(), 41);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();

        assert_eq!(board.goose_count(), 13);
        assert_eq!(board.fox_count(), 1);
        assert_eq!(board.fox().map(|f| f.position), Some(FOX_START));

        let goose_cells: Vec<_> = board.geese().map(|g| g.position).collect();
        let expected: Vec<_> = playable_cells().filter(|p| p.y < 3).take(13).collect();
        assert_eq!(goose_cells, expected);
        assert_eq!(goose_cells.last(), Some(&Position::new(6, 2)));
        assert!(board.piece_at(Position::new(8, 2)).is_none());

        check_consistency(&board);
    }

    #[test]
    fn test_add_piece_refuses_bad_cells() {
        let mut board = Board::empty();
        assert!(board.add_piece(PieceKind::Goose, Position::new(1, 0)).is_none());
        assert!(board.add_piece(PieceKind::Goose, Position::new(0, 0)).is_some());
        assert!(board.add_piece(PieceKind::Fox, Position::new(0, 0)).is_none());
        assert_eq!(board.goose_count(), 1);
        assert_eq!(board.fox_count(), 0);
    }

    #[test]
    fn test_place_moves_piece() {
        let mut board = Board::empty();
        let id = board.add_piece(PieceKind::Fox, Position::new(4, 4)).unwrap();

        assert!(board.place(id, Position::new(5, 5)));
        assert!(board.piece_at(Position::new(4, 4)).is_none());
        assert_eq!(board.piece(id).map(|p| p.position), Some(Position::new(5, 5)));
        check_consistency(&board);
    }

    #[test]
    fn test_place_on_non_playable_is_noop() {
        let mut board = Board::empty();
        let id = board.add_piece(PieceKind::Fox, Position::new(4, 4)).unwrap();
        let before = board.clone();

        assert!(!board.place(id, Position::new(4, 5)));
        assert!(!board.place(id, Position::new(-2, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_occupied_is_refused() {
        let mut board = Board::empty();
        let fox = board.add_piece(PieceKind::Fox, Position::new(4, 4)).unwrap();
        board.add_piece(PieceKind::Goose, Position::new(5, 5));
        let before = board.clone();

        assert!(!board.place(fox, Position::new(5, 5)));
        assert_eq!(board, before);

        // Own cell is fine
        assert!(board.place(fox, Position::new(4, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::initial();
        assert!(board.relocate(Position::new(4, 8), Position::new(3, 7)));
        assert!(!board.relocate(Position::new(4, 8), Position::new(5, 7)));
        assert!(!board.relocate(Position::new(3, 7), Position::new(3, 8)));
        assert_eq!(board.fox().map(|f| f.position), Some(Position::new(3, 7)));
        check_consistency(&board);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut board = Board::initial();
        let target = Position::new(2, 2);
        let goose = *board.piece_at(target).unwrap();

        let removed = board.remove(target);
        assert_eq!(removed, Some(goose));
        assert_eq!(board.goose_count(), 12);
        assert!(board.piece(goose.id).is_none());
        assert!(board.geese().all(|g| g.id != goose.id));
        check_consistency(&board);
    }

    #[test]
    fn test_remove_fox() {
        let mut board = Board::initial();
        assert!(board.remove(FOX_START).is_some_and(|p| p.is_fox()));
        assert_eq!(board.fox_count(), 0);
        assert!(board.fox().is_none());
    }

    #[test]
    fn test_remove_empty_or_invalid_is_noop() {
        let mut board = Board::initial();
        let before = board.clone();

        assert!(board.remove(Position::new(4, 4)).is_none());
        assert!(board.remove(Position::new(1, 0)).is_none());
        assert!(board.remove(Position::new(20, 20)).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut board = Board::empty();
        let a = board.add_piece(PieceKind::Goose, Position::new(0, 0)).unwrap();
        board.remove(Position::new(0, 0));
        let b = board.add_piece(PieceKind::Goose, Position::new(0, 0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
