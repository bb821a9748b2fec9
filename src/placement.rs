use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::coords::Square;
use crate::piece::Piece;

/// A second piece was offered for a square that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("square {} already holds {occupant}, cannot place {rejected}", .occupant.square())]
pub struct OccupiedSquareError {
    pub occupant: Piece,
    pub rejected: Piece,
}

/// The set of pieces on the board, at most one per square.
///
/// `Placement` is what the decoder hands to board-state construction.
/// Equality is set equality; iteration runs a1, b1, ..., h8 but callers
/// should not rely on any order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    pieces: BTreeMap<Square, Piece>,
}

impl Placement {
    /// Create an empty placement.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pieces: BTreeMap::new(),
        }
    }

    /// Add a piece on its square.
    ///
    /// Fails without modifying the placement if the square is occupied,
    /// even by an identical piece.
    pub fn insert(&mut self, piece: Piece) -> Result<(), OccupiedSquareError> {
        match self.pieces.entry(piece.square()) {
            Entry::Occupied(entry) => Err(OccupiedSquareError {
                occupant: *entry.get(),
                rejected: piece,
            }),
            Entry::Vacant(entry) => {
                entry.insert(piece);
                Ok(())
            }
        }
    }

    /// Add every piece, stopping at the first collision.
    ///
    /// Pieces inserted before the collision stay in the placement.
    pub fn try_extend(
        &mut self,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<(), OccupiedSquareError> {
        pieces.into_iter().try_for_each(|piece| self.insert(piece))
    }

    /// Get the piece on a specific square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    #[inline]
    pub fn contains(&self, piece: &Piece) -> bool {
        self.piece_at(piece.square()) == Some(piece)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Piece;
    type IntoIter = std::collections::btree_map::Values<'a, Square, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.values()
    }
}

impl TryFrom<Vec<Piece>> for Placement {
    type Error = OccupiedSquareError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        let mut placement = Placement::new();
        placement.try_extend(pieces)?;
        Ok(placement)
    }
}

/// Hand the placement over to shakmaty's board representation.
impl From<&Placement> for shakmaty::Board {
    fn from(placement: &Placement) -> Self {
        let mut board = shakmaty::Board::empty();
        for piece in placement {
            board.set_piece_at(piece.square().into(), piece.into());
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{File, Rank, square};
    use crate::piece::{PieceColor, PieceKind};

    fn piece(letter: char, file: usize, rank: usize) -> Piece {
        Piece::from_letter(letter, square(File::ALL[file - 1], Rank::ALL[rank - 1]))
            .expect("test letter should be valid")
    }

    #[test]
    fn test_new_is_empty() {
        let placement = Placement::new();
        assert!(placement.is_empty());
        assert_eq!(placement.len(), 0);
        assert_eq!(placement.iter().count(), 0);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut placement = Placement::new();
        placement.insert(piece('K', 5, 1)).unwrap();
        placement.insert(piece('k', 5, 8)).unwrap();

        assert_eq!(placement.len(), 2);
        let e1 = square(File::ALL[4], Rank::ALL[0]);
        let found = placement.piece_at(e1).expect("king on e1");
        assert_eq!(found.kind(), PieceKind::King);
        assert_eq!(found.color(), PieceColor::White);
        assert!(placement.contains(&piece('k', 5, 8)));
        assert!(!placement.contains(&piece('q', 5, 8)));
    }

    #[test]
    fn test_collision_is_rejected() {
        let mut placement = Placement::new();
        placement.insert(piece('R', 1, 1)).unwrap();

        let result = placement.insert(piece('n', 1, 1));
        assert_eq!(
            result,
            Err(OccupiedSquareError {
                occupant: piece('R', 1, 1),
                rejected: piece('n', 1, 1),
            })
        );
        // Original occupant is untouched
        assert_eq!(placement.len(), 1);
        assert!(placement.contains(&piece('R', 1, 1)));
    }

    #[test]
    fn test_identical_piece_is_still_a_collision() {
        let mut placement = Placement::new();
        placement.insert(piece('p', 3, 7)).unwrap();
        assert!(placement.insert(piece('p', 3, 7)).is_err());
    }

    #[test]
    fn test_collision_message() {
        let err = OccupiedSquareError {
            occupant: piece('R', 1, 1),
            rejected: piece('n', 1, 1),
        };
        assert_eq!(err.to_string(), "square a1 already holds Ra1, cannot place na1");
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let forward = Placement::try_from(vec![piece('Q', 4, 1), piece('q', 4, 8)]).unwrap();
        let backward = Placement::try_from(vec![piece('q', 4, 8), piece('Q', 4, 1)]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_into_shakmaty_board() {
        let placement = Placement::try_from(vec![piece('K', 5, 1), piece('k', 5, 8)]).unwrap();
        let board = shakmaty::Board::from(&placement);
        assert_eq!(board.occupied().count(), 2);
        assert_eq!(
            board.piece_at(shakmaty::Square::E1),
            Some(shakmaty::Piece {
                role: shakmaty::Role::King,
                color: shakmaty::Color::White,
            })
        );
    }
}
