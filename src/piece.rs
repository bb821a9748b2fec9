use std::fmt;

use crate::coords::Square;

/// A character that is not one of the six FEN piece letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece letter '{letter}' on {square}")]
pub struct UnknownPieceLetterError {
    pub letter: char,
    pub square: Square,
}

/// Side a piece belongs to. Uppercase letters are white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// Color encoded by the case of a piece letter.
    #[inline]
    pub fn from_letter(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }
}

/// Piece kind, without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bishop,
    King,
    Knight,
    Pawn,
    Queen,
    Rook,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Queen,
        PieceKind::Rook,
    ];

    /// Resolve a FEN letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'b' => Some(PieceKind::Bishop),
            'k' => Some(PieceKind::King),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            _ => None,
        }
    }

    /// Lowercase FEN letter of this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Bishop => 'b',
            PieceKind::King => 'k',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
        }
    }
}

/// A piece standing on a square.
///
/// Pieces are plain values: they are built once by the decoder and never
/// refer to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
    square: Square,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    /// Build the piece a FEN letter describes, placed on `square`.
    ///
    /// # Examples
    /// ```
    /// # use fen_placement::coords::{File, Rank, square};
    /// # use fen_placement::piece::{Piece, PieceColor, PieceKind};
    /// let e1 = square(File::ALL[4], Rank::ALL[0]);
    /// let king = Piece::from_letter('K', e1).unwrap();
    /// assert_eq!(king.kind(), PieceKind::King);
    /// assert_eq!(king.color(), PieceColor::White);
    /// ```
    pub fn from_letter(letter: char, square: Square) -> Result<Self, UnknownPieceLetterError> {
        let kind =
            PieceKind::from_letter(letter).ok_or(UnknownPieceLetterError { letter, square })?;
        Ok(Self::new(kind, PieceColor::from_letter(letter), square))
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> PieceColor {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// FEN letter of this piece, uppercase for white.
    pub fn letter(&self) -> char {
        match self.color {
            PieceColor::White => self.kind.letter().to_ascii_uppercase(),
            PieceColor::Black => self.kind.letter(),
        }
    }
}

/// Display as letter and square (e.g., "Ke1", "pd7").
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.square)
    }
}

impl From<PieceKind> for shakmaty::Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Bishop => shakmaty::Role::Bishop,
            PieceKind::King => shakmaty::Role::King,
            PieceKind::Knight => shakmaty::Role::Knight,
            PieceKind::Pawn => shakmaty::Role::Pawn,
            PieceKind::Queen => shakmaty::Role::Queen,
            PieceKind::Rook => shakmaty::Role::Rook,
        }
    }
}

impl From<PieceColor> for shakmaty::Color {
    fn from(color: PieceColor) -> Self {
        match color {
            PieceColor::White => shakmaty::Color::White,
            PieceColor::Black => shakmaty::Color::Black,
        }
    }
}

impl From<&Piece> for shakmaty::Piece {
    fn from(piece: &Piece) -> Self {
        shakmaty::Piece {
            role: piece.kind.into(),
            color: piece.color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{File, Rank, square};
    use test_case::test_case;

    fn e4() -> Square {
        square(File::ALL[4], Rank::ALL[3])
    }

    #[test_case('b', PieceKind::Bishop)]
    #[test_case('k', PieceKind::King)]
    #[test_case('n', PieceKind::Knight)]
    #[test_case('p', PieceKind::Pawn)]
    #[test_case('q', PieceKind::Queen)]
    #[test_case('r', PieceKind::Rook)]
    fn test_kind_is_case_insensitive(letter: char, kind: PieceKind) {
        assert_eq!(PieceKind::from_letter(letter), Some(kind));
        assert_eq!(PieceKind::from_letter(letter.to_ascii_uppercase()), Some(kind));
        assert_eq!(kind.letter(), letter);
    }

    #[test]
    fn test_case_decides_color() {
        let white = Piece::from_letter('K', e4()).unwrap();
        let black = Piece::from_letter('k', e4()).unwrap();
        assert_eq!(white.kind(), PieceKind::King);
        assert_eq!(black.kind(), PieceKind::King);
        assert_eq!(white.color(), PieceColor::White);
        assert_eq!(black.color(), PieceColor::Black);
    }

    #[test_case('x'; "unknown letter")]
    #[test_case('X'; "unknown uppercase")]
    #[test_case('1'; "digit")]
    #[test_case('/'; "separator")]
    #[test_case('é'; "non ascii")]
    fn test_unknown_letter(letter: char) {
        assert_eq!(
            Piece::from_letter(letter, e4()),
            Err(UnknownPieceLetterError {
                letter,
                square: e4()
            })
        );
    }

    #[test]
    fn test_letter_round_trips_case() {
        for kind in PieceKind::ALL {
            let lower = Piece::new(kind, PieceColor::Black, e4()).letter();
            let upper = Piece::new(kind, PieceColor::White, e4()).letter();
            assert_eq!(Piece::from_letter(lower, e4()).unwrap().color(), PieceColor::Black);
            assert_eq!(Piece::from_letter(upper, e4()).unwrap().color(), PieceColor::White);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Piece::from_letter('Q', e4()).unwrap().to_string(), "Qe4");
        assert_eq!(Piece::from_letter('n', e4()).unwrap().to_string(), "ne4");
    }

    #[test]
    fn test_into_shakmaty_piece() {
        let piece = Piece::from_letter('n', e4()).unwrap();
        assert_eq!(
            shakmaty::Piece::from(&piece),
            shakmaty::Piece {
                role: shakmaty::Role::Knight,
                color: shakmaty::Color::Black,
            }
        );
    }
}
