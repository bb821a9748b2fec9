//! Decoding of the FEN piece-placement field into a set of placed pieces.
//!
//! ```
//! use fen_placement::Placement;
//!
//! let placement: Placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//!     .parse()
//!     .unwrap();
//! assert_eq!(placement.len(), 32);
//! ```

pub mod coords;
pub mod fen;
pub mod piece;
pub mod placement;

pub use coords::{File, OutOfRangeError, Rank, Square, file_from_number, rank_from_number, square};
pub use fen::{DecodeError, MalformedRankError, decode_placement};
pub use piece::{Piece, PieceColor, PieceKind, UnknownPieceLetterError};
pub use placement::{OccupiedSquareError, Placement};

/// Trait for checking a piece-placement field before it is decoded.
///
/// The decoder trusts its input to be well formed; a validator is what
/// establishes that. [`fen::FenValidator`] is the standard implementation,
/// callers with stricter rules can supply their own to [`fen::parse_with`].
pub trait PlacementValidator {
    /// Error type describing why a field was rejected.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Accept or reject the placement field (without the other FEN fields).
    fn validate(&self, field: &str) -> Result<(), Self::Error>;
}
