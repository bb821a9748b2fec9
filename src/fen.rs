//! Reading the piece-placement field of Forsyth-Edwards Notation.
//!
//! [`parse`] is the usual entry point: it isolates the placement field of a
//! FEN record, validates it, then decodes it. [`decode_placement`] skips
//! validation and assumes its input is well formed; it still fails rather
//! than guess when that assumption is broken.

mod decode;
mod validate;

pub use decode::{DecodeError, MalformedRankError, decode_placement, decode_rank};
pub use validate::{FenValidator, ValidationError};

use log::debug;

use crate::PlacementValidator;
use crate::placement::Placement;

/// Error from [`parse`] or [`parse_with`].
///
/// `E` is the error type of the validator that guarded the decoder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError<E = ValidationError> {
    #[error("invalid piece placement: {0}")]
    Invalid(E),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The piece-placement field of a FEN record.
///
/// This is the first whitespace-separated field. The remaining fields (side
/// to move, castling, en passant, clocks) are left untouched.
///
/// # Examples
/// ```
/// # use fen_placement::fen::placement_field;
/// let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
/// assert_eq!(placement_field(fen), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
/// ```
pub fn placement_field(fen: &str) -> &str {
    fen.split_whitespace().next().unwrap_or_default()
}

/// Validate and decode the placement of a FEN record.
#[inline]
pub fn parse(fen: &str) -> Result<Placement, FenError> {
    parse_with(fen, &FenValidator)
}

/// Validate with a caller-supplied validator, then decode.
pub fn parse_with<V: PlacementValidator>(
    fen: &str,
    validator: &V,
) -> Result<Placement, FenError<V::Error>> {
    let field = placement_field(fen);
    if let Err(err) = validator.validate(field) {
        debug!("placement field {field:?} rejected: {err}");
        return Err(FenError::Invalid(err));
    }
    Ok(decode_placement(field)?)
}

/// Parse a full FEN record (or a bare placement field).
impl std::str::FromStr for Placement {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
