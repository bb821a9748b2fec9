use log::{debug, trace};

use crate::coords::{BOARD_SIZE, OutOfRangeError, Rank, file_from_number, rank_from_number, square};
use crate::piece::{Piece, UnknownPieceLetterError};
use crate::placement::{OccupiedSquareError, Placement};

/// Rank groups whose accounting does not cover exactly the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRankError {
    #[error("expected 8 rank groups, found {0}")]
    GroupCount(usize),
    #[error("rank {rank} accounts for {files} files, expected 8")]
    Width { rank: Rank, files: i32 },
    #[error("rank {rank} places a piece beyond file h")]
    Overrun { rank: Rank },
    #[error("rank {rank} skips by '{digit}', expected 1-8")]
    BadDigit { rank: Rank, digit: char },
}

/// Error type for decoding a piece-placement field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),
    #[error(transparent)]
    UnknownPieceLetter(#[from] UnknownPieceLetterError),
    #[error(transparent)]
    MalformedRank(#[from] MalformedRankError),
    #[error(transparent)]
    OccupiedSquare(#[from] OccupiedSquareError),
}

/// Decode a piece-placement field into the pieces it describes.
///
/// The field is expected to have passed validation already (see
/// [`FenValidator`](super::FenValidator)). Input that breaks the board
/// geometry is still refused with [`MalformedRankError`] instead of being
/// repaired.
///
/// # Examples
/// ```
/// # use fen_placement::fen::decode_placement;
/// let placement = decode_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
/// assert_eq!(placement.len(), 32);
/// ```
pub fn decode_placement(field: &str) -> Result<Placement, DecodeError> {
    let groups: Vec<&str> = field.split('/').collect();
    if groups.len() != usize::from(BOARD_SIZE) {
        return Err(MalformedRankError::GroupCount(groups.len()).into());
    }

    let mut placement = Placement::new();
    // Groups run from rank 8 down to rank 1.
    for (index, group) in (0..).zip(groups) {
        let rank = rank_from_number(i32::from(BOARD_SIZE) - index)?;
        let pieces = decode_rank(group, rank)?;
        trace!("rank {rank}: {group:?} holds {} pieces", pieces.len());
        placement.try_extend(pieces)?;
    }

    debug!("decoded {field:?} into {} pieces", placement.len());
    Ok(placement)
}

/// Decode one rank group, scanning left to right from file a.
///
/// Digits skip that many empty files; any other character must be a piece
/// letter. The group must account for exactly eight files.
pub fn decode_rank(group: &str, rank: Rank) -> Result<Vec<Piece>, DecodeError> {
    let mut file: i32 = 1;
    let mut pieces = Vec::new();

    for ch in group.chars() {
        if let Some(skip) = ch.to_digit(10) {
            if !(1..=u32::from(BOARD_SIZE)).contains(&skip) {
                return Err(MalformedRankError::BadDigit { rank, digit: ch }.into());
            }
            file += skip as i32;
            continue;
        }

        if file > i32::from(BOARD_SIZE) {
            return Err(MalformedRankError::Overrun { rank }.into());
        }
        let square = square(file_from_number(file)?, rank);
        pieces.push(Piece::from_letter(ch, square)?);
        file += 1;
    }

    let files = file - 1;
    if files != i32::from(BOARD_SIZE) {
        return Err(MalformedRankError::Width { rank, files }.into());
    }
    Ok(pieces)
}
