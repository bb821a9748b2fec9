use crate::PlacementValidator;
use crate::coords::{BOARD_SIZE, Rank};
use crate::piece::PieceKind;

/// Error type for a piece-placement field that fails syntax checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Placement field is missing entirely
    #[error("piece placement is empty")]
    Empty,
    /// Field does not split into eight `/`-separated groups
    #[error("expected 8 rank groups, found {0}")]
    RankCount(usize),
    /// Character is neither a skip digit 1-8 nor a piece letter
    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidChar { rank: Rank, ch: char },
    /// Rank group does not cover exactly eight files
    #[error("rank {rank} covers {files} files, expected 8")]
    RankWidth { rank: Rank, files: u32 },
}

/// Syntax checker for the piece-placement field.
///
/// Guarantees everything [`decode_placement`](super::decode_placement)
/// assumes about its input. Adjacent digits such as `"44"` are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenValidator;

impl PlacementValidator for FenValidator {
    type Error = ValidationError;

    fn validate(&self, field: &str) -> Result<(), Self::Error> {
        if field.is_empty() {
            return Err(ValidationError::Empty);
        }

        let count = field.split('/').count();
        if count != usize::from(BOARD_SIZE) {
            return Err(ValidationError::RankCount(count));
        }

        // First group is rank 8
        for (group, rank) in field.split('/').zip(Rank::ALL.into_iter().rev()) {
            validate_rank(group, rank)?;
        }
        Ok(())
    }
}

fn validate_rank(group: &str, rank: Rank) -> Result<(), ValidationError> {
    let mut files = 0;
    for ch in group.chars() {
        files += match ch {
            '1'..='8' => ch.to_digit(10).unwrap_or_default(),
            c if PieceKind::from_letter(c).is_some() => 1,
            _ => return Err(ValidationError::InvalidChar { rank, ch }),
        };
    }

    if files != u32::from(BOARD_SIZE) {
        return Err(ValidationError::RankWidth { rank, files });
    }
    Ok(())
}
