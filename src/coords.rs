use std::fmt;

/// Number of files (and of ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Which board axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    File,
    Rank,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::File => write!(f, "file"),
            Axis::Rank => write!(f, "rank"),
        }
    }
}

/// A file or rank number outside `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{axis} {number} is out of range, expected 1-8")]
pub struct OutOfRangeError {
    pub axis: Axis,
    pub number: i32,
}

/// A board column, 1 (a) through 8 (h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(u8);

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File(1),
        File(2),
        File(3),
        File(4),
        File(5),
        File(6),
        File(7),
        File(8),
    ];

    /// The 1-based file number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The algebraic letter of this file ('a'-'h').
    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self.0 - 1) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A board row, 1 through 8.
///
/// FEN lists ranks from 8 down to 1, so the first rank group of a
/// placement field is rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
    ];

    /// The 1-based rank number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The algebraic digit of this rank ('1'-'8').
    #[inline]
    pub const fn char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

fn checked_number(axis: Axis, number: i32) -> Result<u8, OutOfRangeError> {
    u8::try_from(number)
        .ok()
        .filter(|n| (1..=BOARD_SIZE).contains(n))
        .ok_or(OutOfRangeError { axis, number })
}

/// Look up the file with the given 1-based number.
///
/// # Examples
/// ```
/// # use fen_placement::coords::file_from_number;
/// assert_eq!(file_from_number(5).unwrap().char(), 'e');
/// assert!(file_from_number(9).is_err());
/// ```
pub fn file_from_number(number: i32) -> Result<File, OutOfRangeError> {
    checked_number(Axis::File, number).map(File)
}

/// Look up the rank with the given 1-based number.
pub fn rank_from_number(number: i32) -> Result<Rank, OutOfRangeError> {
    checked_number(Axis::Rank, number).map(Rank)
}

/// Combine an already validated file and rank into a square.
#[inline]
pub const fn square(file: File, rank: Rank) -> Square {
    Square { file, rank }
}

/// One of the 64 board cells.
///
/// Squares order rank-major: a1 < b1 < ... < h1 < a2 < ... < h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.rank, self.file).cmp(&(other.rank, other.file))
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        // Both numbers are 1-8, shakmaty indexes from 0.
        shakmaty::Square::from_coords(
            shakmaty::File::new(u32::from(square.file.number() - 1)),
            shakmaty::Rank::new(u32::from(square.rank.number() - 1)),
        )
    }
}
