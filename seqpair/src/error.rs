use thiserror::Error;

/// Errors surfaced by problem construction, decoding and search.
/// None of them are retried inside the library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    /// Malformed rectangle or fixed block description
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Two fixed blocks occupy a common region
    #[error("fixed blocks {a} and {b} overlap")]
    OverlappingFixedBlocks { a: usize, b: usize },
    /// The problem contains no rectangles to place
    #[error("problem contains no rectangles")]
    EmptyProblem,
    /// A sequence pair could not be decoded, indicates a broken invariant
    #[error("internal error: {0}")]
    Decode(#[from] DecodeError),
    /// A decision maker proposed a candidate outside `[0, n)` or equal to the focus
    #[error("invalid swap candidate {candidate} (focus: {focus}, n: {n})")]
    InvalidCandidate {
        candidate: usize,
        focus: usize,
        n: usize,
    },
    /// A step was requested on a session which already reached its step limit
    #[error("perturbation session already terminated")]
    SessionTerminated,
}

/// Violations of the sequence pair representation invariant.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("{sequence} is not a permutation of 0..{n}")]
    NotAPermutation { sequence: &'static str, n: usize },
    #[error("rotation vector has length {len}, expected {n}")]
    RotationLength { len: usize, n: usize },
}
