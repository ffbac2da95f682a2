use thiserror::Error;

/// Ordinary rejections. The arena is left untouched whenever one of these is
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocError {
  #[error("out of memory: requested {requested} cells, largest free extent is {largest_free}")]
  OutOfMemory { requested: usize, largest_free: usize },

  #[error("no allocated extent starts at offset {start}")]
  InvalidHandle { start: usize },

  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
}

/// A broken arena invariant. Indicates corruption, never a caller mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
  #[error("extent list is empty")]
  Empty,

  #[error("first extent starts at {start}, expected 0")]
  StartNotZero { start: usize },

  #[error("gap before extent at index {at}")]
  Gap { at: usize },

  #[error("extent at index {at} overlaps its predecessor")]
  Overlap { at: usize },

  #[error("zero-length extent at index {at}")]
  ZeroLength { at: usize },

  #[error("extents at index {at} and {} are both free", .at + 1)]
  AdjacentFree { at: usize },

  #[error("last extent ends at {end}, capacity is {capacity}")]
  EndMismatch { end: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, AllocError>;
