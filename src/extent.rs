use std::fmt;

/// Whether the cells of an extent are handed out or available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
  Free,
  Allocated,
}

impl Status {
  pub fn is_free(self) -> bool {
    self == Status::Free
  }
}

impl fmt::Display for Status {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      Status::Free => f.pad("Free"),
      Status::Allocated => f.pad("Allocated"),
    }
  }
}

/// A contiguous run of cells sharing one [`Status`].
///
/// Covers the half-open range `start..start + len`. An extent stored in an
/// arena never has `len == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
  pub start: usize,
  pub len: usize,
  pub status: Status,
}

impl Extent {
  pub fn new(
    start: usize,
    len: usize,
    status: Status,
  ) -> Self {
    Self { start, len, status }
  }

  pub fn free(
    start: usize,
    len: usize,
  ) -> Self {
    Self::new(start, len, Status::Free)
  }

  pub fn allocated(
    start: usize,
    len: usize,
  ) -> Self {
    Self::new(start, len, Status::Allocated)
  }

  /// Offset immediately after the last cell.
  pub fn end(&self) -> usize {
    self.start + self.len
  }

  /// Offset of the last cell (inclusive).
  pub fn last(&self) -> usize {
    self.end() - 1
  }

  pub fn is_free(&self) -> bool {
    self.status.is_free()
  }

  /// Cuts the first `len` cells off as an allocated extent, returning it and
  /// the free remainder. `len` must be smaller than `self.len`.
  pub(crate) fn split(
    self,
    len: usize,
  ) -> (Extent, Extent) {
    debug_assert!(len > 0 && len < self.len);
    (
      Extent::allocated(self.start, len),
      Extent::free(self.start + len, self.len - len),
    )
  }

  /// Absorbs `next`, which must start where `self` ends.
  pub(crate) fn absorb(
    &mut self,
    next: Extent,
  ) {
    debug_assert_eq!(self.end(), next.start);
    self.len += next.len;
  }
}
