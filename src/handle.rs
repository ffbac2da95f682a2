use crate::first_fit::Relocation;

/// The capability returned by a successful allocation.
///
/// A plain value: holding a `Handle` proves nothing. The allocator looks the
/// start offset up again on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::len_without_is_empty)]
pub struct Handle {
  start: usize,
  len: usize,
}

impl Handle {
  pub fn new(
    start: usize,
    len: usize,
  ) -> Self {
    Self { start, len }
  }

  /// First cell of the granted extent.
  pub fn start(&self) -> usize {
    self.start
  }

  /// Number of cells requested.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Rewrites the handle after a compaction. Handles whose extent did not
  /// move come back unchanged.
  pub fn relocate(
    self,
    relocations: &[Relocation],
  ) -> Handle {
    relocations
      .iter()
      .find(|r| r.from == self.start)
      .map_or(self, |r| Handle::new(r.to, self.len))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_relocate() {
    let relocations = [
      Relocation { from: 40, to: 0, len: 10 },
      Relocation { from: 90, to: 10, len: 5 },
    ];

    assert_eq!(Handle::new(90, 5).relocate(&relocations), Handle::new(10, 5));
    assert_eq!(Handle::new(40, 10).relocate(&relocations), Handle::new(0, 10));
    assert_eq!(Handle::new(7, 3).relocate(&relocations), Handle::new(7, 3));
  }
}
