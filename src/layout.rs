//! Read-only rendering of an arena.

use std::fmt;

use crate::extent::{Extent, Status};

/// One extent as shown to a caller: inclusive `start..=end` plus its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
  pub start: usize,
  pub end: usize,
  pub status: Status,
}

impl From<&Extent> for Region {
  fn from(extent: &Extent) -> Self {
    Region {
      start: extent.start,
      end: extent.last(),
      status: extent.status,
    }
  }
}

/// Renders a layout one extent per line:
///
/// ```text
/// |    0 -   99 | Free
/// |  100 -  299 | Allocated
/// |  300 - 1023 | Free
/// ```
pub struct LayoutDisplay<'a> {
  extents: &'a [Extent],
}

impl<'a> LayoutDisplay<'a> {
  pub(crate) fn new(extents: &'a [Extent]) -> Self {
    Self { extents }
  }
}

impl fmt::Display for LayoutDisplay<'_> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    let width = self
      .extents
      .last()
      .map_or(1, |extent| extent.last().to_string().len());

    for extent in self.extents {
      let region = Region::from(extent);
      writeln!(
        f,
        "| {:>width$} - {:>width$} | {}",
        region.start, region.end, region.status
      )?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_region_end_is_inclusive() {
    let region = Region::from(&Extent::allocated(100, 200));
    assert_eq!(region.start, 100);
    assert_eq!(region.end, 299);
    assert_eq!(region.status, Status::Allocated);
  }

  #[test]
  fn test_display() {
    let extents = [
      Extent::free(0, 100),
      Extent::allocated(100, 200),
      Extent::free(300, 724),
    ];

    let rendered = LayoutDisplay::new(&extents).to_string();

    assert_eq!(
      rendered,
      "|    0 -   99 | Free\n\
       |  100 -  299 | Allocated\n\
       |  300 - 1023 | Free\n"
    );
  }

  #[test]
  fn test_display_single_cell() {
    let extents = [Extent::allocated(0, 1)];
    assert_eq!(LayoutDisplay::new(&extents).to_string(), "| 0 - 0 | Allocated\n");
  }
}
