use log::{debug, trace};

use crate::{
  error::{AllocError, InvariantViolation, Result},
  extent::{Extent, Status},
  handle::Handle,
  layout::{LayoutDisplay, Region},
};

/// An allocated extent moved by [`FirstFitAllocator::compact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
  pub from: usize,
  pub to: usize,
  pub len: usize,
}

/// First-fit allocator over `capacity` abstract cells.
///
/// The arena is a `Vec` of extents sorted by start offset that always
/// partitions `0..capacity`, with no two neighbouring free extents.
#[derive(Clone, Debug)]
pub struct FirstFitAllocator {
  extents: Vec<Extent>,
  capacity: usize,
}

impl FirstFitAllocator {
  pub fn new(capacity: usize) -> Result<Self> {
    if capacity == 0 {
      return Err(AllocError::InvalidArgument("capacity must be positive"));
    }

    Ok(Self {
      extents: vec![Extent::free(0, capacity)],
      capacity,
    })
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn extents(&self) -> &[Extent] {
    &self.extents
  }

  pub fn free_cells(&self) -> usize {
    self
      .extents
      .iter()
      .filter(|e| e.is_free())
      .map(|e| e.len)
      .sum()
  }

  pub fn allocated_cells(&self) -> usize {
    self.capacity - self.free_cells()
  }

  /// Length of the largest free extent, 0 when the arena is full.
  pub fn largest_free(&self) -> usize {
    self
      .extents
      .iter()
      .filter(|e| e.is_free())
      .map(|e| e.len)
      .max()
      .unwrap_or(0)
  }

  fn find_free_extent(
    &self,
    size: usize,
  ) -> Option<usize> {
    self
      .extents
      .iter()
      .position(|e| e.is_free() && e.len >= size)
  }

  fn find_allocated_extent(
    &self,
    handle: Handle,
  ) -> Option<usize> {
    // Sorted by start, so a binary search finds the only candidate. A granted
    // extent always has exactly the handle's length.
    self
      .extents
      .binary_search_by_key(&handle.start(), |e| e.start)
      .ok()
      .filter(|&index| {
        let extent = &self.extents[index];
        !extent.is_free() && extent.len == handle.len()
      })
  }

  /// Grants `size` cells from the lowest-addressed free extent large enough.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Result<Handle> {
    if size == 0 {
      return Err(AllocError::InvalidArgument("allocation size must be positive"));
    }

    let Some(index) = self.find_free_extent(size) else {
      let largest_free = self.largest_free();
      debug!("allocate({size}) failed, largest free extent is {largest_free}");
      return Err(AllocError::OutOfMemory {
        requested: size,
        largest_free,
      });
    };

    let extent = self.extents[index];

    if extent.len == size {
      self.extents[index].status = Status::Allocated;
      debug!("allocate({size}) reused extent at {} whole", extent.start);
    } else {
      let (head, tail) = extent.split(size);
      self.extents[index] = head;
      self.extents.insert(index + 1, tail);
      debug!(
        "allocate({size}) split extent at {} leaving {} free cells at {}",
        extent.start, tail.len, tail.start
      );
    }

    self.debug_verify();

    Ok(Handle::new(extent.start, size))
  }

  /// Frees the extent granted for `handle` and merges it with any free
  /// neighbour. The extent must start at `handle.start()` and span
  /// `handle.len()` cells.
  pub fn release(
    &mut self,
    handle: Handle,
  ) -> Result<()> {
    let Some(mut index) = self.find_allocated_extent(handle) else {
      debug!("release of {handle:?} rejected");
      return Err(AllocError::InvalidHandle {
        start: handle.start(),
      });
    };

    self.extents[index].status = Status::Free;
    trace!("released extent at {}", handle.start());

    if index > 0 && self.extents[index - 1].is_free() {
      let extent = self.extents.remove(index);
      index -= 1;
      self.extents[index].absorb(extent);
      trace!("merged with predecessor at {}", self.extents[index].start);
    }

    if index + 1 < self.extents.len() && self.extents[index + 1].is_free() {
      let successor = self.extents.remove(index + 1);
      self.extents[index].absorb(successor);
      trace!("merged with successor at {}", successor.start);
    }

    debug!(
      "release({}) left free extent {}..{}",
      handle.start(),
      self.extents[index].start,
      self.extents[index].end()
    );

    self.debug_verify();

    Ok(())
  }

  /// Slides every allocated extent, in address order, to the low end of the
  /// arena and gathers all free cells into a single trailing extent.
  ///
  /// Handles of moved extents are stale afterwards; the returned relocations
  /// say where each one went (see [`Handle::relocate`]).
  pub fn compact(&mut self) -> Vec<Relocation> {
    let mut relocations = Vec::new();
    let mut compacted = Vec::with_capacity(self.extents.len());
    let mut cursor = 0;

    for extent in self.extents.iter().filter(|e| !e.is_free()) {
      if extent.start != cursor {
        debug!("compact moved {} cells from {} to {cursor}", extent.len, extent.start);
        relocations.push(Relocation {
          from: extent.start,
          to: cursor,
          len: extent.len,
        });
      }
      compacted.push(Extent::allocated(cursor, extent.len));
      cursor += extent.len;
    }

    if cursor < self.capacity {
      compacted.push(Extent::free(cursor, self.capacity - cursor));
    }

    self.extents = compacted;
    self.debug_verify();

    relocations
  }

  /// Projects the arena as inclusive regions in ascending order.
  pub fn describe(&self) -> impl Iterator<Item = Region> + '_ {
    self.extents.iter().map(Region::from)
  }

  pub fn layout(&self) -> LayoutDisplay<'_> {
    LayoutDisplay::new(&self.extents)
  }

  pub fn print_layout(&self) {
    print!("{}", self.layout());
  }

  /// Checks every arena invariant.
  pub fn verify(&self) -> std::result::Result<(), InvariantViolation> {
    let first = self.extents.first().ok_or(InvariantViolation::Empty)?;

    if first.start != 0 {
      return Err(InvariantViolation::StartNotZero { start: first.start });
    }

    for (at, extent) in self.extents.iter().enumerate() {
      if extent.len == 0 {
        return Err(InvariantViolation::ZeroLength { at });
      }
    }

    for (at, pair) in self.extents.windows(2).enumerate() {
      let (prev, next) = (&pair[0], &pair[1]);

      if prev.end() < next.start {
        return Err(InvariantViolation::Gap { at: at + 1 });
      }
      if prev.end() > next.start {
        return Err(InvariantViolation::Overlap { at: at + 1 });
      }
      if prev.is_free() && next.is_free() {
        return Err(InvariantViolation::AdjacentFree { at });
      }
    }

    let end = self.extents.last().map_or(0, Extent::end);
    if end != self.capacity {
      return Err(InvariantViolation::EndMismatch {
        end,
        capacity: self.capacity,
      });
    }

    Ok(())
  }

  fn debug_verify(&self) {
    if cfg!(debug_assertions) {
      if let Err(violation) = self.verify() {
        panic!("arena corrupted: {violation}\n{}", self.layout());
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn from_extents(
    extents: Vec<Extent>,
    capacity: usize,
  ) -> Self {
    Self { extents, capacity }
  }
}
