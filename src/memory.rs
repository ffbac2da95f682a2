use crate::{error::Result, first_fit::FirstFitAllocator, handle::Handle};

/// Interface a driver programs against, independent of the placement
/// strategy behind it.
pub trait Memory {
  fn alloc(
    &mut self,
    size: usize,
  ) -> Result<Handle>;

  fn release(
    &mut self,
    handle: Handle,
  ) -> Result<()>;

  fn print_layout(&self);
}

impl Memory for FirstFitAllocator {
  fn alloc(
    &mut self,
    size: usize,
  ) -> Result<Handle> {
    self.allocate(size)
  }

  fn release(
    &mut self,
    handle: Handle,
  ) -> Result<()> {
    FirstFitAllocator::release(self, handle)
  }

  fn print_layout(&self) {
    FirstFitAllocator::print_layout(self)
  }
}
