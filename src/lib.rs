//! # firstfit - A First-Fit Memory Manager Simulator
//!
//! This crate models how an operating system's heap allocator tracks free and
//! used regions. It manages a fixed-size arena of abstract **cells**: nothing
//! is stored in them, only which ones are handed out.
//!
//! ## Overview
//!
//! The arena is kept as an ordered list of **extents**, contiguous runs of
//! cells that are either free or allocated:
//!
//! ```text
//!   Arena (capacity 1024):
//!
//!   0         100                 300                                1024
//!   ┌─────────┬───────────────────┬───────────────────────────────────┐
//!   │  Free   │     Allocated     │               Free                │
//!   └─────────┴───────────────────┴───────────────────────────────────┘
//!
//!   Extents always cover 0..capacity exactly once, sorted by offset,
//!   and no two free extents are ever neighbours.
//! ```
//!
//! ### Allocation (first fit)
//!
//! The lowest-addressed free extent that is large enough wins. If it is
//! larger than the request it is split:
//!
//! ```text
//!   allocate(50):
//!
//!   ┌──────────────── Free 100 ───────────────┐
//!   └─────────────────────────────────────────┘
//!                        │
//!                        ▼
//!   ┌── Allocated 50 ──┬────── Free 50 ───────┐
//!   └──────────────────┴──────────────────────┘
//! ```
//!
//! ### Release (coalescing)
//!
//! A released extent is merged with a free predecessor and with a free
//! successor, independently:
//!
//! ```text
//!   release(B):
//!
//!   ┌─ Free A ─┬─ Allocated B ─┬─ Free C ─┬─ Allocated D ─┐
//!   └──────────┴───────────────┴──────────┴───────────────┘
//!                        │
//!                        ▼
//!   ┌──────────── Free A+B+C ─────────────┬─ Allocated D ─┐
//!   └─────────────────────────────────────┴───────────────┘
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   firstfit
//!   ├── extent     - Extent record and its Status
//!   ├── handle     - Handle returned by allocate, consumed by release
//!   ├── error      - AllocError and InvariantViolation
//!   ├── layout     - Region projection and the layout printer
//!   ├── memory     - Memory trait
//!   └── first_fit  - FirstFitAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use firstfit::FirstFitAllocator;
//!
//! let mut memory = FirstFitAllocator::new(1024).unwrap();
//!
//! let a = memory.allocate(100).unwrap();
//! let b = memory.allocate(200).unwrap();
//! assert_eq!((a.start(), b.start()), (0, 100));
//!
//! memory.release(a).unwrap();
//! assert_eq!(memory.allocate(50).unwrap().start(), 0);
//!
//! print!("{}", memory.layout());
//! ```
//!
//! ## Limitations
//!
//! - **Single-threaded**: wrap the allocator in one `Mutex` if it must be
//!   shared.
//! - **Linear scans**: allocation is O(number of extents).
//! - **No real storage**: handles carry offsets, not memory.

mod error;
mod extent;
mod first_fit;
mod handle;
mod layout;
mod memory;

pub use error::{AllocError, InvariantViolation, Result};
pub use extent::{Extent, Status};
pub use first_fit::{FirstFitAllocator, Relocation};
pub use handle::Handle;
pub use layout::{LayoutDisplay, Region};
pub use memory::Memory;
