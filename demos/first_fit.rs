use std::{env, process};

use firstfit::{FirstFitAllocator, Handle, Memory};

const DEFAULT_CAPACITY: usize = 1024;
// Smallest arena where every step below requests at least one cell.
const MIN_CAPACITY: usize = 20;

/// Prints the current layout under a label.
fn show(
  label: &str,
  memory: &dyn Memory,
) {
  println!("\n[{label}]");
  memory.print_layout();
}

fn run(capacity: usize) -> firstfit::Result<()> {
  let mut memory = FirstFitAllocator::new(capacity)?;
  show("start", &memory);

  // --------------------------------------------------------------------
  // 1) Two allocations carve the arena from the low end.
  // --------------------------------------------------------------------
  let first = memory.alloc(capacity / 10)?;
  let second = memory.alloc(capacity / 5)?;
  println!("\n[1] first = {first:?}, second = {second:?}");
  show("1", &memory);

  // --------------------------------------------------------------------
  // 2) Releasing the first leaves a hole in front of the second.
  // --------------------------------------------------------------------
  memory.release(first)?;
  show("2", &memory);

  // --------------------------------------------------------------------
  // 3) A smaller request lands in the hole, first fit.
  // --------------------------------------------------------------------
  let third = memory.alloc(capacity / 20)?;
  println!(
    "\n[3] third == first? {}",
    if third.start() == first.start() {
      "Yes, it reused the freed extent"
    } else {
      "No, it went somewhere else"
    }
  );
  show("3", &memory);

  // --------------------------------------------------------------------
  // 4) Something larger than any free extent is rejected.
  // --------------------------------------------------------------------
  match memory.alloc(capacity) {
    Ok(handle) => println!("\n[4] unexpectedly granted {handle:?}"),
    Err(err) => println!("\n[4] {err}"),
  }

  // --------------------------------------------------------------------
  // 5) Compaction squeezes out the hole. Handles must be relocated.
  // --------------------------------------------------------------------
  let relocations = memory.compact();
  println!("\n[5] relocations = {relocations:?}");
  show("5", &memory);

  let live: Vec<Handle> = [second, third]
    .into_iter()
    .map(|h| h.relocate(&relocations))
    .collect();

  // --------------------------------------------------------------------
  // 6) Releasing everything coalesces back to one free extent.
  // --------------------------------------------------------------------
  for handle in live {
    memory.release(handle)?;
  }
  show("6", &memory);

  if let Err(err) = memory.release(second) {
    println!("\n[7] releasing twice: {err}");
  }

  Ok(())
}

fn main() {
  env_logger::init();

  let capacity = match env::args().nth(1) {
    Some(arg) => arg.parse().unwrap_or_else(|err| {
      eprintln!("invalid capacity {arg:?}: {err}");
      process::exit(2);
    }),
    None => DEFAULT_CAPACITY,
  };

  if capacity < MIN_CAPACITY {
    eprintln!("capacity must be at least {MIN_CAPACITY} for this walkthrough, got {capacity}");
    process::exit(2);
  }

  if let Err(err) = run(capacity) {
    eprintln!("error: {err}");
    process::exit(1);
  }
}
