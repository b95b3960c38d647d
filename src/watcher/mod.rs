//! File watcher driving command execution
//!
//! Implements the watch pipeline:
//! - notify-based event source (one root, recursive)
//! - debounced trigger dispatch (1 s coalescing window)
//! - serialized command execution (at most one child at a time)
//! - graceful Ctrl+C shutdown

mod event;
mod run;

pub use event::{WatchEvent, WatchOptions, LATENCY_MS};
pub use run::watch;
