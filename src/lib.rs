//! Watchrun - run a command whenever files change
//!
//! Watchrun watches a single directory subtree and executes a user-supplied
//! shell command every time something under it changes. Executions are
//! serialized: the watch loop blocks until the child exits before it looks
//! at further changes, so at most one child process ever runs at a time.

pub mod command;
pub mod error;
pub mod runner;
pub mod watcher;

// Re-exports for convenience
pub use command::CommandLine;
pub use error::{WatchrunError, WatchrunResult};
pub use runner::CommandRunner;
pub use watcher::{watch, WatchEvent, WatchOptions};
