//! The watch loop: event source, trigger dispatch, command execution

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

use crate::command::CommandLine;
use crate::error::{WatchrunError, WatchrunResult};
use crate::runner::CommandRunner;

use super::event::{TriggerState, WatchEvent, WatchOptions};

/// Poll interval while idle; bounds both shutdown latency and how soon an
/// expired debounce window is noticed.
const POLL_MS: u64 = 50;

/// Watch a directory subtree and run the command on every trigger (blocking).
///
/// Blocks until the running flag is cleared (Ctrl+C in the binary). Raw
/// notifications cross from the notify backend into this thread over a
/// channel; everything after that point, including the blocking child wait,
/// happens on this single thread of control, so a second child can never be
/// spawned while one is still running.
pub fn watch(
    options: WatchOptions,
    command: CommandLine,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> WatchrunResult<()> {
    if !options.target.is_dir() {
        return Err(WatchrunError::DirectoryNotFound {
            path: options.target.clone(),
        });
    }

    let runner = CommandRunner::new(command);

    event_callback(WatchEvent::Started {
        target: options.target.display().to_string(),
        command: runner.command().to_string(),
    });

    // Set up the change subscription
    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if res.is_ok() {
                let _ = tx.send(());
            }
        },
        Config::default(),
    )
    .map_err(|source| WatchrunError::Subscribe {
        path: options.target.clone(),
        source,
    })?;

    watcher
        .watch(&options.target, RecursiveMode::Recursive)
        .map_err(|source| WatchrunError::Subscribe {
            path: options.target.clone(),
            source,
        })?;

    // Watch loop with debouncing
    let mut state = TriggerState::new(options.latency);

    while running.load(Ordering::SeqCst) {
        // Wait briefly for the next raw notification; the timeout keeps the
        // running flag and the debounce window responsive.
        if rx.recv_timeout(Duration::from_millis(POLL_MS)).is_ok() {
            state.note_change();
        }

        if state.should_fire() {
            state.take();
            event_callback(WatchEvent::Triggered);
            run_command(&runner, &event_callback)?;
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

/// Run the command once, blocking until the child is reaped.
///
/// Spawn failures abort the watch and are reported once, by whoever
/// receives the propagated error; a non-zero exit status only surfaces
/// through the event callback.
fn run_command(
    runner: &CommandRunner,
    callback: &impl Fn(WatchEvent),
) -> WatchrunResult<()> {
    callback(WatchEvent::CommandStarted);

    let status = runner.run()?;

    callback(WatchEvent::CommandComplete {
        success: status.success(),
        code: status.code(),
    });

    Ok(())
}
