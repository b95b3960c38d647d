//! Watchrun CLI - run a command whenever files change
//!
//! Usage: watchrun <DIR> <COMMAND>...
//!
//! Watches <DIR> recursively and runs <COMMAND> through the shell after
//! every debounced burst of changes, waiting for it to finish before
//! watching for more. Ctrl+C stops the watch.

mod cli;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use watchrun::command::CommandLine;
use watchrun::watcher::{watch, WatchEvent, WatchOptions};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Usage errors exit 1 (clap's default would be 2); --help and
    // --version stay exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = CommandLine::from_args(&cli.command).context("no command given")?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let json = cli.json;
    let options = WatchOptions::new(cli.dir, json);

    watch(options, command, running, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            // Quiet by default: no per-trigger output, only the banner and
            // the shutdown line. Fatal errors propagate and print below.
            match event {
                WatchEvent::Started { target, command } => {
                    println!("Watching {target} (running '{command}' on change)");
                }
                WatchEvent::Shutdown => println!("Stopped."),
                WatchEvent::Triggered
                | WatchEvent::CommandStarted
                | WatchEvent::CommandComplete { .. } => {}
            }
        }
    })?;

    Ok(())
}
