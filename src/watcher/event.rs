//! Watch event types, options, and trigger coalescing

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Coalescing window in milliseconds
pub const LATENCY_MS: u64 = 1000;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory subtree to watch
    pub target: PathBuf,
    /// Output as NDJSON
    pub json: bool,
    /// Coalescing window for raw notifications
    pub latency: Duration,
}

impl WatchOptions {
    pub fn new(target: PathBuf, json: bool) -> Self {
        Self {
            target,
            json,
            latency: Duration::from_millis(LATENCY_MS),
        }
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    Started {
        target: String,
        command: String,
    },
    Triggered,
    CommandStarted,
    CommandComplete {
        success: bool,
        code: Option<i32>,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trigger dispatcher state: coalesces raw notifications into triggers.
///
/// The first raw event of a burst opens the window; when it expires, exactly
/// one trigger fires for everything that accumulated. Anchoring on the first
/// event rather than the latest throttles sustained churn to one trigger per
/// window instead of starving the command. No path or event-kind filtering
/// is applied: any change anywhere under the watched subtree counts.
pub(crate) struct TriggerState {
    first_change: Option<Instant>,
    window: Duration,
}

impl TriggerState {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            first_change: None,
            window,
        }
    }

    /// Record one raw notification.
    pub(crate) fn note_change(&mut self) {
        if self.first_change.is_none() {
            self.first_change = Some(Instant::now());
        }
    }

    /// True once the window opened by the first raw event has elapsed.
    pub(crate) fn should_fire(&self) -> bool {
        self.first_change
            .is_some_and(|first| first.elapsed() >= self.window)
    }

    /// Consume the pending trigger.
    pub(crate) fn take(&mut self) {
        self.first_change = None;
    }
}
