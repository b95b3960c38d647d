//! Shell command construction

use std::fmt;

/// The shell command executed on every trigger.
///
/// Built once at startup by joining the trailing CLI arguments with single
/// spaces, then immutable for the process lifetime. The string is handed to
/// a shell interpreter verbatim, so it may contain shell syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    /// Join command tokens into one shell command string.
    ///
    /// Returns `None` when no tokens are given. Tokens are joined exactly
    /// as received; no quoting or escaping is applied.
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = args
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Self(tokens.join(" ")))
    }

    /// The joined command string, as passed to the shell.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
