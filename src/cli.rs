use std::path::PathBuf;

use clap::Parser;

/// Watchrun - run a command whenever files change
#[derive(Parser, Debug)]
#[command(name = "watchrun")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: watchrun src cargo test")]
pub struct Cli {
    /// Directory subtree to watch for changes
    pub dir: PathBuf,

    /// Command to execute on change, with its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    pub command: Vec<String>,

    /// Output events as NDJSON for CI
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::try_parse_from(["watchrun", "src", "make", "test"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("src"));
        assert_eq!(cli.command, vec!["make", "test"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_single_command_token() {
        let cli = Cli::try_parse_from(["watchrun", ".", "make"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.command, vec!["make"]);
    }

    #[test]
    fn test_cli_parse_no_args_is_error() {
        assert!(Cli::try_parse_from(["watchrun"]).is_err());
    }

    #[test]
    fn test_cli_parse_missing_command_is_error() {
        assert!(Cli::try_parse_from(["watchrun", "src"]).is_err());
    }

    #[test]
    fn test_cli_parse_json_flag() {
        let cli = Cli::try_parse_from(["watchrun", "--json", "src", "make"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_parse_command_keeps_flags() {
        // Flags after the command belong to the command, not to watchrun
        let cli =
            Cli::try_parse_from(["watchrun", "src", "cargo", "test", "--release"]).unwrap();
        assert_eq!(cli.command, vec!["cargo", "test", "--release"]);
        assert!(!cli.json);
    }
}
