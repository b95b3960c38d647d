//! Property tests for watchrun.
//!
//! Properties use randomized input generation to protect the command-line
//! construction invariants ("single-space join round-trips", "never
//! panics").
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use watchrun::CommandLine;

fn token() -> impl Strategy<Value = String> {
    // Printable, no whitespace: what argv tokens look like after the
    // invoking shell has already done its splitting.
    proptest::string::string_regex("[A-Za-z0-9_./=-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: joining argv tokens and splitting on single spaces round-trips.
    #[test]
    fn property_join_round_trips(
        tokens in proptest::collection::vec(token(), 1..=8),
    ) {
        let cmd = CommandLine::from_args(tokens.iter()).unwrap();
        let split: Vec<String> = cmd.as_str().split(' ').map(String::from).collect();
        prop_assert_eq!(split, tokens);
    }

    /// PROPERTY: the joined command never gains leading or trailing whitespace.
    #[test]
    fn property_join_no_outer_whitespace(
        tokens in proptest::collection::vec(token(), 1..=8),
    ) {
        let cmd = CommandLine::from_args(tokens.iter()).unwrap();
        prop_assert_eq!(cmd.as_str(), cmd.as_str().trim());
    }

    /// PROPERTY: `from_args` never panics on arbitrary token content.
    #[test]
    fn property_from_args_never_panics(
        tokens in proptest::collection::vec("(?s).{0,16}", 0..=6),
    ) {
        let _ = CommandLine::from_args(tokens.iter());
    }
}
