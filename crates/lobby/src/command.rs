//! Parsing of the `teams` command arguments.

use balance_core::Mode;

/// Keyword that switches to skill-blind teams
pub const RANDOM_KEYWORD: &str = "random";

/// Parsed `teams [region] [random]` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamsCommand {
    /// Every team must include a player from this region
    pub region: Option<String>,
    pub mode: Mode,
}

impl TeamsCommand {
    /// Parse a whitespace separated argument string.
    ///
    /// `random` anywhere (any case) selects random mode; the first other word
    /// is the region. Further words are ignored.
    pub fn parse(args: &str) -> Self {
        let words: Vec<&str> = args.split_whitespace().collect();
        Self::from_args(&words)
    }

    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let mut command = TeamsCommand::default();
        for arg in args.iter().map(AsRef::as_ref) {
            if arg.eq_ignore_ascii_case(RANDOM_KEYWORD) {
                command.mode = Mode::Random;
            } else if command.region.is_none() {
                command.region = Some(arg.to_string());
            }
        }
        command
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
