use anyerror::AnyError;

use crate::voters::VoterId;

/// Error variants related to configuration.
#[derive(Debug, thiserror::Error)]
#[derive(PartialEq, Eq)]
pub enum ConfigError {
    #[error("ParseError: {source} while parsing ({args:?})")]
    ParseError { source: AnyError, args: Vec<String> },

    /// A voter id appears more than once in one voter set.
    #[error("voter {voter_id} is listed more than once in --{set}")]
    DuplicateVoter { voter_id: VoterId, set: String },

    /// Neither `--voters` nor `--incoming` has a voter.
    #[error("quorum config has no voter")]
    NoVoter,
}
