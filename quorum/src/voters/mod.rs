mod quorum_config;
mod voter_set;


pub use quorum_config::QuorumConfig;
pub use voter_set::VoterId;
pub use voter_set::VoterSet;
