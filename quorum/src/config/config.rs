//! Runtime configuration of the voters a node makes quorum decisions with.

use std::collections::BTreeSet;

use anyerror::AnyError;
use clap::Parser;

use crate::config::errors::ConfigError;
use crate::voters::QuorumConfig;
use crate::voters::VoterId;
use crate::voters::VoterSet;

/// The configuration of a quorum decision driver.
///
/// `--voters` is the voter set of a single config, or the outgoing set of a
/// joint config. When `--incoming` is given, the config is a joint of
/// `--voters` and `--incoming`, and every decision requires a majority of
/// both, until the membership change finishes.
#[derive(Clone, Debug, Parser)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// Comma separated voter ids, e.g. `--voters=1,2,3`
    #[clap(long, value_delimiter = ',')]
    pub voters: Vec<VoterId>,

    /// Comma separated ids of the incoming voters of a joint config
    #[clap(long, value_delimiter = ',')]
    pub incoming: Option<Vec<VoterId>>,

    /// Log level, overridden by env `RUST_LOG` if it is set
    #[clap(long, default_value = "info")]
    pub log_level: String,

    /// The directory to store log files
    #[clap(long, default_value = "./_log")]
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        <Self as Parser>::parse_from(Vec::<&'static str>::new())
    }
}

impl Config {
    /// Build a `Config` instance from a series of command line arguments.
    ///
    /// The first element in `args` must be the application name.
    pub fn build(args: &[&str]) -> Result<Config, ConfigError> {
        let config = <Self as Parser>::try_parse_from(args).map_err(|e| {
            ConfigError::ParseError {
                source: AnyError::from(&e),
                args: args.iter().map(|x| x.to_string()).collect(),
            }
        })?;
        config.validate()
    }

    /// Validate the state of this config.
    pub fn validate(self) -> Result<Config, ConfigError> {
        ensure_unique(&self.voters, "voters")?;

        let incoming = self.incoming.as_deref().unwrap_or_default();
        ensure_unique(incoming, "incoming")?;

        if self.voters.is_empty() && incoming.is_empty() {
            return Err(ConfigError::NoVoter);
        }

        Ok(self)
    }

    /// Returns the quorum config these voters form.
    pub fn quorum_config(&self) -> QuorumConfig {
        let voters = VoterSet::new(self.voters.iter().copied());

        match &self.incoming {
            None => QuorumConfig::Single(voters),
            Some(incoming) => QuorumConfig::Joint {
                outgoing: voters,
                incoming: VoterSet::new(incoming.iter().copied()),
            },
        }
    }
}

fn ensure_unique(ids: &[VoterId], set: &str) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateVoter {
                voter_id: *id,
                set: set.to_string(),
            });
        }
    }
    Ok(())
}
