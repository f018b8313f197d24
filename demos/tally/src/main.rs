//! Feed voter acks and votes, one per line from stdin, into a quorum
//! [`Tracker`] and print the decisions after every line.
//!
//! ```text
//! $ tally --voters=1,2,3 --incoming=3,4,5
//! ack 1 5
//! vote 3 yes
//! remove 2
//! leave
//! reset
//! describe
//! ```

mod logging;

use std::io;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::bail;
use anyhow::Context;
use quorum::format_index;
use quorum::Config;
use quorum::Index;
use quorum::Tracker;
use quorum::VoterId;

use crate::logging::init_logging;

/// A line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cmd {
    Ack(VoterId, Index),
    Vote(VoterId, bool),
    Remove(VoterId),
    Leave,
    Reset,
    Describe,
}

impl FromStr for Cmd {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = s.split_whitespace().collect::<Vec<_>>();

        let cmd = match words.as_slice() {
            ["ack", id, idx] => Cmd::Ack(id.parse()?, idx.parse()?),
            ["vote", id, "yes"] => Cmd::Vote(id.parse()?, true),
            ["vote", id, "no"] => Cmd::Vote(id.parse()?, false),
            ["remove", id] => Cmd::Remove(id.parse()?),
            ["leave"] => Cmd::Leave,
            ["reset"] => Cmd::Reset,
            ["describe"] => Cmd::Describe,
            _ => bail!("unknown command: {:?}", s),
        };
        Ok(cmd)
    }
}

fn apply(t: &mut Tracker, cmd: Cmd) {
    match cmd {
        Cmd::Ack(id, idx) => t.upsert_ack(id, idx),
        Cmd::Vote(id, granted) => {
            if let Err(e) = t.record_vote(id, granted) {
                println!("rejected: {}", e);
            }
        }
        Cmd::Remove(id) => t.remove_voter(&id),
        Cmd::Leave => {
            let config = t.config().leave_joint();
            t.apply_config(config);
        }
        Cmd::Reset => t.reset_votes(),
        Cmd::Describe => print!("{}", t.describe()),
    }
}

fn print_decisions(t: &Tracker) -> anyhow::Result<()> {
    let mut committed = String::new();
    match t.committed_index() {
        Ok(idx) => format_index(&mut committed, Some(idx))?,
        Err(e) => committed = e.to_string(),
    }

    println!(
        "config: {}, committed: {}, vote: {}",
        t.config(),
        committed,
        t.vote_result()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let args = args.iter().map(|s| s.as_str()).collect::<Vec<_>>();

    let config = Config::build(&args)?;

    let g = init_logging("tally", &config.log_dir, &config.log_level);
    Box::leak(Box::new(g));

    let mut t = Tracker::new(config.quorum_config());
    t.reset_votes();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = line
            .parse::<Cmd>()
            .with_context(|| format!("invalid input line: {}", line))?;

        tracing::info!("apply: {:?}", cmd);

        apply(&mut t, cmd);
        print_decisions(&t)?;
    }

    Ok(())
}
