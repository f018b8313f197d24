#![doc = include_str!("lib_readme.md")]
#![cfg_attr(feature = "bench", feature(test))]
#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![deny(unused_qualifications)]

#[cfg(feature = "bench")]
extern crate test;

macro_rules! func_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let n = &name[..name.len() - 3];
        let nn = n.replace("::{{closure}}", "");
        nn
    }};
}

mod config;

pub mod ack;
pub mod base;
pub mod errors;
pub mod index;
pub mod quorum;
pub mod testing;
pub mod tracker;
pub mod vote;
pub mod voters;

#[cfg(feature = "bench")]
mod bench;

pub use anyerror;
pub use anyerror::AnyError;

pub use crate::ack::AckIndexMap;
pub use crate::config::Config;
pub use crate::config::ConfigError;
pub use crate::index::format_index;
pub use crate::index::Index;
pub use crate::quorum::QuorumSet;
pub use crate::tracker::Tracker;
pub use crate::vote::VoteRecord;
pub use crate::vote::VoteResult;
pub use crate::vote::VoteState;
pub use crate::voters::QuorumConfig;
pub use crate::voters::VoterId;
pub use crate::voters::VoterSet;
