//! The quorum state a replication/election driver owns.

#[allow(clippy::module_inception)]
mod tracker;


pub use tracker::Tracker;
