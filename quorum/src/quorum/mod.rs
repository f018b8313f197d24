//! A quorum is a set of voters a vote request or append-entries request has
//! to be accepted by. The quorum used here is **majority**.
//! A quorum set is a collection of quorums, e.g. the quorum set of the majority
//! of `{a,b,c}` is `{a,b}, {b,c}, {a,c}`.
//!
//! A joint quorum set is the intersection of the quorum sets of its parts: a
//! quorum of joint `[{a,b,c}, {c,d,e}]` has to be a majority of both.

mod quorum_set;
mod quorum_set_impl;


pub use quorum_set::QuorumSet;
