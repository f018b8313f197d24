#![allow(clippy::bool_assert_comparison)]

mod fixtures;

mod t10_committed_index_property;
mod t20_joint_membership_change;
mod t30_election;
