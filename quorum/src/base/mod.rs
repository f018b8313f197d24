//! Basic types and utilities shared by the modules of this crate.

pub mod display_ext;
