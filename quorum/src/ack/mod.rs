//! Acknowledged log indexes of voters and the committed index derived from
//! them.

mod ack_index_map;
mod committed;
mod describe;


pub use ack_index_map::AckIndexMap;
pub use committed::committed_index;
pub use describe::describe;
pub use describe::Describe;
