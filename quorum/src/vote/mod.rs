//! Votes collected in one election and the election result derived from them.

mod vote_record;
mod vote_result;


pub use vote_record::VoteRecord;
pub use vote_record::VoteState;
pub use vote_result::vote_result;
pub use vote_result::VoteResult;
