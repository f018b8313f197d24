use anyhow::Result;
use pretty_assertions::assert_eq;
use quorum::errors::DuplicateVote;
use quorum::testing::votes;
use quorum::vote::vote_result;
use quorum::QuorumConfig;
use quorum::Tracker;
use quorum::VoteResult;
use quorum::VoteState;
use quorum::VoterSet;

use crate::fixtures::ut_harness;

/// A candidate wins once a majority grants.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn elect_won() -> Result<()> {
    let mut t = Tracker::new(QuorumConfig::single([1, 2, 3]));
    t.reset_votes();

    t.record_vote(1, true)?;
    assert_eq!(VoteResult::Pending, t.vote_result());

    t.record_vote(2, true)?;
    assert_eq!(VoteResult::Won, t.vote_result());

    Ok(())
}

/// The election is lost as soon as a majority can not be reached, before all
/// voters respond.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn elect_lost_before_all_respond() -> Result<()> {
    let mut t = Tracker::new(QuorumConfig::single([1, 2, 3]));
    t.reset_votes();

    t.record_vote(1, false)?;
    assert_eq!(VoteResult::Pending, t.vote_result());

    t.record_vote(2, false)?;
    assert_eq!(VoteResult::Lost, t.vote_result());
    assert_eq!(VoteState::Pending, t.vote_state(&3));

    Ok(())
}

/// One lost side loses a joint election even if the other side has won.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn elect_joint() -> Result<()> {
    let c = QuorumConfig::joint([1, 2, 3], [4, 5, 6]);

    let r = votes([(1, true), (2, true), (4, true)]);
    assert_eq!(VoteResult::Pending, vote_result(&c, &r));

    let r = votes([(1, true), (2, true), (4, true), (5, true)]);
    assert_eq!(VoteResult::Won, vote_result(&c, &r));

    let r = votes([(1, true), (2, true), (3, true), (4, false), (5, false)]);
    assert_eq!(VoteResult::Lost, vote_result(&c, &r));

    // A retired outgoing set does not block the incoming one.
    let c = QuorumConfig::joint(VoterSet::default(), [4, 5, 6]);
    let r = votes([(4, true), (5, true)]);
    assert_eq!(VoteResult::Won, vote_result(&c, &r));

    Ok(())
}

/// A voter can not change its vote within one election.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn elect_duplicate_vote() -> Result<()> {
    let mut t = Tracker::new(QuorumConfig::single([1, 2, 3]));
    t.reset_votes();

    t.record_vote(1, false)?;
    let res = t.record_vote(1, true);

    assert_eq!(
        Err(DuplicateVote {
            voter_id: 1,
            recorded: VoteState::Rejected,
            attempted: VoteState::Granted,
        }),
        res
    );
    assert_eq!(VoteState::Rejected, t.vote_state(&1));

    t.record_vote(2, true)?;
    t.record_vote(3, true)?;
    assert_eq!(VoteResult::Won, t.vote_result());

    Ok(())
}
