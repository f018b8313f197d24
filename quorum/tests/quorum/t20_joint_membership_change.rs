use anyhow::Result;
use maplit::btreeset;
use pretty_assertions::assert_eq;
use quorum::QuorumConfig;
use quorum::QuorumSet;
use quorum::Tracker;

use crate::fixtures::ut_harness;

/// Replicate through a membership change `{1,2,3}` -> `{3,4,5}`:
///
/// - Enter the joint config: commit requires both majorities.
/// - Leave the joint config: acks of the removed voters are dropped and no
///   longer count.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn joint_membership_change() -> Result<()> {
    let mut t = Tracker::new(QuorumConfig::single([1, 2, 3]));

    tracing::info!("--- replicate in the old config");
    {
        t.upsert_ack(1, 5);
        t.upsert_ack(2, 5);
        t.upsert_ack(3, 3);
        assert_eq!(Ok(5), t.committed_index());
    }

    tracing::info!("--- enter joint config");
    {
        let joint = QuorumConfig::joint([1, 2, 3], [3, 4, 5]);
        t.apply_config(joint);

        assert_eq!(btreeset! {1, 2, 3, 4, 5}, t.config().voters());
        assert_eq!(Ok(0), t.committed_index());

        t.upsert_ack(4, 3);
        t.upsert_ack(5, 1);
        assert_eq!(Ok(3), t.committed_index());

        // The new voters acked 8, but the outgoing majority has only 5.
        t.upsert_ack(4, 8);
        t.upsert_ack(5, 8);
        assert_eq!(Ok(5), t.committed_index());
    }

    tracing::info!("--- leave joint config");
    {
        let incoming = t.config().leave_joint();
        let removed = t.apply_config(incoming);
        assert_eq!(vec![1, 2], removed);

        assert_eq!(Ok(8), t.committed_index());

        // A late ack from a removed voter is dropped.
        t.upsert_ack(1, 100);
        assert_eq!(None, t.ack_of(&1));
        assert_eq!(Ok(8), t.committed_index());
    }

    Ok(())
}

/// A quorum of ids must be a majority of both sets of a joint config.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn joint_quorum_set() -> Result<()> {
    let c = QuorumConfig::joint([1, 2, 3], [3, 4, 5]);

    assert_eq!(false, c.is_quorum([1, 2].iter()));
    assert_eq!(false, c.is_quorum([3, 4, 5].iter()));
    assert_eq!(true, c.is_quorum([2, 3, 4].iter()));

    Ok(())
}

#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn describe_joint_config() -> Result<()> {
    let mut t = Tracker::new(QuorumConfig::joint([1, 2], [2, 3]));
    t.upsert_ack(1, 10);
    t.upsert_ack(3, 20);

    let want = [
        "       idx",
        "x>      10    (id=1)",
        "?        0    (id=2)",
        "xx>     20    (id=3)",
        "",
    ]
    .join("\n");
    assert_eq!(want, t.describe());

    Ok(())
}
