use anyhow::Result;
use quorum::ack::committed_index;
use quorum::errors::NoQuorum;
use quorum::AckIndexMap;
use quorum::QuorumConfig;
use quorum::VoterSet;
use rand::Rng;

use crate::fixtures::rng;
use crate::fixtures::ut_harness;

/// The greatest index that is acked by at least a majority of `voters`,
/// found by trying every candidate index.
fn brute_force_committed(voters: &VoterSet, acks: &AckIndexMap) -> u64 {
    let acked = |id: &u64| acks.get(id).unwrap_or(0);

    voters
        .iter()
        .map(acked)
        .chain([0])
        .filter(|candidate| {
            voters.iter().filter(|id| acked(*id) >= *candidate).count()
                >= voters.majority()
        })
        .max()
        .unwrap_or(0)
}

fn random_voters(rng: &mut impl Rng, max_id: u64) -> VoterSet {
    (1..=max_id).filter(|_| rng.gen_bool(0.6)).collect()
}

/// For a single config, the committed index is the greatest index acked by a
/// majority.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn committed_index_is_greatest_majority_acked() -> Result<()> {
    let mut rng = rng(42);

    for _ in 0..2000 {
        let voters = random_voters(&mut rng, 12);
        let mut acks = AckIndexMap::new();
        for id in 1..=12 {
            if rng.gen_bool(0.8) {
                acks.upsert(id, rng.gen_range(0..20));
            }
        }

        let config = QuorumConfig::Single(voters.clone());
        let got = committed_index(&config, &acks);

        if voters.is_empty() {
            assert_eq!(Err(NoQuorum {}), got);
        } else {
            assert_eq!(
                Ok(brute_force_committed(&voters, &acks)),
                got,
                "voters: {}, acks: {:?}",
                voters,
                acks
            );
        }
    }

    Ok(())
}

/// For a joint config, the committed index is the smaller one of the two
/// sides; an empty side does not constrain.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn joint_committed_index_is_min_of_sides() -> Result<()> {
    let mut rng = rng(7);

    for _ in 0..2000 {
        let outgoing = random_voters(&mut rng, 9);
        let incoming = random_voters(&mut rng, 9);
        let acks = (1..=9)
            .map(|id| (id, rng.gen_range(0..20)))
            .collect::<AckIndexMap>();

        let config = QuorumConfig::joint(outgoing.clone(), incoming.clone());
        let got = committed_index(&config, &acks);

        let want = match (outgoing.is_empty(), incoming.is_empty()) {
            (true, true) => Err(NoQuorum {}),
            (false, true) => Ok(brute_force_committed(&outgoing, &acks)),
            (true, false) => Ok(brute_force_committed(&incoming, &acks)),
            (false, false) => Ok(brute_force_committed(&outgoing, &acks)
                .min(brute_force_committed(&incoming, &acks))),
        };

        assert_eq!(want, got, "config: {}, acks: {:?}", config, acks);
    }

    Ok(())
}

/// With acks only increasing, the committed index never decreases, and a
/// stale ack never changes anything.
#[tracing::instrument]
#[test_harness::test(harness = ut_harness)]
fn committed_index_is_monotonic() -> Result<()> {
    let mut rng = rng(1024);

    let config = QuorumConfig::joint([1, 2, 3, 4, 5], [4, 5, 6, 7]);
    let mut acks = AckIndexMap::new();
    let mut prev = committed_index(&config, &acks)?;

    for _ in 0..1000 {
        let id = rng.gen_range(1..=7);
        let idx = rng.gen_range(0..500);

        let before = acks.get(&id);
        acks.upsert(id, idx);
        assert_eq!(before.max(Some(idx)), acks.get(&id));

        let got = committed_index(&config, &acks)?;
        assert!(got >= prev, "committed index went back: {} -> {}", prev, got);
        prev = got;
    }

    Ok(())
}
