use rand::Rng;
use test::black_box;
use test::Bencher;

use crate::ack::committed_index;
use crate::ack::AckIndexMap;
use crate::voters::QuorumConfig;
use crate::voters::VoterSet;

fn bench_committed_index(b: &mut Bencher, n: u64) {
    let mut rng = rand::thread_rng();

    let config = QuorumConfig::single(VoterSet::new(1..=n));
    let acks = (1..=n)
        .map(|id| (id, rng.gen_range(0..i64::MAX as u64)))
        .collect::<AckIndexMap>();

    b.iter(|| black_box(committed_index(&config, &acks)))
}

#[bench]
fn bench_committed_index_voters_1(b: &mut Bencher) {
    bench_committed_index(b, 1)
}

#[bench]
fn bench_committed_index_voters_3(b: &mut Bencher) {
    bench_committed_index(b, 3)
}

#[bench]
fn bench_committed_index_voters_5(b: &mut Bencher) {
    bench_committed_index(b, 5)
}

#[bench]
fn bench_committed_index_voters_7(b: &mut Bencher) {
    bench_committed_index(b, 7)
}

#[bench]
fn bench_committed_index_voters_9(b: &mut Bencher) {
    bench_committed_index(b, 9)
}

#[bench]
fn bench_committed_index_voters_11(b: &mut Bencher) {
    bench_committed_index(b, 11)
}
