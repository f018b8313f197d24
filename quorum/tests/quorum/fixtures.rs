use std::sync::Once;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Run a test body after installing a tracing subscriber that writes to the
/// test output.
pub fn ut_harness<F>(f: F) -> anyhow::Result<()>
where F: FnOnce() -> anyhow::Result<()> {
    init_ut_tracing();
    f()
}

fn init_ut_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_ansi(false)
            .init();
    });
}

/// A deterministic random number generator, so that a failure is
/// reproducible.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
