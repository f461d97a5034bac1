#[macro_use]
extern crate quickcheck_macros;

mod bst;
mod op;
mod topology;
mod traversal;

pub(crate) use op::Op;

/// Routes `tracing` output through the test harness. Set `RUST_LOG=bintree=trace` to see it.
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
