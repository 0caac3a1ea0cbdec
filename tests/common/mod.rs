use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber, WARN unless `RUST_LOG` says otherwise.
/// Safe to call from every test.
pub fn init_tracing() {
    let env_filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
