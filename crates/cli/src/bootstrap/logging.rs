use resolver_audit_domain::Config;
use tracing::debug;

/// Logs go to stderr; stdout only carries rows (a namespace worker's stdout
/// is parsed by its parent).
pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(false)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}
