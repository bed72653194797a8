//! Tracing subscriber initialization.

use crate::config::Config;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "roster_filter=info";

/// Initializes the fmt subscriber writing to stderr.
///
/// The filter comes from `--log-filter` when given, falling back to
/// `RUST_LOG`, then to the crate default. An invalid spec warns and uses
/// the default rather than aborting the run.
pub fn init(cfg: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(cfg.verbose)
        .with_level(true);

    let filter = match &cfg.log_filter {
        Some(spec) => EnvFilter::try_new(spec).unwrap_or_else(|e| {
            eprintln!("Warning: invalid log filter '{spec}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::registry().with(fmt_layer).with(filter).init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        tag = %cfg.tag,
        criteria_empty = cfg.criteria.is_empty(),
        pretty = cfg.pretty,
        stats = cfg.stats || cfg.stats_json,
        "roster-filter starting"
    );
}
