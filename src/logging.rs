//! Console logging.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=author_arranger=debug` to see
//! render passes, configuration diffs and author moves.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "warn,author_arranger=info";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
