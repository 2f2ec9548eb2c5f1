//! Log output for the `wordforge` binary.
//!
//! Events are written to stderr so that stdout only carries the progress and
//! result lines. The level defaults to `warn` and can be raised through
//! `RUST_LOG`, e.g. `RUST_LOG=wordforge=debug`.

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "warn";

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_line_number(true)
                .compact(),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
