//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。Logs go to stderr so
//! stdout stays clean for token output.

use std::io;

use tally_config::{LogFormat, LoggingConfig};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

use crate::config::targets;

/// Install the global subscriber
///
/// Returns `false` when a subscriber is already installed; the existing one
/// stays in place and keeps its own filter.
pub fn init(logging: &LoggingConfig) -> bool {
    let layer = create_format_layer(logging.format).with_filter(targets(logging));
    match tracing_subscriber::registry().with(layer).try_init() {
        Ok(()) => true,
        Err(e) => {
            debug!(target: "tally::cli", error = %e, "Subscriber already installed, keeping it");
            false
        }
    }
}

/// Create formatter layer based on format
fn create_format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
