//! `tracing-subscriber` setup. Everything goes to stderr, stdout is reserved
//! for the generated assembly.

use std::io;

use tracing::debug;
use tracing_subscriber::{
  Layer, Registry, filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{CODEGEN_TARGET, LogConfig, TOKENIZER_TARGET};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Compact,
  Pretty,
  Json,
}

impl LogFormat {
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim().to_lowercase().as_str() {
      "compact" => Some(Self::Compact),
      "pretty" => Some(Self::Pretty),
      "json" => Some(Self::Json),
      _ => None,
    }
  }
}

/// Per-target filter derived from the config.
pub fn targets(config: &LogConfig) -> Targets {
  Targets::new()
    .with_default(config.global)
    .with_target(TOKENIZER_TARGET, config.level_for(TOKENIZER_TARGET))
    .with_target(CODEGEN_TARGET, config.level_for(CODEGEN_TARGET))
}

/// Install the global subscriber.
///
/// If a global subscriber is already set (a second call, or a test harness
/// that installed its own), the existing one is kept and the failure is
/// reported through it at `debug`.
pub fn init(config: &LogConfig) {
  let layer = format_layer(config.format).with_filter(targets(config));
  if let Err(err) = tracing_subscriber::registry().with(layer).try_init() {
    debug!(target: "pmcc", %err, "subscriber already installed");
  }
}

fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
  match format {
    LogFormat::Compact => fmt::layer()
      .compact()
      .without_time()
      .with_writer(io::stderr)
      .boxed(),
    LogFormat::Pretty => fmt::layer()
      .pretty()
      .with_target(true)
      .with_writer(io::stderr)
      .boxed(),
    LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
  }
}
