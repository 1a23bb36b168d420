//! Logging configuration read from the environment.
//!
//! `PMCC_LOG` sets the global level, `PMCC_LOG_TOKENIZER` and
//! `PMCC_LOG_CODEGEN` override it per stage, and `PMCC_LOG_FORMAT` picks the
//! output format.

use std::env;

use tracing::Level;

use crate::logging::LogFormat;

pub const TOKENIZER_TARGET: &str = "pmcc::tokenizer";
pub const CODEGEN_TARGET: &str = "pmcc::codegen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
  pub global: Level,
  pub tokenizer: Option<Level>,
  pub codegen: Option<Level>,
  pub format: LogFormat,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      global: Level::WARN,
      tokenizer: None,
      codegen: None,
      format: LogFormat::default(),
    }
  }
}

impl LogConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build the config from any key/value source. Unknown values are ignored.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();
    Self {
      global: lookup("PMCC_LOG")
        .and_then(|s| parse_level(&s))
        .unwrap_or(defaults.global),
      tokenizer: lookup("PMCC_LOG_TOKENIZER").and_then(|s| parse_level(&s)),
      codegen: lookup("PMCC_LOG_CODEGEN").and_then(|s| parse_level(&s)),
      format: lookup("PMCC_LOG_FORMAT")
        .and_then(|s| LogFormat::parse(&s))
        .unwrap_or(defaults.format),
    }
  }

  /// Get log level for a specific target
  pub fn level_for(&self, target: &str) -> Level {
    match target {
      TOKENIZER_TARGET => self.tokenizer.unwrap_or(self.global),
      CODEGEN_TARGET => self.codegen.unwrap_or(self.global),
      _ => self.global,
    }
  }
}

fn parse_level(s: &str) -> Option<Level> {
  match s.trim().to_lowercase().as_str() {
    "error" => Some(Level::ERROR),
    "warn" => Some(Level::WARN),
    "info" => Some(Level::INFO),
    "debug" => Some(Level::DEBUG),
    "trace" => Some(Level::TRACE),
    _ => None,
  }
}
