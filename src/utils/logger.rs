// src/utils/logger.rs

use log::{Level, LevelFilter};
use std::io::Write;

fn level_name(level: LevelFilter) -> &'static str {
  match level {
    LevelFilter::Off => "off",
    LevelFilter::Error => "error",
    LevelFilter::Warn => "warn",
    LevelFilter::Info => "info",
    LevelFilter::Debug => "debug",
    LevelFilter::Trace => "trace",
  }
}

/// Console logger for the binary.
///
/// `RUST_LOG` wins when set; otherwise only this crate logs, at `level`.
pub fn init(level: LevelFilter) {
  let default_filter = format!("{}={}", env!("CARGO_PKG_NAME"), level_name(level));

  let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
    .format(|buf, record| {
      let icon = match record.level() {
        Level::Error => "🔴",
        Level::Warn => "🟠",
        Level::Info => "🔵",
        Level::Debug => "⚪",
        Level::Trace => "▫️",
      };
      writeln!(buf, "{}  {}", icon, record.args())
    })
    .try_init();

  // A second init (tests, embedding) keeps the first logger.
  if result.is_err() {
    log::debug!("Logger already initialised");
  }
}
