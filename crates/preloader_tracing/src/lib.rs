use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::{
  filter::{LevelFilter, Targets},
  fmt,
  prelude::*,
  EnvFilter,
};

static IS_INIT: AtomicBool = AtomicBool::new(false);

const TARGET: &str = "preloader";

/// Installs the subscriber once. Only `preloader*` targets are traced, up to `level`.
pub fn init(level: Level) {
  if IS_INIT.swap(true, Ordering::SeqCst) {
    return;
  }
  tracing_subscriber::registry()
    .with(fmt::layer().with_target(true))
    // Without `RUST_LOG` the env filter would only let errors through.
    .with(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy(),
    )
    .with(Targets::new().with_target(TARGET, level))
    .init();
}

/// `LOG=debug` shows the resolved options of every document, `LOG=trace` every insertion.
///
/// Any other value means `trace`.
pub fn enable_tracing_on_demand() {
  if let Ok(value) = std::env::var("LOG") {
    init(level_from_env(&value));
  }
}

fn level_from_env(value: &str) -> Level {
  value.parse().unwrap_or(Level::TRACE)
}
