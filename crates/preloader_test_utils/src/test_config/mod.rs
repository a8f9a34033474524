use std::path::Path;

use schemars::JsonSchema;
use serde::Deserialize;

mod document;
pub use document::*;
mod graph;
pub use graph::*;

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestConfig {
  #[serde(default)]
  pub graph: GraphConfig,
  #[serde(default)]
  pub document: DocumentConfig,
  /// The fixture is expected to fail with this error instead of producing output.
  #[serde(default)]
  pub expected_error: Option<ExpectedError>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpectedError {
  pub code: String,
  pub message: String,
}

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    let content = std::fs::read_to_string(filepath)
      .unwrap_or_else(|err| panic!("Failed to read {}: {err}", filepath.display()));
    serde_json::from_str(&content)
      .unwrap_or_else(|err| panic!("Invalid test config {}: {err}", filepath.display()))
  }
}
