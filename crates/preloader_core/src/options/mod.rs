use preloader_common::{ChunksOption, CompilationOutput, HtmlPluginOptions};

mod inject_position;
pub use inject_position::*;
mod public_path;
pub use public_path::*;

/// Everything the preload pipeline needs, with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreloadOptions {
  pub chunks: ChunksOption,
  pub inject_position: InjectPosition,
  /// Ends with exactly one `/`, unless the document dictated it.
  pub public_path: String,
  /// `None` when no `crossorigin` attribute should be set on non-font links.
  pub cross_origin_loading: Option<String>,
}

impl ResolvedPreloadOptions {
  pub fn resolve(
    html_options: &HtmlPluginOptions,
    document_public_path: Option<&str>,
    output: &CompilationOutput,
  ) -> Self {
    Self {
      chunks: html_options.chunks.clone(),
      inject_position: InjectPosition::resolve(&html_options.inject, html_options.script_loading),
      public_path: resolve_public_path(
        document_public_path,
        html_options.public_path.as_deref(),
        output.public_path.as_deref(),
      ),
      cross_origin_loading: output
        .cross_origin_loading
        .clone()
        .filter(|value| !value.is_empty()),
    }
  }
}

impl Default for ResolvedPreloadOptions {
  fn default() -> Self {
    Self {
      chunks: ChunksOption::All,
      inject_position: InjectPosition::Head,
      public_path: "/".to_string(),
      cross_origin_loading: None,
    }
  }
}
