use std::borrow::Cow;

mod idx;
pub use idx::*;
mod chunk;
pub use chunk::*;
mod chunk_group;
pub use chunk_group::*;
mod compilation_graph;
pub use compilation_graph::*;
mod html_tag;
pub use html_tag::*;
mod html_options;
pub use html_options::*;

pub type StaticStr = Cow<'static, str>;

/// Output settings of the compilation that influence generated URLs and attributes.
#[derive(Debug, Clone, Default)]
pub struct CompilationOutput {
  /// `output.publicPath` of the compilation. `None` when it's not a plain string.
  pub public_path: Option<String>,
  /// `output.crossOriginLoading`. `None` or an empty string disables the attribute.
  pub cross_origin_loading: Option<String>,
}
