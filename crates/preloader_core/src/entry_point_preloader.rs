use preloader_common::{AssetTags, CompilationGraph};
use preloader_error::Error;
use tracing::instrument;

use crate::{place, reduce, synthesize, ResolvedPreloadOptions};

/// Adds `<link rel="preload">` tags for the preloaded chunks of the document's entry points.
#[derive(Debug)]
pub struct EntryPointPreloader {
  options: ResolvedPreloadOptions,
}

impl EntryPointPreloader {
  pub fn new(options: ResolvedPreloadOptions) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &ResolvedPreloadOptions {
    &self.options
  }

  #[instrument(skip_all)]
  pub fn run(&self, graph: &CompilationGraph, tags: &mut AssetTags, on_warn: impl FnMut(Error)) {
    tracing::debug!("{:#?}", self.options);
    if self.options.inject_position.is_suppressed() {
      return;
    }

    let entry_file_map = reduce(graph, &self.options.chunks);
    let entry_tag_map = synthesize(
      &entry_file_map,
      &self.options.public_path,
      self.options.cross_origin_loading.as_deref(),
    );
    place(entry_tag_map, tags, self.options.inject_position, on_warn);
  }
}

#[cfg(test)]
mod tests {
  use preloader_common::{ChildGroupOptions, Chunk, ChunkGroup, HtmlTag};

  use super::*;
  use crate::InjectPosition;

  fn graph_with_preloaded(file: &str) -> CompilationGraph {
    let mut graph = CompilationGraph::new();
    let main_chunk = graph.add_chunk(Chunk::new("main").with_files(["main.js"]));
    let preloaded_chunk = graph.add_chunk(Chunk::new("preloaded").with_files([file]));
    let main = graph
      .add_chunk_group(ChunkGroup::new("main").with_chunks([main_chunk]))
      .unwrap();
    let preloaded = graph
      .add_chunk_group(ChunkGroup::new("preloaded").with_chunks([preloaded_chunk]))
      .unwrap();
    graph.add_entrypoint("main", main).unwrap();
    graph
      .connect(main, preloaded, ChildGroupOptions::preload(0))
      .unwrap();
    graph
  }

  fn run(options: ResolvedPreloadOptions, graph: &CompilationGraph) -> (AssetTags, Vec<Error>) {
    let mut tags = AssetTags {
      head_tags: vec![HtmlTag::script("/assets/main.js")],
      body_tags: vec![],
    };
    let mut warnings = vec![];
    EntryPointPreloader::new(options).run(graph, &mut tags, |w| warnings.push(w));
    (tags, warnings)
  }

  #[test]
  fn stylesheet_follows_the_entry_script() {
    let graph = graph_with_preloaded("chunk1.css");
    let (tags, warnings) = run(
      ResolvedPreloadOptions {
        public_path: "/assets/".to_string(),
        ..Default::default()
      },
      &graph,
    );
    assert!(warnings.is_empty());
    assert_eq!(
      tags.head_tags[1].to_string(),
      r#"<link rel="preload" href="/assets/chunk1.css" as="style">"#
    );
  }

  #[test]
  fn suppressed_injection_does_nothing() {
    let graph = graph_with_preloaded("chunk1.css");
    let (tags, warnings) = run(
      ResolvedPreloadOptions {
        inject_position: InjectPosition::Suppressed,
        ..Default::default()
      },
      &graph,
    );
    assert!(warnings.is_empty());
    assert_eq!(tags.head_tags.len(), 1);
  }

  #[test]
  fn fonts_get_anonymous_cross_origin() {
    let graph = graph_with_preloaded("font1.woff2");
    let (tags, _) = run(ResolvedPreloadOptions::default(), &graph);
    assert_eq!(
      tags.head_tags[1].to_string(),
      r#"<link rel="preload" href="/font1.woff2" as="font" crossorigin="anonymous">"#
    );
  }
}
