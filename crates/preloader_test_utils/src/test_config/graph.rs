use preloader::{
  BuildResult, ChildGroupOptions, Chunk, ChunkGroup, ChunkGroupIdx, ChunkIdx, CompilationGraph,
  CompilationOutput, Error,
};
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::impl_serde_default;

/// A compilation graph where chunks and chunk groups refer to each other by name.
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GraphConfig {
  #[serde(default)]
  pub chunks: Vec<ChunkConfig>,
  #[serde(default)]
  pub chunk_groups: Vec<ChunkGroupConfig>,
  #[serde(default)]
  pub entrypoints: Vec<EntrypointConfig>,
  #[serde(default)]
  pub output: OutputConfig,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChunkConfig {
  pub name: String,
  #[serde(default)]
  pub files: Vec<String>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChunkGroupConfig {
  pub name: String,
  #[serde(default)]
  pub chunks: Vec<String>,
  #[serde(default)]
  pub children: Vec<ChildConfig>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChildConfig {
  pub group: String,
  #[serde(default)]
  pub preload_order: Option<i32>,
  #[serde(default)]
  pub prefetch_order: Option<i32>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntrypointConfig {
  pub name: String,
  pub group: String,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputConfig {
  #[serde(default)]
  pub public_path: Option<String>,
  #[serde(default)]
  pub cross_origin_loading: Option<String>,
}

impl_serde_default!(GraphConfig);
impl_serde_default!(OutputConfig);

fn lookup<I: Copy>(ids: &FxHashMap<&str, I>, kind: &str, name: &str) -> BuildResult<I> {
  ids
    .get(name)
    .copied()
    .ok_or_else(|| Error::panic(format!("Unknown {kind} \"{name}\" in test config")))
}

impl GraphConfig {
  pub fn compilation(&self) -> BuildResult<(CompilationGraph, CompilationOutput)> {
    let mut graph = CompilationGraph::new();

    let chunk_ids = self
      .chunks
      .iter()
      .map(|chunk| {
        let idx = graph.add_chunk(Chunk::new(&chunk.name).with_files(chunk.files.iter().cloned()));
        (chunk.name.as_str(), idx)
      })
      .collect::<FxHashMap<_, ChunkIdx>>();

    let mut group_ids = FxHashMap::<&str, ChunkGroupIdx>::default();
    for group in &self.chunk_groups {
      let chunks = group
        .chunks
        .iter()
        .map(|name| lookup(&chunk_ids, "chunk", name))
        .collect::<BuildResult<Vec<_>>>()?;
      let idx = graph.add_chunk_group(ChunkGroup::new(&group.name).with_chunks(chunks))?;
      group_ids.insert(group.name.as_str(), idx);
    }

    for group in &self.chunk_groups {
      let parent = lookup(&group_ids, "chunk group", &group.name)?;
      for child in &group.children {
        let child_idx = lookup(&group_ids, "chunk group", &child.group)?;
        graph.connect(
          parent,
          child_idx,
          ChildGroupOptions {
            preload_order: child.preload_order,
            prefetch_order: child.prefetch_order,
          },
        )?;
      }
    }

    for entrypoint in &self.entrypoints {
      let group = lookup(&group_ids, "chunk group", &entrypoint.group)?;
      graph.add_entrypoint(&entrypoint.name, group)?;
    }

    let output = CompilationOutput {
      public_path: self.output.public_path.clone(),
      cross_origin_loading: self.output.cross_origin_loading.clone(),
    };
    Ok((graph, output))
  }
}
