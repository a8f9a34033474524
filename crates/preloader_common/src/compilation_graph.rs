use hashlink::{LinkedHashMap, LinkedHashSet};
use itertools::Itertools;
use oxc_index::IndexVec;
use preloader_error::{Error, Result};

use crate::{ChildGroup, ChildGroupOptions, Chunk, ChunkGroup, ChunkGroupIdx, ChunkIdx};

/// Child groups of a chunk group, grouped by the kind of resource hint and sorted by priority.
///
/// A field is `None` when no child carries the corresponding order, never `Some(vec![])`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChildrenByOrders {
  pub preload: Option<Vec<ChunkGroupIdx>>,
  pub prefetch: Option<Vec<ChunkGroupIdx>>,
}

/// The chunk graph a bundler hands over once chunks and their files are known.
///
/// Entry points keep their registration order.
#[derive(Debug, Default)]
pub struct CompilationGraph {
  entrypoints: LinkedHashMap<String, ChunkGroupIdx>,
  chunk_groups: IndexVec<ChunkGroupIdx, ChunkGroup>,
  chunks: IndexVec<ChunkIdx, Chunk>,
}

impl CompilationGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkIdx {
    self.chunks.push(chunk)
  }

  pub fn add_chunk_group(&mut self, group: ChunkGroup) -> Result<ChunkGroupIdx> {
    let referrer = group.display_name(self.chunk_groups.next_idx());
    if let Some(missing) = group.chunks.iter().find(|idx| self.chunks.get(**idx).is_none()) {
      return Err(Error::unknown_chunk(missing.index(), referrer));
    }
    Ok(self.chunk_groups.push(group))
  }

  /// Records that `parent` loads `child`. Both sides of the edge are updated.
  pub fn connect(
    &mut self,
    parent: ChunkGroupIdx,
    child: ChunkGroupIdx,
    options: ChildGroupOptions,
  ) -> Result<()> {
    self.ensure_chunk_group(parent, "a parent edge")?;
    self.ensure_chunk_group(child, "a child edge")?;
    self.chunk_groups[parent].children.push(ChildGroup {
      group: child,
      options,
    });
    let parents = &mut self.chunk_groups[child].parents;
    if !parents.contains(&parent) {
      parents.push(parent);
    }
    Ok(())
  }

  pub fn add_entrypoint(&mut self, name: impl Into<String>, group: ChunkGroupIdx) -> Result<()> {
    let name = name.into();
    self.ensure_chunk_group(group, format!("entry point \"{name}\""))?;
    if self.entrypoints.contains_key(&name) {
      return Err(Error::duplicate_entrypoint(name));
    }
    self.entrypoints.insert(name, group);
    Ok(())
  }

  fn ensure_chunk_group(&self, idx: ChunkGroupIdx, referrer: impl Into<String>) -> Result<()> {
    match self.chunk_groups.get(idx) {
      Some(_) => Ok(()),
      None => Err(Error::unknown_chunk_group(idx.index(), referrer)),
    }
  }

  pub fn entrypoint(&self, name: &str) -> Option<ChunkGroupIdx> {
    self.entrypoints.get(name).copied()
  }

  pub fn entrypoint_names(&self) -> impl Iterator<Item = &str> {
    self.entrypoints.keys().map(String::as_str)
  }

  pub fn chunk(&self, idx: ChunkIdx) -> &Chunk {
    &self.chunks[idx]
  }

  pub fn chunk_group(&self, idx: ChunkGroupIdx) -> &ChunkGroup {
    &self.chunk_groups[idx]
  }

  pub fn chunks_of(&self, group: ChunkGroupIdx) -> impl Iterator<Item = &Chunk> {
    self.chunk_groups[group].chunks.iter().map(|idx| &self.chunks[*idx])
  }

  /// Files of every chunk in the group, in chunk order, without duplicates.
  pub fn group_files(&self, group: ChunkGroupIdx) -> LinkedHashSet<&str> {
    self
      .chunks_of(group)
      .flat_map(|chunk| chunk.files.iter().map(String::as_str))
      .collect()
  }

  /// Splits the children of `group` by the hint they were requested with.
  ///
  /// Higher orders come first. Children with the same order keep the order they were connected in.
  pub fn children_by_orders(&self, group: ChunkGroupIdx) -> ChildrenByOrders {
    let children = self.chunk_groups[group].children();
    let collect = |order_of: fn(&ChildGroupOptions) -> Option<i32>| {
      let ordered = children
        .iter()
        .filter_map(|child| order_of(&child.options).map(|order| (order, child.group)))
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|(_, group)| group)
        .collect::<Vec<_>>();
      (!ordered.is_empty()).then_some(ordered)
    };
    ChildrenByOrders {
      preload: collect(|options| options.preload_order),
      prefetch: collect(|options| options.prefetch_order),
    }
  }

  pub fn preload_children(&self, group: ChunkGroupIdx) -> Option<Vec<ChunkGroupIdx>> {
    self.children_by_orders(group).preload
  }
}
