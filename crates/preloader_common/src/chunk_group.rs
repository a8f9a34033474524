use crate::{ChunkGroupIdx, ChunkIdx};

/// Orders attached to the edge between a chunk group and one of its children.
///
/// They come from magic comments such as `/* webpackPreload: true */`, which set the order to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildGroupOptions {
  pub preload_order: Option<i32>,
  pub prefetch_order: Option<i32>,
}

impl ChildGroupOptions {
  pub fn preload(order: i32) -> Self {
    Self {
      preload_order: Some(order),
      prefetch_order: None,
    }
  }

  pub fn prefetch(order: i32) -> Self {
    Self {
      preload_order: None,
      prefetch_order: Some(order),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildGroup {
  pub group: ChunkGroupIdx,
  pub options: ChildGroupOptions,
}

#[derive(Debug, Clone, Default)]
pub struct ChunkGroup {
  pub name: Option<String>,
  pub chunks: Vec<ChunkIdx>,
  pub(crate) parents: Vec<ChunkGroupIdx>,
  pub(crate) children: Vec<ChildGroup>,
}

impl ChunkGroup {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Default::default()
    }
  }

  pub fn with_chunks(mut self, chunks: impl IntoIterator<Item = ChunkIdx>) -> Self {
    self.chunks.extend(chunks);
    self
  }

  pub fn parents(&self) -> &[ChunkGroupIdx] {
    &self.parents
  }

  pub fn children(&self) -> &[ChildGroup] {
    &self.children
  }

  pub(crate) fn display_name(&self, idx: ChunkGroupIdx) -> String {
    match &self.name {
      Some(name) => format!("chunk group \"{name}\""),
      None => format!("chunk group #{}", idx.index()),
    }
  }
}
