use hashlink::LinkedHashSet;

/// A unit of output. Only the emitted file names matter here.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
  pub name: Option<String>,
  /// Emitted files in emission order.
  pub files: LinkedHashSet<String>,
}

impl Chunk {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      files: Default::default(),
    }
  }

  pub fn with_files<I, S>(mut self, files: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.files.extend(files.into_iter().map(Into::into));
    self
  }
}
