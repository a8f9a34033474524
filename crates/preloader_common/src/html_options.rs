/// Which entry points a document is generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChunksOption {
  #[default]
  All,
  Named(Vec<String>),
}

impl<S: Into<String>> FromIterator<S> for ChunksOption {
  fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
    Self::Named(iter.into_iter().map(Into::into).collect())
  }
}

/// The `inject` option of the HTML generator.
///
/// Unrecognized strings are kept in `Other` and behave like the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOption {
  Bool(bool),
  Head,
  Body,
  Other(String),
}

impl Default for InjectOption {
  fn default() -> Self {
    Self::Bool(true)
  }
}

impl InjectOption {
  pub fn is_disabled(&self) -> bool {
    matches!(self, InjectOption::Bool(false))
  }
}

impl From<bool> for InjectOption {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<&str> for InjectOption {
  fn from(value: &str) -> Self {
    match value {
      "head" => Self::Head,
      "body" => Self::Body,
      _ => Self::Other(value.to_string()),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptLoading {
  Blocking,
  #[default]
  Defer,
  Module,
  SystemjsModule,
}

impl ScriptLoading {
  pub fn is_blocking(self) -> bool {
    self == ScriptLoading::Blocking
  }
}

impl From<&str> for ScriptLoading {
  /// Anything that's not a known mode loads like `defer`.
  fn from(value: &str) -> Self {
    match value {
      "blocking" => Self::Blocking,
      "module" => Self::Module,
      "systemjs-module" => Self::SystemjsModule,
      _ => Self::Defer,
    }
  }
}

/// Options of the HTML generator that this crate family reads.
#[derive(Debug, Clone, Default)]
pub struct HtmlPluginOptions {
  pub chunks: ChunksOption,
  pub inject: InjectOption,
  pub script_loading: ScriptLoading,
  /// `None` and `"auto"` defer to the compilation's public path.
  pub public_path: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_values_fall_back_to_defaults() {
    assert_eq!(InjectOption::from("head"), InjectOption::Head);
    assert_eq!(
      InjectOption::from("footer"),
      InjectOption::Other("footer".to_string())
    );
    assert!(InjectOption::from(false).is_disabled());
    assert!(!InjectOption::default().is_disabled());
    assert_eq!(ScriptLoading::from("blocking"), ScriptLoading::Blocking);
    assert_eq!(ScriptLoading::from("async"), ScriptLoading::Defer);
  }

  #[test]
  fn chunks_from_names() {
    let chunks = ["main", "admin"].into_iter().collect::<ChunksOption>();
    assert_eq!(
      chunks,
      ChunksOption::Named(vec!["main".to_string(), "admin".to_string()])
    );
    assert_eq!(ChunksOption::default(), ChunksOption::All);
  }
}
