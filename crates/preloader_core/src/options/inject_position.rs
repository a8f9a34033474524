use preloader_common::{InjectOption, ScriptLoading};

/// Where the HTML generator puts its tags, derived from `inject` and `scriptLoading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectPosition {
  Head,
  Body,
  /// `inject: false`. Nothing is inserted.
  Suppressed,
}

impl InjectPosition {
  pub fn resolve(inject: &InjectOption, script_loading: ScriptLoading) -> Self {
    match inject {
      InjectOption::Bool(false) => Self::Suppressed,
      InjectOption::Body => Self::Body,
      InjectOption::Head => Self::Head,
      InjectOption::Bool(true) if script_loading.is_blocking() => Self::Body,
      InjectOption::Bool(true) | InjectOption::Other(_) => Self::Head,
    }
  }

  pub fn is_suppressed(self) -> bool {
    self == Self::Suppressed
  }
}
