use derivative::Derivative;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct BuiltinsOptions {
  /// `false` disables the builtin
  pub entry_point_preload: bool,
}

impl Default for BuiltinsOptions {
  fn default() -> Self {
    Self {
      entry_point_preload: true,
    }
  }
}
