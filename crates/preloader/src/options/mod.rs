use std::sync::Arc;

use derivative::Derivative;
use preloader_error::Error;

mod builtins;
pub use builtins::*;

pub type WarningHandler = Arc<dyn Fn(Error) + Send + Sync>;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct PreloaderOptions {
  #[derivative(Debug = "ignore")]
  pub on_warn: WarningHandler,
  pub builtins: BuiltinsOptions,
}

pub fn default_warning_handler() -> WarningHandler {
  Arc::new(|err| {
    eprintln!("{}", err);
  })
}

impl Default for PreloaderOptions {
  fn default() -> Self {
    Self {
      on_warn: default_warning_handler(),
      builtins: Default::default(),
    }
  }
}
