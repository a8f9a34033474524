use preloader_common::{CompilationGraph, CompilationOutput};
use preloader_error::Error;

/// What a hook can see of the compilation a document is generated for.
#[derive(Debug)]
pub struct Context<'a> {
  pub compilation: &'a CompilationGraph,
  pub output: &'a CompilationOutput,
  warnings: Vec<Error>,
}

impl<'a> Context<'a> {
  pub fn new(compilation: &'a CompilationGraph, output: &'a CompilationOutput) -> Self {
    Self {
      compilation,
      output,
      warnings: vec![],
    }
  }

  pub fn warn(&mut self, warning: Error) {
    self.warnings.push(warning);
  }

  pub fn take_warnings(&mut self) -> Vec<Error> {
    std::mem::take(&mut self.warnings)
  }
}
