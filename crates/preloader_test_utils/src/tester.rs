use std::{
  path::Path,
  sync::{Arc, Mutex},
};

use preloader::{
  BuildResult, CompilationGraph, CompilationOutput, Error as BuildError, HtmlDocument,
  PreloaderOptions,
};

use crate::test_config::TestConfig;

pub struct Tester {
  pub config: TestConfig,
  pub warnings: Arc<Mutex<Vec<BuildError>>>,
}

impl Tester {
  pub fn from_config_path(filepath: &Path) -> Self {
    let test_config = TestConfig::from_config_path(filepath);
    Self {
      config: test_config,
      warnings: Default::default(),
    }
  }

  pub fn preloader_options(&self) -> PreloaderOptions {
    let warning_collector = self.warnings.clone();
    PreloaderOptions {
      on_warn: Arc::new(move |err| {
        warning_collector.lock().unwrap().push(err);
      }),
      ..Default::default()
    }
  }

  pub fn compilation(&self) -> BuildResult<(CompilationGraph, CompilationOutput)> {
    self.config.graph.compilation()
  }

  pub fn html_document(&self) -> HtmlDocument {
    self.config.document.html_document()
  }
}
