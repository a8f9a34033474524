use std::path::{Path, PathBuf};

use preloader::{BuildResult, HtmlDocument, HtmlTag, Preloader};
use preloader_test_utils::tester::Tester;

pub struct CompiledFixture {
  pub tester: Tester,
  pub output: BuildResult<HtmlDocument>,
  pub dir_name: String,
  pub fixture_path: PathBuf,
}

fn section(title: &str, tags: &[HtmlTag]) -> Vec<String> {
  if tags.is_empty() {
    return vec![];
  }
  std::iter::once(format!("---------- {title} ----------"))
    .chain(tags.iter().map(ToString::to_string))
    .collect()
}

impl CompiledFixture {
  pub fn output_friendly_to_snapshot(&self) -> String {
    let document = self.output.as_ref().unwrap();
    section("HEAD", &document.tags.head_tags)
      .into_iter()
      .chain(section("BODY", &document.tags.body_tags))
      .chain(if self.tester.warnings.lock().unwrap().is_empty() {
        vec![]
      } else {
        let mut warnings = self.tester.warnings.lock().unwrap();
        warnings.sort();
        vec![
          "---------- WARNINGS ----------".to_string(),
          warnings
            .iter()
            .map(|w| format!("{}: {}", w.kind.code(), w.kind))
            .collect::<Vec<_>>()
            .join("\n"),
        ]
      })
      .collect::<Vec<_>>()
      .join("\n")
  }
}

pub fn compile_fixture(test_config_path: &Path) -> CompiledFixture {
  let fixture_path = test_config_path.parent().unwrap();

  let tester = Tester::from_config_path(test_config_path);

  let preloader = Preloader::new(tester.preloader_options());

  let output = tester.compilation().and_then(|(compilation, output)| {
    let mut document = tester.html_document();
    preloader
      .alter_asset_tag_groups(&compilation, &output, &mut document)
      .map(|_| document)
  });
  let fixture_name = fixture_path
    .file_name()
    .unwrap()
    .to_string_lossy()
    .to_string();

  CompiledFixture {
    tester,
    output,
    dir_name: fixture_name,
    fixture_path: fixture_path.to_path_buf(),
  }
}

pub fn run_test(test_config_path: &Path) {
  // compile the fixture folder
  let compiled_fx = compile_fixture(test_config_path);

  // If the test config has an expected error, assert that the error matches
  if let Some(expected_error) = &compiled_fx.tester.config.expected_error {
    let error = compiled_fx
      .output
      .as_ref()
      .expect_err("Expected error but got success");
    assert_eq!(error.kind.code(), expected_error.code, "{}", compiled_fx.dir_name);
    assert_eq!(error.to_string(), expected_error.message);
    return;
  }

  // Otherwise, assert that the output matches the snapshot

  // Configure insta to use the fixture folder as the snapshot path
  let mut settings = insta::Settings::clone_current();
  settings.set_snapshot_path(&compiled_fx.fixture_path);
  settings.set_prepend_module_to_snapshot(false);
  settings.set_input_file(test_config_path);
  settings.bind(|| {
    insta::assert_snapshot!("output", compiled_fx.output_friendly_to_snapshot());
  });
}
