use preloader_common::{AssetTags, CompilationGraph, CompilationOutput, HtmlPluginOptions};
use preloader_plugin::{AlterAssetTagGroupsArgs, Context, HtmlPlugin};
use tracing::instrument;

use crate::{plugin_driver::HtmlPluginDriver, BuildResult, PreloaderOptions, WarningHandler};

/// A document the HTML generator is about to print.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
  pub output_name: String,
  pub options: HtmlPluginOptions,
  /// The public path the HTML generator computed for this document, if it did.
  pub public_path: Option<String>,
  pub tags: AssetTags,
}

impl HtmlDocument {
  pub fn new(output_name: impl Into<String>, options: HtmlPluginOptions, tags: AssetTags) -> Self {
    Self {
      output_name: output_name.into(),
      options,
      public_path: None,
      tags,
    }
  }
}

pub struct Preloader {
  plugin_driver: HtmlPluginDriver,
  on_warn: WarningHandler,
}

impl Preloader {
  pub fn new(options: PreloaderOptions) -> Self {
    Self::with_plugins(options, vec![])
  }

  pub fn with_plugins(options: PreloaderOptions, mut plugins: Vec<Box<dyn HtmlPlugin>>) -> Self {
    preloader_tracing::enable_tracing_on_demand();

    let mut builtin_post_plugins = vec![];

    if options.builtins.entry_point_preload {
      builtin_post_plugins
        .push(preloader_plugin_entry_point::EntryPointPreloadPlugin::new_boxed());
    }

    plugins.extend(builtin_post_plugins);

    Self {
      plugin_driver: HtmlPluginDriver::new(plugins),
      on_warn: options.on_warn,
    }
  }

  /// Lets every plugin rearrange the tags of `document`.
  ///
  /// Warnings go to `on_warn` even when a plugin fails afterwards.
  #[instrument(skip_all)]
  pub fn alter_asset_tag_groups(
    &self,
    compilation: &CompilationGraph,
    output: &CompilationOutput,
    document: &mut HtmlDocument,
  ) -> BuildResult<()> {
    tracing::debug!("{:#?}", document.options);
    let mut ctx = Context::new(compilation, output);
    let result = self.plugin_driver.alter_asset_tag_groups(
      &mut ctx,
      AlterAssetTagGroupsArgs {
        tags: &mut document.tags,
        options: &document.options,
        public_path: document.public_path.as_deref(),
        output_name: &document.output_name,
      },
    );
    ctx
      .take_warnings()
      .into_iter()
      .for_each(|warning| (self.on_warn)(warning));
    result
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use preloader_common::{ChildGroupOptions, Chunk, ChunkGroup, HtmlTag};
  use preloader_error::Error;
  use preloader_plugin::{HookOutput, PluginName};

  use super::*;
  use crate::BuiltinsOptions;

  #[derive(Debug)]
  struct FailingPlugin;

  impl HtmlPlugin for FailingPlugin {
    fn name(&self) -> PluginName {
      std::borrow::Cow::Borrowed("failing")
    }

    fn alter_asset_tag_groups(
      &self,
      _ctx: &mut Context,
      _args: &mut AlterAssetTagGroupsArgs,
    ) -> HookOutput {
      Err(Error::panic("broken host graph".to_string()))
    }
  }

  #[derive(Debug)]
  struct AppendScriptPlugin;

  impl HtmlPlugin for AppendScriptPlugin {
    fn name(&self) -> PluginName {
      std::borrow::Cow::Borrowed("append-script")
    }

    fn alter_asset_tag_groups(
      &self,
      _ctx: &mut Context,
      args: &mut AlterAssetTagGroupsArgs,
    ) -> HookOutput {
      args.tags.head_tags.push(HtmlTag::script("/late.js"));
      Ok(())
    }
  }

  fn compilation() -> CompilationGraph {
    let mut graph = CompilationGraph::new();
    let main_chunk = graph.add_chunk(Chunk::new("main").with_files(["main.js"]));
    let late_chunk = graph.add_chunk(Chunk::new("late").with_files(["late.js"]));
    let lazy_chunk = graph.add_chunk(Chunk::new("lazy").with_files(["lazy.css"]));
    let main = graph
      .add_chunk_group(ChunkGroup::new("main").with_chunks([main_chunk, late_chunk]))
      .unwrap();
    let lazy = graph
      .add_chunk_group(ChunkGroup::new("lazy").with_chunks([lazy_chunk]))
      .unwrap();
    graph.add_entrypoint("main", main).unwrap();
    graph.connect(main, lazy, ChildGroupOptions::preload(0)).unwrap();
    graph
  }

  fn collecting_options(builtins: BuiltinsOptions) -> (PreloaderOptions, Arc<Mutex<Vec<Error>>>) {
    let warnings: Arc<Mutex<Vec<Error>>> = Default::default();
    let collector = warnings.clone();
    let options = PreloaderOptions {
      on_warn: Arc::new(move |err| collector.lock().unwrap().push(err)),
      builtins,
    };
    (options, warnings)
  }

  fn document() -> HtmlDocument {
    HtmlDocument::new(
      "index.html",
      HtmlPluginOptions::default(),
      AssetTags {
        head_tags: vec![HtmlTag::script("/main.js")],
        body_tags: vec![],
      },
    )
  }

  #[test]
  fn user_plugins_run_before_builtins() {
    let (options, warnings) = collecting_options(Default::default());
    let preloader = Preloader::with_plugins(options, vec![Box::new(AppendScriptPlugin)]);
    let mut document = document();
    preloader
      .alter_asset_tag_groups(&compilation(), &CompilationOutput::default(), &mut document)
      .unwrap();
    // `late.js` is a parent file too and was appended before the preload plugin ran.
    assert_eq!(
      document
        .tags
        .head_tags
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>(),
      vec![
        r#"<script defer src="/main.js"></script>"#,
        r#"<script defer src="/late.js"></script>"#,
        r#"<link rel="preload" href="/lazy.css" as="style">"#,
      ]
    );
    assert!(warnings.lock().unwrap().is_empty());
  }

  #[test]
  fn builtin_can_be_disabled() {
    let (options, _) = collecting_options(BuiltinsOptions {
      entry_point_preload: false,
    });
    let preloader = Preloader::new(options);
    let mut document = document();
    preloader
      .alter_asset_tag_groups(&compilation(), &CompilationOutput::default(), &mut document)
      .unwrap();
    assert_eq!(document.tags.head_tags.len(), 1);
  }

  #[test]
  fn plugin_errors_abort_with_context() {
    let (options, _) = collecting_options(Default::default());
    let preloader = Preloader::with_plugins(options, vec![Box::new(FailingPlugin)]);
    let mut document = document();
    let err = preloader
      .alter_asset_tag_groups(&compilation(), &CompilationOutput::default(), &mut document)
      .unwrap_err();
    assert_eq!(err.kind.code(), "PANIC");
    assert!(err.to_string().contains(r#"plugin "failing" failed"#));
    assert!(err.to_string().ends_with("broken host graph"));
    // The builtin never ran.
    assert_eq!(document.tags.head_tags.len(), 1);
  }

  #[test]
  fn warnings_reach_the_handler() {
    let (options, warnings) = collecting_options(Default::default());
    let preloader = Preloader::new(options);
    let mut document =
      HtmlDocument::new("index.html", HtmlPluginOptions::default(), Default::default());
    preloader
      .alter_asset_tag_groups(&compilation(), &CompilationOutput::default(), &mut document)
      .unwrap();
    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
      warnings[0].to_string(),
      "cannot find entrypoints's script tags for entry: main, files: main.js,late.js"
    );
  }
}
