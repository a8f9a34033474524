use preloader_core::{EntryPointPreloader, ResolvedPreloadOptions};
use preloader_plugin::{AlterAssetTagGroupsArgs, Context, HookOutput, HtmlPlugin, PluginName};

/// Preloads the chunks an entry point asked for with `webpackPreload`-style hints.
#[derive(Debug, Default)]
pub struct EntryPointPreloadPlugin {}

impl EntryPointPreloadPlugin {
  pub fn new_boxed() -> Box<dyn HtmlPlugin> {
    Box::new(Self {})
  }
}

impl HtmlPlugin for EntryPointPreloadPlugin {
  fn name(&self) -> PluginName {
    std::borrow::Cow::Borrowed("builtin:entry-point-preload")
  }

  fn alter_asset_tag_groups(
    &self,
    ctx: &mut Context,
    args: &mut AlterAssetTagGroupsArgs,
  ) -> HookOutput {
    if args.options.inject.is_disabled() {
      return Ok(());
    }

    let options = ResolvedPreloadOptions::resolve(args.options, args.public_path, ctx.output);
    tracing::trace!("Preloading entry points of {}", args.output_name);
    let compilation = ctx.compilation;
    EntryPointPreloader::new(options).run(compilation, args.tags, |warning| ctx.warn(warning));
    Ok(())
  }
}
