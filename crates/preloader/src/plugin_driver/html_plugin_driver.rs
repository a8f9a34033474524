use preloader_plugin::{AlterAssetTagGroupsArgs, Context, HtmlPlugin};

use crate::BuildResult;

#[derive(Debug, Default)]
pub(crate) struct HtmlPluginDriver {
  pub plugins: Vec<Box<dyn HtmlPlugin>>,
}

impl HtmlPluginDriver {
  pub(crate) fn new(plugins: Vec<Box<dyn HtmlPlugin>>) -> Self {
    Self { plugins }
  }

  /// Runs every plugin in order. The first failing plugin stops the document.
  pub(crate) fn alter_asset_tag_groups(
    &self,
    ctx: &mut Context,
    mut args: AlterAssetTagGroupsArgs<'_>,
  ) -> BuildResult<()> {
    for plugin in &self.plugins {
      plugin
        .alter_asset_tag_groups(ctx, &mut args)
        .map_err(|err| {
          err.context(format!(
            "plugin \"{}\" failed in alterAssetTagGroups for {}",
            plugin.name(),
            args.output_name
          ))
        })?;
    }
    Ok(())
  }
}
