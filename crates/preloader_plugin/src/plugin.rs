use std::{borrow::Cow, fmt::Debug};

use crate::{AlterAssetTagGroupsArgs, Context};

pub type HookOutput = preloader_error::Result<()>;
pub type PluginName<'a> = Cow<'a, str>;

pub trait HtmlPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  /// Called once per document, after the generator grouped its tags into head and body.
  fn alter_asset_tag_groups(
    &self,
    _ctx: &mut Context,
    _args: &mut AlterAssetTagGroupsArgs,
  ) -> HookOutput {
    Ok(())
  }
}
