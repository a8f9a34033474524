use preloader_common::{AssetTags, HtmlPluginOptions};

#[derive(Debug)]
pub struct AlterAssetTagGroupsArgs<'a> {
  pub tags: &'a mut AssetTags,
  pub options: &'a HtmlPluginOptions,
  /// The public path the HTML generator already computed for this document, if any.
  pub public_path: Option<&'a str>,
  /// File name of the document being generated.
  pub output_name: &'a str,
}
