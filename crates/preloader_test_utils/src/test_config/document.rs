use preloader::{
  AssetTags, AttrValue, ChunksOption, HtmlDocument, HtmlPluginOptions, HtmlTag, InjectOption,
  ScriptLoading,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::impl_serde_default;

fn index_html_by_default() -> String {
  "index.html".to_string()
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentConfig {
  #[serde(default = "index_html_by_default")]
  pub output_name: String,
  #[serde(default)]
  pub public_path: Option<String>,
  #[serde(default)]
  pub head_tags: Vec<TagConfig>,
  #[serde(default)]
  pub body_tags: Vec<TagConfig>,
  #[serde(default)]
  pub options: HtmlOptionsConfig,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlOptionsConfig {
  #[serde(default)]
  pub chunks: ChunksConfig,
  #[serde(default)]
  pub inject: InjectConfig,
  #[serde(default)]
  pub script_loading: Option<String>,
  #[serde(default)]
  pub public_path: Option<String>,
}

/// `"all"` or a list of entry names.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ChunksConfig {
  All(String),
  Named(Vec<String>),
}

impl Default for ChunksConfig {
  fn default() -> Self {
    Self::All("all".to_string())
  }
}

/// `true`, `false`, `"head"`, `"body"` or any other string.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum InjectConfig {
  Bool(bool),
  Str(String),
}

impl Default for InjectConfig {
  fn default() -> Self {
    Self::Bool(true)
  }
}

/// `{ "script": "/main.js" }`, `{ "stylesheet": "/main.css" }` or a full tag.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TagConfig {
  Script { script: String },
  Stylesheet { stylesheet: String },
  Tag(RawTagConfig),
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawTagConfig {
  pub tag_name: String,
  #[serde(default)]
  pub attributes: Vec<AttributeConfig>,
  #[serde(default)]
  pub void_tag: bool,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttributeConfig {
  pub name: String,
  pub value: AttrValueConfig,
}

#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AttrValueConfig {
  Bool(bool),
  Str(String),
}

impl_serde_default!(DocumentConfig);
impl_serde_default!(HtmlOptionsConfig);

impl From<&AttrValueConfig> for AttrValue {
  fn from(value: &AttrValueConfig) -> Self {
    match value {
      AttrValueConfig::Bool(value) => AttrValue::Bool(*value),
      AttrValueConfig::Str(value) => AttrValue::Str(value.clone()),
    }
  }
}

impl TagConfig {
  pub fn to_html_tag(&self) -> HtmlTag {
    match self {
      TagConfig::Script { script } => HtmlTag::script(script.as_str()),
      TagConfig::Stylesheet { stylesheet } => HtmlTag::stylesheet(stylesheet.as_str()),
      TagConfig::Tag(raw) => raw.attributes.iter().fold(
        HtmlTag::new(raw.tag_name.clone(), raw.void_tag),
        |tag, attribute| tag.with_attr(attribute.name.clone(), &attribute.value),
      ),
    }
  }
}

impl HtmlOptionsConfig {
  pub fn html_plugin_options(&self) -> HtmlPluginOptions {
    HtmlPluginOptions {
      chunks: match &self.chunks {
        ChunksConfig::All(_) => ChunksOption::All,
        ChunksConfig::Named(names) => ChunksOption::Named(names.clone()),
      },
      inject: match &self.inject {
        InjectConfig::Bool(value) => InjectOption::from(*value),
        InjectConfig::Str(value) => InjectOption::from(value.as_str()),
      },
      script_loading: self
        .script_loading
        .as_deref()
        .map(ScriptLoading::from)
        .unwrap_or_default(),
      public_path: self.public_path.clone(),
    }
  }
}

impl DocumentConfig {
  pub fn html_document(&self) -> HtmlDocument {
    let to_tags =
      |tags: &[TagConfig]| -> Vec<HtmlTag> { tags.iter().map(TagConfig::to_html_tag).collect() };
    HtmlDocument {
      output_name: self.output_name.clone(),
      options: self.options.html_plugin_options(),
      public_path: self.public_path.clone(),
      tags: AssetTags {
        head_tags: to_tags(&self.head_tags),
        body_tags: to_tags(&self.body_tags),
      },
    }
  }
}
