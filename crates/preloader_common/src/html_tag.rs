use std::fmt::Display;

use hashlink::LinkedHashMap;

use crate::StaticStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
  Str(String),
  /// `true` renders the bare attribute name, `false` drops the attribute.
  Bool(bool),
}

impl AttrValue {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      AttrValue::Str(value) => Some(value),
      AttrValue::Bool(_) => None,
    }
  }
}

impl From<&str> for AttrValue {
  fn from(value: &str) -> Self {
    Self::Str(value.to_string())
  }
}

impl From<String> for AttrValue {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}

impl From<bool> for AttrValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMeta {
  /// Name of the plugin that created the tag, if any.
  pub plugin: Option<StaticStr>,
}

/// A tag the HTML generator is going to print into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
  pub tag_name: StaticStr,
  pub attributes: LinkedHashMap<StaticStr, AttrValue>,
  pub void_tag: bool,
  pub inner_html: Option<String>,
  pub meta: TagMeta,
}

impl HtmlTag {
  pub fn new(tag_name: impl Into<StaticStr>, void_tag: bool) -> Self {
    Self {
      tag_name: tag_name.into(),
      attributes: Default::default(),
      void_tag,
      inner_html: None,
      meta: Default::default(),
    }
  }

  pub fn script(src: impl Into<String>) -> Self {
    Self::new("script", false)
      .with_attr("defer", true)
      .with_attr("src", src.into())
  }

  pub fn stylesheet(href: impl Into<String>) -> Self {
    Self::new("link", true)
      .with_attr("href", href.into())
      .with_attr("rel", "stylesheet")
  }

  pub fn with_attr(mut self, name: impl Into<StaticStr>, value: impl Into<AttrValue>) -> Self {
    self.attributes.insert(name.into(), value.into());
    self
  }

  pub fn with_plugin(mut self, plugin: impl Into<StaticStr>) -> Self {
    self.meta.plugin = Some(plugin.into());
    self
  }

  pub fn attr(&self, name: &str) -> Option<&AttrValue> {
    self.attributes.get(name)
  }

  /// The attribute value when it's a string.
  pub fn str_attr(&self, name: &str) -> Option<&str> {
    self.attr(name).and_then(AttrValue::as_str)
  }

  pub fn is_script(&self) -> bool {
    self.tag_name == "script"
  }
}

impl Display for HtmlTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "<{}", self.tag_name)?;
    for (name, value) in &self.attributes {
      match value {
        AttrValue::Str(value) => write!(f, " {name}=\"{value}\"")?,
        AttrValue::Bool(true) => write!(f, " {name}")?,
        AttrValue::Bool(false) => {}
      }
    }
    write!(f, ">")?;
    if !self.void_tag {
      write!(
        f,
        "{}</{}>",
        self.inner_html.as_deref().unwrap_or_default(),
        self.tag_name
      )?;
    }
    Ok(())
  }
}

/// The tags of one document, split by the region they are printed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTags {
  pub head_tags: Vec<HtmlTag>,
  pub body_tags: Vec<HtmlTag>,
}
