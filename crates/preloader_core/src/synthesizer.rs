use hashlink::LinkedHashMap;
use preloader_common::HtmlTag;

use crate::EntryFileMap;

/// Marks the tags created by the preload pipeline in `HtmlTag::meta`.
pub const PRELOAD_TAG_MARKER: &str = "html-webpack-inject-preload";

/// Value of the `as` attribute of a preload link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
  Script,
  Style,
  Font,
  Image,
}

const FONT_EXTENSIONS: [&str; 4] = [".woff2", ".woff", ".ttf", ".otf"];
const IMAGE_EXTENSIONS: [&str; 4] = [".gif", ".jpeg", ".png", ".svg"];

impl ResourceType {
  /// Classifies a file by its suffix. The match is case-sensitive.
  pub fn from_file_name(file_name: &str) -> Option<Self> {
    if file_name.ends_with(".js") {
      Some(Self::Script)
    } else if file_name.ends_with(".css") {
      Some(Self::Style)
    } else if FONT_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
      Some(Self::Font)
    } else if IMAGE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
      Some(Self::Image)
    } else {
      None
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      ResourceType::Script => "script",
      ResourceType::Style => "style",
      ResourceType::Font => "font",
      ResourceType::Image => "image",
    }
  }
}

/// A preload link and the files whose script tags it has to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadLink {
  pub tag: HtmlTag,
  pub parent_files: Vec<String>,
}

pub type EntryTagMap = LinkedHashMap<String, Vec<PreloadLink>>;

pub fn synthesize(
  entry_file_map: &EntryFileMap,
  public_path: &str,
  cross_origin_loading: Option<&str>,
) -> EntryTagMap {
  entry_file_map
    .iter()
    .map(|(entry_name, file_parents)| {
      let links = file_parents
        .iter()
        .map(|(file_name, parent_files)| PreloadLink {
          tag: preload_tag(file_name, public_path, cross_origin_loading),
          parent_files: parent_files.clone(),
        })
        .collect();
      (entry_name.clone(), links)
    })
    .collect()
}

pub fn preload_tag(
  file_name: &str,
  public_path: &str,
  cross_origin_loading: Option<&str>,
) -> HtmlTag {
  let resource_type = ResourceType::from_file_name(file_name);
  // Fonts are always fetched in anonymous mode, so the preload has to match or it's wasted.
  let cross_origin = match resource_type {
    Some(ResourceType::Font) => Some("anonymous"),
    _ => cross_origin_loading.filter(|value| !value.is_empty()),
  };

  let mut tag = HtmlTag::new("link", true)
    .with_attr("rel", "preload")
    .with_attr("href", format!("{public_path}{file_name}"))
    .with_plugin(PRELOAD_TAG_MARKER);
  if let Some(resource_type) = resource_type {
    tag = tag.with_attr("as", resource_type.as_str());
  }
  if let Some(cross_origin) = cross_origin {
    tag = tag.with_attr("crossorigin", cross_origin);
  }
  tag
}
