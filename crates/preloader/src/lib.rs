mod options;
mod plugin_driver;
mod preloader;
pub use {
  crate::preloader::{HtmlDocument, Preloader},
  options::{default_warning_handler, BuiltinsOptions, PreloaderOptions, WarningHandler},
  preloader_common::{
    AssetTags, AttrValue, ChildGroupOptions, Chunk, ChunkGroup, ChunkGroupIdx, ChunkIdx,
    ChunksOption, CompilationGraph, CompilationOutput, HtmlPluginOptions, HtmlTag, InjectOption,
    ScriptLoading,
  },
  preloader_core::{InjectPosition, ResolvedPreloadOptions, PRELOAD_TAG_MARKER},
  preloader_error::{Error, ErrorKind},
  preloader_plugin::HtmlPlugin,
};

pub type BuildResult<T> = preloader_error::Result<T>;
