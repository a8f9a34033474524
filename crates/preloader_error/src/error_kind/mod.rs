use std::fmt::Display;

use crate::utils::format_quoted_strings;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  // --- Placement
  /// None of the parent files of a preload link has a script tag in the document.
  ///
  /// This is reported as a warning. The link is dropped and the build goes on.
  UnresolvedPlacement {
    entry: String,
    parent_files: Vec<String>,
  },

  // --- Compilation graph contract
  UnknownChunkGroup {
    index: usize,
    referrer: String,
  },
  UnknownChunk {
    index: usize,
    referrer: String,
  },
  DuplicateEntrypoint {
    name: String,
  },

  // --- Preloader specific
  /// This error means that preloader panics because unrecoverable error happens.
  ///
  /// It mirrors a plain error thrown by the host build pipeline.
  /// For such an error, you can use `Error::from(anyhow::format_err!("Errored"))`.
  Panic {
    source: anyhow::Error,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Placement
      // The wording matches what html-webpack-plugin users already grep for.
      ErrorKind::UnresolvedPlacement { entry, parent_files } => write!(
        f,
        "cannot find entrypoints's script tags for entry: {entry}, files: {}",
        parent_files.join(",")
      ),
      // Compilation graph contract
      ErrorKind::UnknownChunkGroup { index, referrer } => write!(
        f,
        "Chunk group #{index} referenced by {referrer} does not exist in the compilation graph."
      ),
      ErrorKind::UnknownChunk { index, referrer } => write!(
        f,
        "Chunk #{index} referenced by {referrer} does not exist in the compilation graph."
      ),
      ErrorKind::DuplicateEntrypoint { name } => write!(
        f,
        "Entry point {} is registered more than once.",
        format_quoted_strings(&[name])
      ),
      // Preloader specific
      ErrorKind::Panic { source } => source.fmt(f),
    }
  }
}

impl ErrorKind {
  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnresolvedPlacement { .. } => error_code::UNRESOLVED_PLACEMENT,
      ErrorKind::UnknownChunkGroup { .. } => error_code::UNKNOWN_CHUNK_GROUP,
      ErrorKind::UnknownChunk { .. } => error_code::UNKNOWN_CHUNK,
      ErrorKind::DuplicateEntrypoint { .. } => error_code::DUPLICATE_ENTRYPOINT,
      ErrorKind::Panic { .. } => error_code::PANIC,
    }
  }

  pub fn is_warning(&self) -> bool {
    matches!(self, ErrorKind::UnresolvedPlacement { .. })
  }
}
