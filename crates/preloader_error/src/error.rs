use std::fmt::Display;

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl PartialOrd for Error {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Error {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.kind.to_string().cmp(&other.kind.to_string())
  }
}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  // --- Placement

  pub fn unresolved_placement(entry: impl Into<String>, parent_files: &[String]) -> Self {
    Self::with_kind(ErrorKind::UnresolvedPlacement {
      entry: entry.into(),
      parent_files: parent_files.to_vec(),
    })
  }

  // --- Compilation graph contract

  pub fn unknown_chunk_group(index: usize, referrer: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::UnknownChunkGroup {
      index,
      referrer: referrer.into(),
    })
  }

  pub fn unknown_chunk(index: usize, referrer: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::UnknownChunk {
      index,
      referrer: referrer.into(),
    })
  }

  pub fn duplicate_entrypoint(name: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::DuplicateEntrypoint { name: name.into() })
  }

  // --- Preloader specific

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
