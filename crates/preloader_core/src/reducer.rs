use hashlink::LinkedHashMap;
use preloader_common::{ChunksOption, CompilationGraph};

/// Output file name → files of the chunk groups that load it.
pub type FileParentsMap = LinkedHashMap<String, Vec<String>>;

/// Entry name → its preloaded files, in the order the bundler prioritized them.
pub type EntryFileMap = LinkedHashMap<String, FileParentsMap>;

/// Collects the files each selected entry point wants preloaded.
///
/// A document can be generated for several entry points. Each entry has preloaded chunk groups,
/// chunk groups have chunks and chunks have files. Files are what we need, along with the files
/// of the groups that load them so the links can be placed after their scripts later.
pub fn reduce(graph: &CompilationGraph, chunks: &ChunksOption) -> EntryFileMap {
  let entry_names = match chunks {
    ChunksOption::All => graph.entrypoint_names().map(ToString::to_string).collect(),
    ChunksOption::Named(names) => names.clone(),
  };
  tracing::trace!("Selected entries: {:?}", entry_names);

  let mut entry_file_map = EntryFileMap::default();

  for entry_name in entry_names {
    let Some(entry) = graph.entrypoint(&entry_name) else {
      tracing::debug!("Entry {entry_name:?} is not part of the compilation");
      continue;
    };
    let Some(preloaded) = graph.preload_children(entry) else {
      continue;
    };

    let mut file_parents = FileParentsMap::default();
    // Font files never show up in `preloaded`.
    for group in preloaded {
      let parent_files = graph
        .chunk_group(group)
        .parents()
        .iter()
        .flat_map(|parent| graph.group_files(*parent))
        .map(ToString::to_string)
        .collect::<Vec<_>>();
      for chunk in graph.chunks_of(group) {
        for file in &chunk.files {
          tracing::trace!("Preload {file:?} of entry {entry_name:?} after {parent_files:?}");
          file_parents.replace(file.clone(), parent_files.clone());
        }
      }
    }
    entry_file_map.replace(entry_name, file_parents);
  }

  entry_file_map
}
