use preloader_common::{AssetTags, HtmlTag};
use preloader_error::Error;

use crate::{EntryTagMap, InjectPosition};

/// Index of the last `<script>` whose `src` contains `file`.
///
/// This is a substring check. `a.js` also matches `/static/data.js`.
fn last_script_index(tags: &[HtmlTag], file: &str) -> Option<usize> {
  tags.iter().rposition(|tag| {
    tag.is_script() && tag.str_attr("src").map_or(false, |src| src.contains(file))
  })
}

/// Inserts every preload link right after the last script tag of its parent files.
///
/// Related links have to follow their parent script tag so the browser discovers them with the
/// right priority (<https://web.dev/priority-hints/#using-preload-after-chrome-95>).
///
/// Links are always placed among `head_tags`, whatever `position` resolved to. A link whose
/// parents have no script tag is dropped and reported through `on_warn`.
pub fn place(
  entry_tag_map: EntryTagMap,
  tags: &mut AssetTags,
  position: InjectPosition,
  mut on_warn: impl FnMut(Error),
) {
  if position.is_suppressed() {
    return;
  }

  for (entry_name, links) in entry_tag_map {
    for link in links {
      let insert_index = link
        .parent_files
        .iter()
        .filter_map(|parent_file| last_script_index(&tags.head_tags, parent_file))
        .max();
      let Some(insert_index) = insert_index else {
        on_warn(Error::unresolved_placement(&entry_name, &link.parent_files));
        continue;
      };
      tracing::trace!(
        "Insert {} after #{insert_index} for entry {entry_name:?}",
        link.tag
      );
      tags.head_tags.insert(insert_index + 1, link.tag);
    }
  }
}
