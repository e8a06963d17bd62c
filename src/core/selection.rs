//! Rules deciding which entries Submit accepts.

use super::entry::Entry;

/// Kind of entry the picker returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionType
{
  #[default]
  File,
  Folder,
}

/// Case-sensitive suffix match against `extensions`. An empty list accepts
/// every name.
pub fn matches_extension(
  name: &str,
  extensions: &[String],
) -> bool
{
  extensions.is_empty() || extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

pub fn is_valid_selection(
  entry: &Entry,
  selection_type: SelectionType,
  extensions: &[String],
) -> bool
{
  if entry.is_dir
  {
    selection_type == SelectionType::Folder
  }
  else if entry.is_none
  {
    true
  }
  else
  {
    selection_type == SelectionType::File
      && matches_extension(&entry.display, extensions)
  }
}
