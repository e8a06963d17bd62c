//! Navigable entries produced by the directory lister.

use std::path::{
  MAIN_SEPARATOR,
  Path,
  PathBuf,
};

/// Label of the synthetic empty-selection entry.
pub const NONE_TEXT: &str = "<none>";

#[cfg(not(windows))]
pub const DIR_MARKER: &str = "\u{276f}";
#[cfg(windows)]
pub const DIR_MARKER: &str = ">";

/// Identity of an entry within one listing.
///
/// Real entries carry their position in the filesystem read order. The
/// synthetic variants can never collide with them, whatever the directory
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryId
{
  None,
  Parent,
  Current,
  Item(usize),
}

impl EntryId
{
  pub fn is_synthetic(self) -> bool
  {
    !matches!(self, EntryId::Item(_))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry
{
  pub id:        EntryId,
  pub full_path: PathBuf,
  pub is_dir:    bool,
  pub is_none:   bool,
  pub display:   String,
}

impl Entry
{
  pub fn none() -> Self
  {
    Self {
      id:        EntryId::None,
      full_path: PathBuf::new(),
      is_dir:    false,
      is_none:   true,
      display:   NONE_TEXT.to_string(),
    }
  }

  pub fn current_dir(dir: &Path) -> Self
  {
    Self {
      id:        EntryId::Current,
      full_path: dir.to_path_buf(),
      is_dir:    true,
      is_none:   false,
      display:   format!(".{MAIN_SEPARATOR}"),
    }
  }

  pub fn parent_dir(parent: &Path) -> Self
  {
    Self {
      id:        EntryId::Parent,
      full_path: parent.to_path_buf(),
      is_dir:    true,
      is_none:   false,
      display:   format!("..{MAIN_SEPARATOR}"),
    }
  }

  pub fn directory(
    index: usize,
    full_path: PathBuf,
    name: &str,
  ) -> Self
  {
    Self {
      id: EntryId::Item(index),
      full_path,
      is_dir: true,
      is_none: false,
      display: format!("{DIR_MARKER} {name}"),
    }
  }

  pub fn file(
    index: usize,
    full_path: PathBuf,
    name: &str,
  ) -> Self
  {
    Self {
      id: EntryId::Item(index),
      full_path,
      is_dir: false,
      is_none: false,
      display: name.to_string(),
    }
  }

  /// Whether descending into this entry changes directory.
  pub fn is_enterable(&self) -> bool
  {
    self.is_dir && self.id != EntryId::Current
  }

  /// The value handed back to the caller when this entry is submitted.
  pub fn result_path(&self) -> String
  {
    if self.is_none
    {
      String::new()
    }
    else
    {
      self.full_path.to_string_lossy().into_owned()
    }
  }
}
