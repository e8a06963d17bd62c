//! Navigation state of one picker session.
//!
//! [`NavState`] is an immutable snapshot: every command in [`nav`] returns a
//! new snapshot and leaves the old one untouched, so a failed directory read
//! never leaves the picker half updated. Listings are shared between
//! snapshots through an `Rc`, which keeps cursor moves cheap.

pub mod nav;
pub mod options;

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
  rc::Rc,
};

pub use options::PickerOptions;

use crate::core::{
  Entry,
  EntryId,
  FileSystem,
  list_directory,
  shown_indices,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status
{
  Active,
  Answered,
}

/// Collaborators a command needs besides the current snapshot.
#[derive(Clone, Copy)]
pub struct NavEnv<'a>
{
  pub fs:      &'a dyn FileSystem,
  pub options: &'a PickerOptions,
}

#[derive(Debug, Clone)]
pub struct NavState
{
  pub(crate) current_dir:       PathBuf,
  pub(crate) contents:          Rc<[Entry]>,
  // Positions into `contents`; the shown list is a view, never a copy.
  pub(crate) shown:             Vec<usize>,
  pub(crate) selected:          Option<EntryId>,
  pub(crate) history:           Vec<PathBuf>,
  pub(crate) invalid_selection: bool,
  pub(crate) status:            Status,
}

impl NavState
{
  /// Open the picker on `env.options.path`.
  pub fn open(env: NavEnv<'_>) -> io::Result<Self>
  {
    Self::load(env, env.options.path.clone(), Vec::new())
  }

  /// Build a fresh snapshot for `dir`, with the first shown entry selected.
  pub(crate) fn load(
    env: NavEnv<'_>,
    dir: PathBuf,
    history: Vec<PathBuf>,
  ) -> io::Result<Self>
  {
    let contents: Rc<[Entry]> =
      list_directory(env.fs, &dir, env.options.allow_none_option)?.into();
    let shown = shown_indices(&contents, &env.options.extension_policy());
    let selected = shown.first().map(|&i| contents[i].id);
    Ok(Self {
      current_dir: dir,
      contents,
      shown,
      selected,
      history,
      invalid_selection: false,
      status: Status::Active,
    })
  }

  pub fn current_dir(&self) -> &Path
  {
    &self.current_dir
  }

  /// The full listing, synthetic entries included.
  pub fn contents(&self) -> &[Entry]
  {
    &self.contents
  }

  pub fn shown_len(&self) -> usize
  {
    self.shown.len()
  }

  pub fn shown_entries(&self) -> impl Iterator<Item = &Entry> + '_
  {
    self.shown.iter().map(|&i| &self.contents[i])
  }

  pub fn shown_entry(
    &self,
    pos: usize,
  ) -> Option<&Entry>
  {
    self.shown.get(pos).map(|&i| &self.contents[i])
  }

  /// Position of the selected entry within the shown list.
  pub fn selected_index(&self) -> Option<usize>
  {
    let id = self.selected?;
    self.shown_entries().position(|e| e.id == id)
  }

  pub fn selected_entry(&self) -> Option<&Entry>
  {
    self.selected_index().and_then(|pos| self.shown_entry(pos))
  }

  pub fn history(&self) -> &[PathBuf]
  {
    &self.history
  }

  pub fn invalid_selection(&self) -> bool
  {
    self.invalid_selection
  }

  pub fn status(&self) -> Status
  {
    self.status
  }

  pub fn is_answered(&self) -> bool
  {
    self.status == Status::Answered
  }

  /// Path delivered to the caller, available once answered.
  pub fn answer(&self) -> Option<String>
  {
    if !self.is_answered()
    {
      return None;
    }
    self.selected_entry().map(Entry::result_path)
  }
}
