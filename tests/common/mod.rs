#![allow(dead_code)]

use std::{
  collections::{
    HashMap,
    HashSet,
  },
  ffi::OsString,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use treepick::{
  PickerOptions,
  core::FileSystem,
};

/// In-memory filesystem: each directory maps to its children in read order.
#[derive(Default)]
pub struct MemFs
{
  dirs:    HashMap<PathBuf, Vec<(String, bool)>>,
  failing: HashSet<PathBuf>,
}

impl MemFs
{
  pub fn new() -> Self
  {
    Self::default()
  }

  /// Add a directory. Children flagged `true` are directories; they are
  /// registered as empty directories unless added explicitly.
  pub fn dir(
    mut self,
    path: &str,
    children: &[(&str, bool)],
  ) -> Self
  {
    let dir = PathBuf::from(path);
    for (name, is_dir) in children
    {
      if *is_dir
      {
        self.dirs.entry(dir.join(name)).or_default();
      }
    }
    self.dirs.insert(
      dir,
      children.iter().map(|(n, d)| (n.to_string(), *d)).collect(),
    );
    self
  }

  /// Make reads of `path` fail with `PermissionDenied`.
  pub fn failing(
    mut self,
    path: &str,
  ) -> Self
  {
    self.failing.insert(PathBuf::from(path));
    self
  }
}

impl FileSystem for MemFs
{
  fn list_children(
    &self,
    dir: &Path,
  ) -> io::Result<Vec<OsString>>
  {
    if self.failing.contains(dir)
    {
      return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    }
    self
      .dirs
      .get(dir)
      .map(|c| c.iter().map(|(n, _)| OsString::from(n)).collect())
      .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such dir"))
  }

  fn is_directory(
    &self,
    path: &Path,
  ) -> io::Result<bool>
  {
    Ok(self.dirs.contains_key(path))
  }
}

pub fn options_at(dir: &str) -> PickerOptions
{
  PickerOptions::new(Path::new(dir)).expect("absolute dir")
}

pub fn displays<'a>(entries: impl Iterator<Item = &'a treepick::core::Entry>) -> Vec<String>
{
  entries.map(|e| e.display.clone()).collect()
}
