use std::{
  io,
  path::Path,
};

use super::{
  entry::Entry,
  fs::{
    FileSystem,
    parent_of,
  },
};
use crate::util::sanitize_name;

/// Read `dir` and return its navigable entries.
///
/// Directories come before files; inside each group the filesystem order is
/// kept. Synthetic entries are prepended as `<none>` (when `allow_none`),
/// then `./`, then `../` unless `dir` is the filesystem root.
pub fn list_directory(
  fs: &dyn FileSystem,
  dir: &Path,
  allow_none: bool,
) -> io::Result<Vec<Entry>>
{
  let mut dirs = Vec::new();
  let mut files = Vec::new();
  for (index, name) in fs.list_children(dir)?.into_iter().enumerate()
  {
    let full_path = dir.join(&name);
    let label = sanitize_name(&name.to_string_lossy());
    if fs.is_directory(&full_path)?
    {
      dirs.push(Entry::directory(index, full_path, &label));
    }
    else
    {
      files.push(Entry::file(index, full_path, &label));
    }
  }

  let mut entries = Vec::with_capacity(dirs.len() + files.len() + 3);
  if allow_none
  {
    entries.push(Entry::none());
  }
  entries.push(Entry::current_dir(dir));
  if let Some(parent) = parent_of(dir)
  {
    entries.push(Entry::parent_dir(&parent));
  }
  entries.extend(dirs);
  entries.extend(files);
  crate::trace::log(format!(
    "[listing] {} -> {} entries",
    dir.display(),
    entries.len()
  ));
  Ok(entries)
}
