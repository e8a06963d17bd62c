use std::{
  ffi::OsString,
  io,
  path::{
    Component,
    Path,
    PathBuf,
  },
};

/// Filesystem access needed by the directory lister.
///
/// Both calls are synchronous and fail fast; callers propagate the error.
pub trait FileSystem
{
  /// Names of the immediate children of `dir`, in the order the filesystem
  /// returns them.
  fn list_children(
    &self,
    dir: &Path,
  ) -> io::Result<Vec<OsString>>;

  /// Whether `path` is a directory. Symlinks are not followed.
  fn is_directory(
    &self,
    path: &Path,
  ) -> io::Result<bool>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FileSystem for StdFs
{
  fn list_children(
    &self,
    dir: &Path,
  ) -> io::Result<Vec<OsString>>
  {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)?
    {
      names.push(entry?.file_name());
    }
    Ok(names)
  }

  fn is_directory(
    &self,
    path: &Path,
  ) -> io::Result<bool>
  {
    std::fs::symlink_metadata(path).map(|m| m.is_dir())
  }
}

/// Resolve `path` against `base` and normalize `.` and `..` lexically.
/// Symlinks are left untouched; `..` at the root stays at the root.
pub fn resolve_path(
  base: &Path,
  path: &Path,
) -> PathBuf
{
  let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
  let mut out = PathBuf::new();
  for comp in joined.components()
  {
    match comp
    {
      Component::CurDir =>
      {}
      Component::ParentDir =>
      {
        if out.parent().is_some()
        {
          out.pop();
        }
      }
      other => out.push(other.as_os_str()),
    }
  }
  out
}

/// Parent of an absolute, normalized directory, or `None` at the root.
pub fn parent_of(dir: &Path) -> Option<PathBuf>
{
  dir.parent().map(Path::to_path_buf)
}
