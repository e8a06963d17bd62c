use std::{
  env,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use crate::{
  config::PickerConfig,
  core::{
    ExtensionPolicy,
    SelectionType,
    fs::resolve_path,
  },
};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MESSAGE: &str = "Select a path";

/// Validated picker settings. `path` is always absolute and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions
{
  pub path:                          PathBuf,
  pub page_size:                     usize,
  pub allow_none_option:             bool,
  pub only_show_matching_extensions: bool,
  pub selection_type:                SelectionType,
  pub extensions:                    Vec<String>,
  pub message:                       String,
}

impl PickerOptions
{
  /// Defaults rooted at `dir`. A relative `dir` resolves against the
  /// process working directory.
  pub fn new(dir: &Path) -> io::Result<Self>
  {
    let path = if dir.is_absolute()
    {
      resolve_path(dir, Path::new("."))
    }
    else
    {
      resolve_path(&env::current_dir()?, dir)
    };
    Ok(Self {
      path,
      page_size:                     DEFAULT_PAGE_SIZE,
      allow_none_option:             false,
      only_show_matching_extensions: false,
      selection_type:                SelectionType::File,
      extensions:                    Vec::new(),
      message:                       DEFAULT_MESSAGE.to_string(),
    })
  }

  /// Validate a loaded configuration. Relative paths resolve against `cwd`.
  pub fn from_config(
    cfg: &PickerConfig,
    cwd: &Path,
  ) -> io::Result<Self>
  {
    if cfg.page_size == 0
    {
      return Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "page_size must be at least 1",
      ));
    }
    let path = match cfg.path.as_deref()
    {
      Some(p) if !p.trim().is_empty() => resolve_path(cwd, Path::new(p)),
      _ => resolve_path(cwd, Path::new(".")),
    };
    Ok(Self {
      path,
      page_size: cfg.page_size,
      allow_none_option: cfg.allow_none_option,
      only_show_matching_extensions: cfg.only_show_matching_extensions,
      selection_type: cfg.selection_type,
      extensions: cfg.extensions.clone(),
      message: cfg
        .message
        .clone()
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
    })
  }

  pub fn extension_policy(&self) -> ExtensionPolicy
  {
    ExtensionPolicy {
      only_matching: self.only_show_matching_extensions,
      extensions:    self.extensions.clone(),
    }
  }
}
