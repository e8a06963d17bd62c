use std::{
  env,
  path::{
    Path,
    PathBuf,
  },
};

const APP_DIR: &str = "treepick";
const ENTRY_FILE: &str = "init.lua";

/// Resolved configuration locations for treepick.
#[derive(Debug, Clone)]
pub struct ConfigPaths
{
  pub root:   PathBuf,
  pub entry:  PathBuf,
  pub exists: bool,
}

impl ConfigPaths
{
  /// Paths rooted at an explicit directory.
  pub fn at(root: PathBuf) -> Self
  {
    let entry = root.join(ENTRY_FILE);
    let exists = entry.is_file();
    Self { root, entry, exists }
  }
}

fn non_empty_var(key: &str) -> Option<String>
{
  env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Discover the effective configuration directory and entry point.
///
/// Checks `TREEPICK_CONFIG_DIR`, then `XDG_CONFIG_HOME/treepick`, then the
/// platform fallback: `~/.config/treepick` on Unix; `%LOCALAPPDATA%`,
/// `%APPDATA%` and `%USERPROFILE%\.config` on Windows.
pub fn discover_config_paths() -> std::io::Result<ConfigPaths>
{
  if let Some(dir) = non_empty_var("TREEPICK_CONFIG_DIR")
  {
    return Ok(ConfigPaths::at(PathBuf::from(dir)));
  }
  if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME")
  {
    return Ok(ConfigPaths::at(Path::new(&xdg).join(APP_DIR)));
  }
  Ok(ConfigPaths::at(platform_root()))
}

#[cfg(windows)]
fn platform_root() -> PathBuf
{
  if let Some(local) = non_empty_var("LOCALAPPDATA")
  {
    Path::new(&local).join(APP_DIR)
  }
  else if let Some(app) = non_empty_var("APPDATA")
  {
    Path::new(&app).join(APP_DIR)
  }
  else if let Some(up) = non_empty_var("USERPROFILE")
  {
    Path::new(&up).join(".config").join(APP_DIR)
  }
  else
  {
    Path::new(".config").join(APP_DIR)
  }
}

#[cfg(not(windows))]
fn platform_root() -> PathBuf
{
  match non_empty_var("HOME")
  {
    Some(home) => Path::new(&home).join(".config").join(APP_DIR),
    None => Path::new(".config").join(APP_DIR),
  }
}
