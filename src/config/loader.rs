use std::{
  cell::RefCell,
  fs,
  io,
  path::Path,
  rc::Rc,
};

use super::{
  Config,
  ConfigPaths,
  LuaEngine,
};

/// Execute the built-in defaults and then `paths.entry`, if it exists.
pub fn load_config(paths: &ConfigPaths) -> io::Result<Config>
{
  let user = if paths.exists
  {
    let code = fs::read_to_string(&paths.entry)
      .map_err(|e| io_err(format!("read init.lua failed: {e}")))?;
    Some((code, paths.entry.to_string_lossy().into_owned()))
  }
  else
  {
    None
  };
  run_config(
    user.as_ref().map(|(code, name)| (code.as_str(), name.as_str())),
    &paths.root,
  )
}

/// Same as [`load_config`] with the user script given inline. `root` is the
/// directory that `require` and relative theme paths resolve against; it
/// defaults to the process working directory.
pub fn load_config_from_code(
  code: &str,
  root: Option<&Path>,
) -> io::Result<Config>
{
  let base = match root
  {
    Some(p) => p.to_path_buf(),
    None => std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")),
  };
  run_config(Some((code, "inline init.lua")), &base)
}

fn run_config(
  user: Option<(&str, &str)>,
  root: &Path,
) -> io::Result<Config>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();
  let config_acc = Rc::new(RefCell::new(Config::default()));

  super::install_treepick_api(lua, Rc::clone(&config_acc), Some(root.to_path_buf()))
    .map_err(|e| io_err(format!("treepick api install failed: {e}")))?;
  super::install_require(lua, &root.join("lua"))
    .map_err(|e| io_err(format!("require install failed: {e}")))?;

  crate::trace::log("[lua] exec builtin/defaults.lua");
  lua
    .load(super::BUILTIN_DEFAULTS_LUA)
    .set_name("builtin/defaults.lua")
    .exec()
    .map_err(|e| {
      crate::trace::log(format!("[lua] defaults.lua error: {}", e));
      io_err(format!("defaults.lua execution failed: {e}"))
    })?;

  if let Some((code, name)) = user
  {
    crate::trace::log(format!("[lua] exec user config: {name}"));
    lua.load(code).set_name(name).exec().map_err(|e| {
      crate::trace::log(format!("[lua] user config error ({name}): {e}"));
      io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{name} execution failed: {e}"),
      )
    })?;
  }

  let cfg = config_acc.borrow().clone();
  if cfg.config_version > super::CONFIG_VERSION
  {
    crate::trace::log(format!(
      "[lua] unsupported config_version {}",
      cfg.config_version
    ));
    return Err(io::Error::new(
      io::ErrorKind::InvalidInput,
      format!(
        "config_version {} is newer than supported version {}",
        cfg.config_version,
        super::CONFIG_VERSION
      ),
    ));
  }
  Ok(cfg)
}

fn io_err(msg: String) -> io::Error
{
  io::Error::other(msg)
}
