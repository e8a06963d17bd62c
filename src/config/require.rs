use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use std::path::{
  Path,
  PathBuf,
};

/// Locate `name` under `root` as `a/b.lua` or `a/b/init.lua`, refusing
/// anything that escapes the root.
fn module_path(
  root: &Path,
  name: &str,
) -> mlua::Result<PathBuf>
{
  if name.is_empty() || name.contains("..") || name.starts_with('/')
  {
    return Err(LuaError::external("invalid module name"));
  }
  let rel = name.replace('.', "/");
  let direct = root.join(format!("{rel}.lua"));
  let candidate =
    if direct.is_file() { direct } else { root.join(rel).join("init.lua") };
  let canon = std::fs::canonicalize(&candidate)
    .map_err(|e| LuaError::external(format!("module '{name}': {e}")))?;
  let canon_root = std::fs::canonicalize(root)
    .map_err(|e| LuaError::external(format!("{e}")))?;
  if !canon.starts_with(&canon_root)
  {
    return Err(LuaError::external("module outside config root"));
  }
  Ok(canon)
}

/// Install a `require` that only loads modules below `lua_root`. Results are
/// cached so a module body runs once.
pub(crate) fn install_require(
  lua: &Lua,
  lua_root: &Path,
) -> mlua::Result<()>
{
  let root = lua_root.to_path_buf();
  let loaded: Table = lua.create_table()?;
  let require_fn = lua.create_function(move |lua, name: String| {
    let cached: Value = loaded.get(name.as_str())?;
    if !cached.is_nil()
    {
      return Ok(cached);
    }
    let path = module_path(&root, &name)?;
    crate::trace::log(format!("[lua] require {} -> {}", name, path.display()));
    let code = std::fs::read_to_string(&path)
      .map_err(|e| LuaError::external(format!("{e}")))?;
    let value = lua.load(&code).set_name(name.as_str()).eval::<Value>()?;
    let stored = if value.is_nil() { Value::Boolean(true) } else { value };
    loaded.set(name.as_str(), stored.clone())?;
    Ok(stored)
  })?;
  lua.globals().set("require", require_fn)?;
  Ok(())
}
