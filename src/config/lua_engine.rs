use mlua::{
  Lua,
  LuaOptions,
  Result as LuaResult,
  StdLib,
};

/// LuaEngine creates a sandboxed Lua runtime for treepick configuration.
/// Safety model:
/// - Load only BASE | STRING | TABLE | MATH stdlibs (no io/os/debug/package).
/// - The `treepick` table and a restricted `require()` are installed by the
///   loader.
pub struct LuaEngine
{
  lua: Lua,
}

impl LuaEngine
{
  /// Initialize a new sandboxed Lua state.
  pub fn new() -> LuaResult<Self>
  {
    let lua = Lua::new_with(
      StdLib::STRING | StdLib::TABLE | StdLib::MATH,
      LuaOptions::default(),
    )?;
    Ok(Self { lua })
  }

  pub fn lua(&self) -> &Lua
  {
    &self.lua
  }
}
