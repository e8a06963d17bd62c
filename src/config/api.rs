use mlua::{
  Error as LuaError,
  FromLua,
  Lua,
  Table,
  Value,
};
use std::{
  cell::RefCell,
  io,
  path::PathBuf,
  rc::Rc,
};

use super::{
  Config,
  PickerConfig,
  UiConfig,
  load_theme_table_from_path,
  merge_theme_table,
  resolve_theme_path,
};
use crate::enums::selection_type_from_str;

/// Read the first of `keys` present in `t`. Snake case names are canonical;
/// the camelCase spellings are accepted as aliases.
fn get_any<T: FromLua>(
  t: &Table,
  keys: &[&str],
) -> mlua::Result<Option<T>>
{
  for key in keys
  {
    let v: Value = t.get(*key)?;
    if !v.is_nil()
    {
      return t.get::<T>(*key).map(Some).map_err(|e| {
        LuaError::RuntimeError(format!("treepick.config: bad value for '{key}': {e}"))
      });
    }
  }
  Ok(None)
}

fn apply_picker_fields(
  t: &Table,
  picker: &mut PickerConfig,
) -> mlua::Result<()>
{
  if let Some(p) = get_any::<String>(t, &["path"])?
  {
    picker.path = Some(p);
  }
  if let Some(n) = get_any::<i64>(t, &["page_size", "pageSize"])?
  {
    if n < 1
    {
      return Err(LuaError::RuntimeError(format!(
        "treepick.config: page_size must be at least 1 (got {n})"
      )));
    }
    picker.page_size = n as usize;
  }
  if let Some(b) = get_any::<bool>(t, &["allow_none_option", "allowNoneOption"])?
  {
    picker.allow_none_option = b;
  }
  if let Some(b) = get_any::<bool>(
    t,
    &["only_show_matching_extensions", "onlyShowMatchingExtensions"],
  )?
  {
    picker.only_show_matching_extensions = b;
  }
  if let Some(s) = get_any::<String>(t, &["selection_type", "selectionType"])?
  {
    picker.selection_type = selection_type_from_str(&s).ok_or_else(|| {
      LuaError::RuntimeError(format!(
        "treepick.config: unknown selection_type '{s}' (expected 'file' or 'folder')"
      ))
    })?;
  }
  match t.get::<Value>("extensions")?
  {
    Value::Nil =>
    {}
    Value::Table(list) =>
    {
      let mut exts = Vec::new();
      for ext in list.sequence_values::<String>()
      {
        exts.push(ext?);
      }
      picker.extensions = exts;
    }
    Value::String(s) =>
    {
      picker.extensions = vec![s.to_str()?.to_string()];
    }
    other =>
    {
      return Err(LuaError::RuntimeError(format!(
        "treepick.config: extensions must be a list of strings, got {}",
        other.type_name()
      )));
    }
  }
  if let Some(m) = get_any::<String>(t, &["message"])?
  {
    picker.message = Some(m);
  }
  Ok(())
}

fn apply_ui_fields(
  lua: &Lua,
  t: &Table,
  ui: &mut UiConfig,
  root: Option<&std::path::Path>,
) -> mlua::Result<()>
{
  if let Ok(b) = t.get::<bool>("show_hint")
  {
    ui.show_hint = b;
  }
  match t.get::<Value>("theme")?
  {
    Value::Table(th) =>
    {
      let mut theme = ui.theme.clone().unwrap_or_default();
      merge_theme_table(&th, &mut theme);
      ui.theme = Some(theme);
    }
    Value::String(s) =>
    {
      let path = resolve_theme_path(&s.to_str()?, root);
      let th = load_theme_table_from_path(lua, &path)?;
      let mut theme = ui.theme.clone().unwrap_or_default();
      merge_theme_table(&th, &mut theme);
      ui.theme = Some(theme);
      ui.theme_path = Some(path);
    }
    _ =>
    {}
  }
  Ok(())
}

/// Install the `treepick` table. `treepick.config(tbl)` merges `tbl` into the
/// accumulated configuration; calls made later win.
pub(crate) fn install_treepick_api(
  lua: &Lua,
  config_acc: Rc<RefCell<Config>>,
  config_root: Option<PathBuf>,
) -> io::Result<()>
{
  let globals = lua.globals();
  let api: Table =
    lua.create_table().map_err(|e| io::Error::other(e.to_string()))?;

  let acc = Rc::clone(&config_acc);
  let config_fn = lua
    .create_function(move |lua, tbl: Value| {
      let Value::Table(t) = tbl
      else
      {
        return Err(LuaError::RuntimeError(
          "treepick.config expects a table".to_string(),
        ));
      };
      let mut cfg = acc
        .try_borrow_mut()
        .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
      if let Ok(v) = t.get::<u32>("config_version")
      {
        cfg.config_version = v;
      }
      apply_picker_fields(&t, &mut cfg.picker)?;
      if let Ok(ui_tbl) = t.get::<Table>("ui")
      {
        apply_ui_fields(lua, &ui_tbl, &mut cfg.ui, config_root.as_deref())?;
      }
      Ok(true)
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

  api.set("config", config_fn).map_err(|e| io::Error::other(e.to_string()))?;
  globals
    .set("treepick", api)
    .map_err(|e| io::Error::other(e.to_string()))?;
  Ok(())
}
