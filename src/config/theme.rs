use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};

use super::UiTheme;

pub(crate) fn merge_theme_table(
  theme_tbl: &Table,
  theme: &mut UiTheme,
)
{
  let fields: [(&str, &mut Option<String>); 9] = [
    ("question_fg", &mut theme.question_fg),
    ("directory_fg", &mut theme.directory_fg),
    ("hint_fg", &mut theme.hint_fg),
    ("error_fg", &mut theme.error_fg),
    ("answer_fg", &mut theme.answer_fg),
    ("item_fg", &mut theme.item_fg),
    ("selected_fg", &mut theme.selected_fg),
    ("selected_unmatched_fg", &mut theme.selected_unmatched_fg),
    ("unmatched_fg", &mut theme.unmatched_fg),
  ];
  for (key, slot) in fields
  {
    if let Ok(s) = theme_tbl.get::<String>(key)
    {
      *slot = Some(s);
    }
  }
}

pub(crate) fn resolve_theme_path(
  theme_path: &str,
  root: Option<&Path>,
) -> PathBuf
{
  let candidate = Path::new(theme_path);
  match root
  {
    Some(base) if !candidate.is_absolute() => base.join(candidate),
    _ => candidate.to_path_buf(),
  }
}

/// Evaluate a theme file; it must return a table of colour fields.
pub(crate) fn load_theme_table_from_path(
  lua: &Lua,
  path: &Path,
) -> mlua::Result<Table>
{
  crate::trace::log(format!("[lua] read theme: {}", path.display()));
  let code = fs::read_to_string(path).map_err(|e| {
    LuaError::RuntimeError(format!(
      "read theme '{}' failed: {}",
      path.display(),
      e
    ))
  })?;
  let value = lua
    .load(&code)
    .set_name(path.to_string_lossy())
    .eval::<Value>()
    .inspect_err(|e| {
      crate::trace::log(format!(
        "[lua] theme eval error ({}): {}",
        path.display(),
        e
      ));
    })?;
  match value
  {
    Value::Table(t) => Ok(t),
    other => Err(LuaError::RuntimeError(format!(
      "theme '{}' returned {} (table expected)",
      path.display(),
      other.type_name()
    ))),
  }
}
