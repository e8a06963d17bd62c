//! Loading treepick configuration from Lua.
//!
//! Configuration is plain Lua executed in a sandbox: the built-in
//! `defaults.lua` runs first, then the user's `init.lua`. Both call
//! `treepick.config{...}`, which merges fields into a [`Config`]. Helpers
//! here are public so embedders and tests can build configurations from
//! inline code.

mod api;
mod loader;
mod lua_engine;
mod paths;
mod require;
mod theme;
mod types;

pub use loader::{
  load_config,
  load_config_from_code,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
};
pub use types::{
  Config,
  PickerConfig,
  UiConfig,
  UiTheme,
};

pub(crate) use api::install_treepick_api;
pub(crate) use require::install_require;
pub(crate) use theme::{
  load_theme_table_from_path,
  merge_theme_table,
  resolve_theme_path,
};

/// Newest `config_version` this build understands.
pub const CONFIG_VERSION: u32 = 1;

const BUILTIN_DEFAULTS_LUA: &str = include_str!("lua/defaults.lua");
