use std::path::PathBuf;

use crate::core::SelectionType;

#[derive(Debug, Clone, Default)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  pub config_version: u32,
  pub picker:         PickerConfig,
  pub ui:             UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Picker behaviour as written by the user. Validated into
/// [`crate::app::PickerOptions`] before a session starts.
pub struct PickerConfig
{
  pub path:                          Option<String>,
  pub page_size:                     usize,
  pub allow_none_option:             bool,
  pub only_show_matching_extensions: bool,
  pub selection_type:                SelectionType,
  pub extensions:                    Vec<String>,
  pub message:                       Option<String>,
}

impl Default for PickerConfig
{
  fn default() -> Self
  {
    Self {
      path:                          None,
      page_size:                     crate::app::options::DEFAULT_PAGE_SIZE,
      allow_none_option:             false,
      only_show_matching_extensions: false,
      selection_type:                SelectionType::File,
      extensions:                    Vec::new(),
      message:                       None,
    }
  }
}

#[derive(Debug, Clone)]
/// User interface configuration block replicated from Lua.
pub struct UiConfig
{
  pub show_hint:  bool,
  pub theme_path: Option<PathBuf>,
  pub theme:      Option<UiTheme>,
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self { show_hint: true, theme_path: None, theme: None }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme colours for the prompt. Fields are optional and fall back to
/// defaults.
pub struct UiTheme
{
  pub question_fg:           Option<String>,
  pub directory_fg:          Option<String>,
  pub hint_fg:               Option<String>,
  pub error_fg:              Option<String>,
  pub answer_fg:             Option<String>,
  pub item_fg:               Option<String>,
  // Highlight for a selectable entry and for a file outside the extension
  // list
  pub selected_fg:           Option<String>,
  pub selected_unmatched_fg: Option<String>,
  pub unmatched_fg:          Option<String>,
}
