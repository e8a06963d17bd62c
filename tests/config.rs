mod defaults
{
  use treepick::core::SelectionType;

  #[test]
  fn builtin_defaults_apply_without_user_settings()
  {
    let cfg = treepick::config::load_config_from_code("", None).expect("load");
    assert_eq!(cfg.config_version, 1);
    assert_eq!(cfg.picker.page_size, 10);
    assert!(!cfg.picker.allow_none_option);
    assert!(!cfg.picker.only_show_matching_extensions);
    assert_eq!(cfg.picker.selection_type, SelectionType::File);
    assert!(cfg.picker.extensions.is_empty());
    assert!(cfg.picker.path.is_none());
    assert!(cfg.ui.show_hint);
    assert_eq!(
      cfg.ui.theme.as_ref().and_then(|t| t.selected_fg.as_deref()),
      Some("#0598bc")
    );
  }
}

mod overlay
{
  use std::path::Path;

  use treepick::{
    PickerOptions,
    core::SelectionType,
  };

  #[test]
  fn user_values_override_defaults()
  {
    let code = r#"
treepick.config({
  path = "docs",
  page_size = 7,
  allow_none_option = true,
  only_show_matching_extensions = true,
  selection_type = "folder",
  extensions = { ".md", ".txt" },
  message = "Where to?",
  ui = { show_hint = false, theme = { selected_fg = "magenta" } },
})
"#;
    let cfg = treepick::config::load_config_from_code(code, Some(Path::new(".")))
      .expect("load config");
    let p = &cfg.picker;
    assert_eq!(p.path.as_deref(), Some("docs"));
    assert_eq!(p.page_size, 7);
    assert!(p.allow_none_option);
    assert!(p.only_show_matching_extensions);
    assert_eq!(p.selection_type, SelectionType::Folder);
    assert_eq!(p.extensions, vec![".md".to_string(), ".txt".to_string()]);
    assert_eq!(p.message.as_deref(), Some("Where to?"));
    assert!(!cfg.ui.show_hint);
    let theme = cfg.ui.theme.as_ref().expect("theme");
    assert_eq!(theme.selected_fg.as_deref(), Some("magenta"));
    // untouched fields keep the built-in value
    assert_eq!(theme.error_fg.as_deref(), Some("red"));

    let opts = PickerOptions::from_config(p, Path::new("/srv")).expect("options");
    assert_eq!(opts.page_size, 7);
    assert!(opts.path.ends_with("docs"));
  }

  #[test]
  fn camel_case_aliases_are_accepted()
  {
    let code = r#"
treepick.config({ pageSize = 4, allowNoneOption = true, selectionType = "folder",
  onlyShowMatchingExtensions = true })
"#;
    let cfg = treepick::config::load_config_from_code(code, None).expect("load");
    assert_eq!(cfg.picker.page_size, 4);
    assert!(cfg.picker.allow_none_option);
    assert!(cfg.picker.only_show_matching_extensions);
    assert_eq!(cfg.picker.selection_type, SelectionType::Folder);
  }

  #[test]
  fn later_calls_win()
  {
    let code = r#"
treepick.config({ extensions = { ".rs" } })
treepick.config({ extensions = ".toml" })
"#;
    let cfg = treepick::config::load_config_from_code(code, None).expect("load");
    assert_eq!(cfg.picker.extensions, vec![".toml".to_string()]);
  }
}

mod validation
{
  fn load_err(code: &str) -> String
  {
    let err = treepick::config::load_config_from_code(code, None)
      .err()
      .expect("should error");
    format!("{err}")
  }

  #[test]
  fn unknown_selection_type_fails_fast()
  {
    let msg = load_err(r#"treepick.config({ selection_type = "symlink" })"#);
    assert!(msg.contains("unknown selection_type"), "{msg}");
  }

  #[test]
  fn zero_page_size_is_rejected()
  {
    let msg = load_err(r#"treepick.config({ page_size = 0 })"#);
    assert!(msg.contains("page_size"), "{msg}");
  }

  #[test]
  fn newer_config_version_is_rejected()
  {
    let msg = load_err(r#"treepick.config({ config_version = 2 })"#);
    assert!(msg.contains("config_version 2"), "{msg}");
    let cfg = treepick::config::load_config_from_code(
      r#"treepick.config({ config_version = 1 })"#,
      None,
    )
    .expect("current version loads");
    assert_eq!(cfg.config_version, treepick::config::CONFIG_VERSION);
  }

  #[test]
  fn wrong_types_are_reported()
  {
    let msg = load_err(r#"treepick.config({ page_size = "many" })"#);
    assert!(msg.contains("page_size"), "{msg}");
    let msg = load_err(r#"treepick.config({ extensions = 12 })"#);
    assert!(msg.contains("extensions"), "{msg}");
  }

  #[test]
  fn sandbox_has_no_io_library()
  {
    let msg = load_err(r#"io.open("/etc/passwd")"#);
    assert!(msg.contains("inline init.lua execution failed"), "{msg}");
  }
}

mod files
{
  use std::fs;

  #[test]
  fn restricted_require_loads_modules_under_root_lua()
  {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().to_path_buf();
    let lua_dir = root.join("lua");
    fs::create_dir_all(lua_dir.join("pkg")).expect("mkdir lua");
    fs::write(lua_dir.join("exts.lua"), b"return { '.md' }\n").expect("write module");
    fs::write(lua_dir.join("pkg").join("init.lua"), b"return 'folder'\n")
      .expect("write package");
    let code = r#"
local exts = require('exts')
treepick.config({ extensions = exts, selection_type = require('pkg') })
"#;
    let cfg = treepick::config::load_config_from_code(code, Some(&root))
      .expect("load config");
    assert_eq!(cfg.picker.extensions, vec![".md".to_string()]);
    assert_eq!(
      cfg.picker.selection_type,
      treepick::core::SelectionType::Folder
    );
  }

  #[test]
  fn restricted_require_blocks_parent_traversal()
  {
    let temp = tempfile::tempdir().expect("tempdir");
    let bad_code = r#" local x = require('../outside') "#;
    let err = treepick::config::load_config_from_code(bad_code, Some(temp.path()))
      .err()
      .expect("should error");
    let msg = format!("{}", err);
    assert!(msg.contains("invalid module name"), "{msg}");
  }

  #[test]
  fn theme_file_is_resolved_against_config_root()
  {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::create_dir_all(root.join("themes")).unwrap();
    fs::write(
      root.join("themes").join("calm.lua"),
      b"return { selected_fg = 'yellow', unmatched_fg = '#444444' }\n",
    )
    .unwrap();
    let code = r#"treepick.config({ ui = { theme = "themes/calm.lua" } })"#;
    let cfg = treepick::config::load_config_from_code(code, Some(root)).expect("load");
    let theme = cfg.ui.theme.expect("theme");
    assert_eq!(theme.selected_fg.as_deref(), Some("yellow"));
    assert_eq!(theme.unmatched_fg.as_deref(), Some("#444444"));
    assert_eq!(cfg.ui.theme_path, Some(root.join("themes").join("calm.lua")));
  }

  #[test]
  fn load_config_reads_init_lua()
  {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().to_path_buf();
    fs::write(root.join("init.lua"), b"treepick.config({ page_size = 3 })\n").unwrap();
    let paths = treepick::config::ConfigPaths::at(root);
    assert!(paths.exists);
    let cfg = treepick::config::load_config(&paths).expect("load");
    assert_eq!(cfg.picker.page_size, 3);
  }
}
