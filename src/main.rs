use std::{
  env,
  io,
  path::Path,
};

use treepick::{
  PickerOptions,
  config::{
    self,
    Config,
    ConfigPaths,
  },
  enums::{
    selection_type_from_str,
    selection_type_to_str,
  },
  runtime,
  trace,
  ui::Palette,
};

fn print_version()
{
  println!("treepick {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: treepick [OPTIONS] [DIR]\n\n\
     Interactively pick a file or folder; the chosen path is printed to stdout.\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
           --config-dir DIR  Use DIR as the config root (sets TREEPICK_CONFIG_DIR)\n\
           --trace[=FILE]    Enable tracing to FILE (default /tmp/treepick-trace.log)\n\
           --file            Select a file (default)\n\
           --folder          Select a folder\n\
           --type TYPE       Selection type: file or folder\n\
           --none            Offer a <none> entry that yields an empty path\n\
           --ext EXT         Accept files ending in EXT (repeatable)\n\
           --only-matching   Hide files that do not match --ext\n\
           --page-size N     Rows shown at once (default 10)\n\
           --message TEXT    Question shown above the list\n\
     Arguments:\n\
       DIR                   Start in directory DIR (default: current dir)\n"
  );
}

fn usage_error(msg: &str) -> !
{
  eprintln!("treepick: {msg}");
  print_help();
  std::process::exit(2);
}

/// Command-line settings layered over the Lua configuration.
#[derive(Default)]
struct CliOverrides
{
  dir:            Option<String>,
  selection_type: Option<String>,
  allow_none:     bool,
  extensions:     Vec<String>,
  only_matching:  bool,
  page_size:      Option<String>,
  message:        Option<String>,
}

impl CliOverrides
{
  fn apply(
    self,
    cfg: &mut Config,
  )
  {
    let picker = &mut cfg.picker;
    if let Some(dir) = self.dir
    {
      picker.path = Some(dir);
    }
    if let Some(t) = self.selection_type
    {
      picker.selection_type = selection_type_from_str(&t)
        .unwrap_or_else(|| usage_error(&format!("unknown selection type: {t}")));
    }
    if self.allow_none
    {
      picker.allow_none_option = true;
    }
    if !self.extensions.is_empty()
    {
      picker.extensions = self.extensions;
    }
    if self.only_matching
    {
      picker.only_show_matching_extensions = true;
    }
    if let Some(n) = self.page_size
    {
      picker.page_size = n
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or_else(|| usage_error(&format!("invalid page size: {n}")));
    }
    if let Some(m) = self.message
    {
      picker.message = Some(m);
    }
  }
}

fn value_for(
  flag: &str,
  inline: Option<&str>,
  args: &mut impl Iterator<Item = String>,
) -> String
{
  match inline
  {
    Some(v) => v.to_string(),
    None => args
      .next()
      .unwrap_or_else(|| usage_error(&format!("{flag} requires a value"))),
  }
}

/// The start directory must exist and be a directory.
fn ensure_directory(path: &Path) -> io::Result<()>
{
  let meta = std::fs::metadata(path)
    .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
  if meta.is_dir()
  {
    Ok(())
  }
  else
  {
    Err(io::Error::new(
      io::ErrorKind::NotADirectory,
      format!("not a directory: {}", path.display()),
    ))
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut cli = CliOverrides::default();
  while let Some(a) = args.next()
  {
    let (flag, inline) = match a.split_once('=')
    {
      Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
      _ => (a.clone(), None),
    };
    match flag.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      "--trace" =>
      {
        unsafe { env::set_var("TREEPICK_TRACE", "1") };
        if let Some(file) = inline.filter(|f| !f.is_empty())
        {
          unsafe { env::set_var("TREEPICK_TRACE_FILE", file) };
        }
      }
      "--config-dir" =>
      {
        let dir = value_for(&flag, inline.as_deref(), &mut args);
        unsafe { env::set_var("TREEPICK_CONFIG_DIR", &dir) };
      }
      "--file" => cli.selection_type = Some("file".to_string()),
      "--folder" => cli.selection_type = Some("folder".to_string()),
      "--type" => cli.selection_type = Some(value_for(&flag, inline.as_deref(), &mut args)),
      "--none" => cli.allow_none = true,
      "--ext" => cli.extensions.push(value_for(&flag, inline.as_deref(), &mut args)),
      "--only-matching" => cli.only_matching = true,
      "--page-size" => cli.page_size = Some(value_for(&flag, inline.as_deref(), &mut args)),
      "--message" => cli.message = Some(value_for(&flag, inline.as_deref(), &mut args)),
      "--" =>
      {
        if let Some(dir) = args.next()
        {
          cli.dir.get_or_insert(dir);
        }
        break;
      }
      s if s.starts_with('-') => usage_error(&format!("unknown option: {s}")),
      _ =>
      {
        cli.dir.get_or_insert(a);
      }
    }
  }

  trace::log("[main] starting treepick");
  let paths: ConfigPaths = config::discover_config_paths()?;
  let mut cfg = config::load_config(&paths).inspect_err(|e| {
    trace::log(format!("[error] config: {e}"));
  })?;
  cli.apply(&mut cfg);

  trace::log(format!("[main] config_version={}", cfg.config_version));
  if let Some(theme) = cfg.ui.theme_path.as_ref()
  {
    trace::log(format!("[main] theme file {}", theme.display()));
  }

  let cwd = env::current_dir()?;
  let options = PickerOptions::from_config(&cfg.picker, &cwd)?;
  ensure_directory(&options.path).inspect_err(|e| {
    trace::log(format!("[error] start dir: {e}"));
  })?;
  trace::log(format!(
    "[main] {} in {} (page_size={}, extensions={:?})",
    selection_type_to_str(options.selection_type),
    options.path.display(),
    options.page_size,
    options.extensions
  ));
  let palette = Palette::from_theme(cfg.ui.theme.as_ref());
  match runtime::run_picker(options, palette, cfg.ui.show_hint)?
  {
    Some(path) =>
    {
      println!("{path}");
      Ok(())
    }
    None => std::process::exit(130),
  }
}
