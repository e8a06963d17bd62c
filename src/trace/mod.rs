use std::fs::OpenOptions;
use std::path::PathBuf;

fn enabled() -> bool {
    std::env::var("TREEPICK_TRACE")
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

pub fn log<S: AsRef<str>>(s: S) {
    if !enabled() {
        return;
    }
    let line = format!("{} {}\n", timestamp(), s.as_ref());
    if let Some(path) = file_path() {
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| {
                use std::io::Write;
                f.write_all(line.as_bytes())
            });
    }
}

/// Install a panic hook that logs the panic message, location and backtrace
/// to the trace log, then leaves raw mode so the message reaches the user.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("<non-string panic payload>")
        };
        let loc = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "<unknown>".to_string());
        let bt = std::backtrace::Backtrace::force_capture();
        log(format!("[panic] {msg} @ {loc}"));
        log(format!("[panic] backtrace:\n{bt}"));
        let _ = crossterm::terminal::disable_raw_mode();
        let mut err = std::io::stderr();
        let _ = crossterm::execute!(err, crossterm::cursor::Show);
        default_hook(info);
    }));
}

fn file_path() -> Option<PathBuf> {
    if let Ok(fp) = std::env::var("TREEPICK_TRACE_FILE") {
        return Some(PathBuf::from(fp));
    }
    if let Ok(tmp) = std::env::var("TMPDIR") {
        return Some(PathBuf::from(tmp).join("treepick-trace.log"));
    }
    Some(PathBuf::from("/tmp/treepick-trace.log"))
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}
