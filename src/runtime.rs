use std::io;

use crossterm::{
  event,
  event::Event,
  terminal::{
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  TerminalOptions,
  Viewport,
  backend::CrosstermBackend,
  layout::Position,
};

use crate::{
  app::PickerOptions,
  picker::Picker,
  prompt::{
    Flow,
    Prompt,
  },
  trace,
  ui::Palette,
};

/// Run `prompt` in an inline viewport on stderr until it finishes.
///
/// Returns `Ok(None)` when the user cancels. The terminal is restored on
/// every exit path, including errors raised by the prompt.
pub fn run_prompt<P: Prompt>(prompt: &mut P) -> io::Result<Option<P::Output>>
{
  enable_raw_mode()?;
  let backend = CrosstermBackend::new(io::stderr());
  let mut terminal = match Terminal::with_options(
    backend,
    TerminalOptions { viewport: Viewport::Inline(prompt.height()) },
  )
  {
    Ok(t) => t,
    Err(e) =>
    {
      let _ = disable_raw_mode();
      return Err(e);
    }
  };

  with_cleanup(
    &mut terminal,
    |t| {
      t.hide_cursor()?;
      event_loop(t, prompt)
    },
    |t, res| restore(t, matches!(res, Ok(Some(_)))),
  )
}

/// Run `body` on `target`, then `cleanup` however `body` ended. An error
/// from `body` is reported ahead of a cleanup failure.
fn with_cleanup<S, T>(
  target: &mut S,
  body: impl FnOnce(&mut S) -> io::Result<T>,
  cleanup: impl FnOnce(&mut S, &io::Result<T>) -> io::Result<()>,
) -> io::Result<T>
{
  let res = body(target);
  let cleaned = cleanup(target, &res);
  let out = res?;
  cleaned?;
  Ok(out)
}

/// Hand the terminal back: clear the viewport unless an answer is left on
/// screen, park the cursor below it, leave raw mode and show the cursor.
/// Every step runs even if an earlier one fails; leaving raw mode is
/// reported first.
fn restore(
  terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
  keep_answer: bool,
) -> io::Result<()>
{
  let area = terminal.get_frame().area();
  let rows = if keep_answer { 1 } else { 0 };
  let cleared = if keep_answer { Ok(()) } else { terminal.clear() };
  let parked = terminal.set_cursor_position(Position::new(0, area.y.saturating_add(rows)));
  let raw = disable_raw_mode();
  let shown = terminal.show_cursor();
  raw.and(cleared).and(parked).and(shown)
}

fn event_loop<P: Prompt>(
  terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
  prompt: &mut P,
) -> io::Result<Option<P::Output>>
{
  loop
  {
    terminal.draw(|f| prompt.render(f))?;
    let ev = match event::read()?
    {
      Event::Key(key) => crate::input::map_key(key),
      _ => None,
    };
    let Some(ev) = ev
    else
    {
      continue;
    };
    match prompt.on_event(ev)?
    {
      Flow::Continue =>
      {}
      Flow::Done(out) =>
      {
        terminal.draw(|f| prompt.render(f))?;
        return Ok(Some(out));
      }
      Flow::Cancelled =>
      {
        trace::log("[runtime] cancelled");
        return Ok(None);
      }
    }
  }
}

/// Open a picker on the real filesystem and run it to completion.
pub fn run_picker(
  options: PickerOptions,
  palette: Palette,
  show_hint: bool,
) -> io::Result<Option<String>>
{
  let mut picker = Picker::new(options)?.palette(palette).show_hint(show_hint);
  let res = run_prompt(&mut picker);
  if let Err(e) = &res
  {
    trace::log(format!("[error] runtime::run_picker: {e}"));
  }
  res
}
