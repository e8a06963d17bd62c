//! Input handling for keyboard events.

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

use crate::prompt::PromptEvent;

/// Map a terminal key event onto a prompt event.
///
/// Release and repeat events are ignored so a key press is handled once on
/// every platform. `k`/`j` and `Ctrl-p`/`Ctrl-n` mirror the arrow keys.
pub fn map_key(key: KeyEvent) -> Option<PromptEvent>
{
  if key.kind != KeyEventKind::Press
  {
    return None;
  }
  let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
  match key.code
  {
    KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(PromptEvent::Cancel),
    KeyCode::Char('p') if ctrl => Some(PromptEvent::Up),
    KeyCode::Char('n') if ctrl => Some(PromptEvent::Down),
    KeyCode::Up | KeyCode::Char('k') => Some(PromptEvent::Up),
    KeyCode::Down | KeyCode::Char('j') => Some(PromptEvent::Down),
    KeyCode::Left => Some(PromptEvent::Left),
    KeyCode::Right => Some(PromptEvent::Right),
    KeyCode::Esc => Some(PromptEvent::Escape),
    KeyCode::Char(' ') => Some(PromptEvent::Space),
    KeyCode::Enter => Some(PromptEvent::Submit),
    _ => None,
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  fn press(code: KeyCode) -> KeyEvent
  {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn arrows_and_letters()
  {
    assert_eq!(map_key(press(KeyCode::Up)), Some(PromptEvent::Up));
    assert_eq!(map_key(press(KeyCode::Char('j'))), Some(PromptEvent::Down));
    assert_eq!(map_key(press(KeyCode::Esc)), Some(PromptEvent::Escape));
    assert_eq!(map_key(press(KeyCode::Char(' '))), Some(PromptEvent::Space));
    assert_eq!(map_key(press(KeyCode::Enter)), Some(PromptEvent::Submit));
    assert_eq!(map_key(press(KeyCode::Char('x'))), None);
  }

  #[test]
  fn ctrl_c_cancels_and_release_is_ignored()
  {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(ctrl_c), Some(PromptEvent::Cancel));
    let mut release = press(KeyCode::Down);
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(release), None);
  }
}
