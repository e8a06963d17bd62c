// Navigation commands and the key events that trigger them.

use std::io;

use crate::{
  app::{
    NavEnv,
    NavState,
  },
  prompt::PromptEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command
{
  MoveCursor(isize),
  Descend,
  Ascend,
  GoBack,
  GoForward,
  Submit,
}

/// Translate an input event into a command for the given state.
///
/// The right key depends on the selection: it opens a real directory and
/// otherwise walks back through the history. `Cancel` has no command; the
/// prompt handles it.
pub fn command_for_event(
  state: &NavState,
  event: PromptEvent,
) -> Option<Command>
{
  match event
  {
    PromptEvent::Up => Some(Command::MoveCursor(-1)),
    PromptEvent::Down => Some(Command::MoveCursor(1)),
    PromptEvent::Left | PromptEvent::Escape => Some(Command::Ascend),
    PromptEvent::Space => Some(Command::Descend),
    PromptEvent::Right =>
    {
      if state.can_go_forward()
      {
        Some(Command::GoForward)
      }
      else
      {
        Some(Command::GoBack)
      }
    }
    PromptEvent::Submit => Some(Command::Submit),
    PromptEvent::Cancel => None,
  }
}

pub fn execute_command(
  state: &NavState,
  command: Command,
  env: NavEnv<'_>,
) -> io::Result<NavState>
{
  match command
  {
    Command::MoveCursor(delta) => Ok(state.move_cursor(delta)),
    Command::Descend => state.enter_selected(env),
    Command::Ascend => state.ascend(env),
    Command::GoBack => state.go_back(env),
    Command::GoForward => state.go_forward(env),
    Command::Submit => Ok(state.submit(env)),
  }
}
