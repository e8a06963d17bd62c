//! Generic prompt interface driven by [`crate::runtime::run_prompt`].
//!
//! A prompt owns its state, draws itself and reacts to discrete input
//! events. The runtime knows nothing about files or directories.

use std::io;

/// Discrete input events delivered to a prompt, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent
{
  Up,
  Down,
  Left,
  Right,
  Escape,
  Space,
  Submit,
  Cancel,
}

/// What the runtime should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T>
{
  Continue,
  Done(T),
  Cancelled,
}

pub trait Prompt
{
  type Output;

  /// Rows of terminal space the prompt draws into.
  fn height(&self) -> u16;

  fn render(
    &self,
    f: &mut ratatui::Frame,
  );

  fn on_event(
    &mut self,
    event: PromptEvent,
  ) -> io::Result<Flow<Self::Output>>;
}
