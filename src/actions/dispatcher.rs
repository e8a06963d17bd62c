// Central event dispatcher.
//
// Maps an input event onto a navigation command and runs it against the
// current snapshot. Events arriving after the state is answered are dropped.
use std::io;

use super::internal::{
  command_for_event,
  execute_command,
};
use crate::{
  app::{
    NavEnv,
    NavState,
  },
  prompt::PromptEvent,
  trace,
};

/// Produce the snapshot that follows `event`. On error the caller keeps the
/// previous snapshot.
pub fn dispatch_event(
  state: &NavState,
  event: PromptEvent,
  env: NavEnv<'_>,
) -> io::Result<NavState>
{
  if state.is_answered()
  {
    trace::log(format!("[dispatch] ignored {:?} after answer", event));
    return Ok(state.clone());
  }
  let Some(command) = command_for_event(state, event)
  else
  {
    return Ok(state.clone());
  };
  trace::log(format!("[dispatch] {:?} -> {:?}", event, command));
  execute_command(state, command, env).inspect_err(|e| {
    trace::log(format!("[dispatch] {:?} failed: {}", command, e));
  })
}
