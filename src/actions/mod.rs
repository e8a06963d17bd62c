//! Event to command dispatching for the picker.

mod dispatcher;
pub mod internal;

pub use dispatcher::dispatch_event;
pub use internal::{
  Command,
  command_for_event,
  execute_command,
};
