// Public library interface for the binary, integration tests and embedding.
pub mod actions;
pub mod app;
pub mod config;
pub mod core;
pub mod enums;
pub mod input;
pub mod picker;
pub mod prompt;
pub mod runtime;
pub mod trace;
pub mod ui;
pub mod util;

pub use app::{
  NavState,
  PickerOptions,
  Status,
};
pub use picker::Picker;
