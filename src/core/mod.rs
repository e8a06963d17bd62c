//! Filesystem-facing building blocks: entries, listing, filtering and
//! selection rules. Everything here is free of UI state.

pub mod entry;
pub mod filter;
pub mod fs;
pub mod listing;
pub mod selection;

pub use entry::{
  Entry,
  EntryId,
};
pub use filter::{
  ExtensionPolicy,
  shown_indices,
};
pub use fs::{
  FileSystem,
  StdFs,
};
pub use listing::list_directory;
pub use selection::{
  SelectionType,
  is_valid_selection,
  matches_extension,
};
