// Centralized helpers to convert between enums and strings

use crate::core::SelectionType;

#[inline]
pub fn selection_type_to_str(t: SelectionType) -> &'static str {
  match t {
    SelectionType::File => "file",
    SelectionType::Folder => "folder",
  }
}

pub fn selection_type_from_str(s: &str) -> Option<SelectionType> {
  let low = s.trim().to_ascii_lowercase();
  match low.as_str() {
    "file" | "files" => Some(SelectionType::File),
    "folder" | "folders" | "dir" | "directory" => Some(SelectionType::Folder),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selection_type_names_round_trip() {
    for t in [SelectionType::File, SelectionType::Folder] {
      assert_eq!(selection_type_from_str(selection_type_to_str(t)), Some(t));
    }
    assert_eq!(selection_type_from_str(" Folder "), Some(SelectionType::Folder));
    assert_eq!(selection_type_from_str("symlink"), None);
  }
}
