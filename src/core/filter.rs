use super::{
  entry::Entry,
  selection::matches_extension,
};

/// Extension policy applied to a listing before it is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionPolicy
{
  pub only_matching: bool,
  pub extensions:    Vec<String>,
}

impl ExtensionPolicy
{
  /// Whether `entry` survives the filter.
  pub fn keeps(
    &self,
    entry: &Entry,
  ) -> bool
  {
    !self.only_matching
      || entry.is_dir
      || entry.is_none
      || (!self.extensions.is_empty()
        && matches_extension(&entry.display, &self.extensions))
  }
}

/// Positions in `contents` of the entries that should be shown, in order.
pub fn shown_indices(
  contents: &[Entry],
  policy: &ExtensionPolicy,
) -> Vec<usize>
{
  contents
    .iter()
    .enumerate()
    .filter(|(_, e)| policy.keeps(e))
    .map(|(i, _)| i)
    .collect()
}

#[cfg(test)]
mod tests
{
  use std::path::{
    Path,
    PathBuf,
  };

  use super::*;

  fn sample() -> Vec<Entry>
  {
    vec![
      Entry::none(),
      Entry::current_dir(Path::new("/p")),
      Entry::parent_dir(Path::new("/")),
      Entry::directory(2, PathBuf::from("/p/sub"), "sub"),
      Entry::file(0, PathBuf::from("/p/readme.md"), "readme.md"),
      Entry::file(1, PathBuf::from("/p/notes.txt"), "notes.txt"),
    ]
  }

  #[test]
  fn disabled_policy_shows_everything()
  {
    let contents = sample();
    let policy = ExtensionPolicy {
      only_matching: false,
      extensions:    vec![".md".into()],
    };
    assert_eq!(shown_indices(&contents, &policy), vec![0, 1, 2, 3, 4, 5]);
  }

  #[test]
  fn matching_policy_drops_other_files()
  {
    let contents = sample();
    let policy = ExtensionPolicy {
      only_matching: true,
      extensions:    vec![".md".into()],
    };
    assert_eq!(shown_indices(&contents, &policy), vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn matching_without_extensions_hides_every_file()
  {
    let contents = sample();
    let policy = ExtensionPolicy {
      only_matching: true,
      extensions:    Vec::new(),
    };
    // <none>, ./, ../ and sub stay; both files go
    assert_eq!(shown_indices(&contents, &policy), vec![0, 1, 2, 3]);
  }
}
