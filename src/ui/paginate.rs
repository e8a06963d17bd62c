use std::ops::Range;

/// Rows of the shown list visible for the current selection.
///
/// The list never wraps around: the window keeps the selection in its middle
/// where it can and sticks to either end otherwise.
pub fn page_window(
  len: usize,
  selected: Option<usize>,
  page_size: usize,
) -> Range<usize>
{
  let page = page_size.max(1);
  if len <= page
  {
    return 0..len;
  }
  let sel = selected.unwrap_or(0).min(len - 1);
  let start = sel.saturating_sub(page / 2).min(len - page);
  start..start + page
}
