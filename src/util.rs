//! Small utility helpers shared across the codebase.

/// Replace tabs and control characters so a file name renders on one row.
pub fn sanitize_name(s: &str) -> String
{
  let mut out = String::with_capacity(s.len());
  for ch in s.chars()
  {
    match ch
    {
      '\t' => out.push(' '),
      c if c.is_control() => out.push('?'),
      c => out.push(c),
    }
  }
  out
}

/// Cut `s` so that its display width does not exceed `max_w` columns.
pub fn truncate_to_width(
  s: &str,
  max_w: usize,
) -> String
{
  if max_w == 0
  {
    return String::new();
  }
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars()
  {
    let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w
    {
      break;
    }
    out.push(ch);
    w += cw;
  }
  out
}
