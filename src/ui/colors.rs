use ratatui::style::Color;

use crate::config::UiTheme;

pub fn parse_color(s: &str) -> Option<Color> {
  let low = s.trim().to_ascii_lowercase();
  match low.as_str() {
    "black" => Some(Color::Black),
    "red" => Some(Color::Red),
    "green" => Some(Color::Green),
    "yellow" => Some(Color::Yellow),
    "blue" => Some(Color::Blue),
    "magenta" | "purple" => Some(Color::Magenta),
    "cyan" => Some(Color::Cyan),
    "gray" | "grey" => Some(Color::Gray),
    "darkgray" | "darkgrey" => Some(Color::DarkGray),
    "white" => Some(Color::White),
    _ => parse_hex_rgb(&low),
  }
}

fn parse_hex_rgb(s: &str) -> Option<Color> {
  let t = s.strip_prefix('#')?;
  if t.len() != 6 { return None; }
  let r = u8::from_str_radix(&t[0..2], 16).ok()?;
  let g = u8::from_str_radix(&t[2..4], 16).ok()?;
  let b = u8::from_str_radix(&t[4..6], 16).ok()?;
  Some(Color::Rgb(r, g, b))
}

/// Resolved colours used when drawing the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  pub question: Color,
  pub directory: Color,
  pub hint: Color,
  pub error: Color,
  pub answer: Color,
  pub item: Option<Color>,
  pub selected: Color,
  pub selected_unmatched: Color,
  pub unmatched: Color,
}

impl Default for Palette {
  fn default() -> Self {
    Self {
      question: Color::Green,
      directory: Color::Gray,
      hint: Color::DarkGray,
      error: Color::Red,
      answer: Color::Cyan,
      item: None,
      selected: Color::Rgb(0x05, 0x98, 0xbc),
      selected_unmatched: Color::Rgb(0x8d, 0xab, 0xb3),
      unmatched: Color::Rgb(0x8f, 0x8f, 0x8f),
    }
  }
}

impl Palette {
  /// Overlay the colours named in `theme` on the defaults. Unparseable
  /// values are ignored.
  pub fn from_theme(theme: Option<&UiTheme>) -> Self {
    let mut p = Self::default();
    let Some(th) = theme else { return p; };
    let pick = |v: &Option<String>| v.as_deref().and_then(parse_color);
    if let Some(c) = pick(&th.question_fg) { p.question = c; }
    if let Some(c) = pick(&th.directory_fg) { p.directory = c; }
    if let Some(c) = pick(&th.hint_fg) { p.hint = c; }
    if let Some(c) = pick(&th.error_fg) { p.error = c; }
    if let Some(c) = pick(&th.answer_fg) { p.answer = c; }
    if let Some(c) = pick(&th.item_fg) { p.item = Some(c); }
    if let Some(c) = pick(&th.selected_fg) { p.selected = c; }
    if let Some(c) = pick(&th.selected_unmatched_fg) { p.selected_unmatched = c; }
    if let Some(c) = pick(&th.unmatched_fg) { p.unmatched = c; }
    p
  }
}
