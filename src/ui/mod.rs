pub mod colors;
pub mod paginate;

pub use colors::{Palette, parse_color};

use std::path::Path;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::{Entry, matches_extension};
use crate::util::truncate_to_width;

pub const HINT_TEXT: &str =
  "(Use arrow keys to navigate; space or right to open a folder; esc or left for the parent directory)";
pub const INVALID_TEXT: &str = "Invalid selection. Please choose another option.";
pub const MORE_TEXT: &str = "(Move up and down to reveal more entries)";

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderModel<'a> {
  pub question: &'a str,
  pub current_dir: &'a Path,
  pub entries: Vec<&'a Entry>,
  pub selected: Option<usize>,
  pub page_size: usize,
  pub invalid_selection: bool,
  /// Set once the prompt is answered.
  pub answer: Option<String>,
  pub extensions: &'a [String],
  pub show_hint: bool,
}

/// Rows reserved for the prompt: question, hint, error notice, the page and
/// the scroll notice.
pub fn prompt_height(page_size: usize) -> u16 {
  let rows = page_size.saturating_add(4);
  u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn draw_prompt(f: &mut ratatui::Frame, model: &RenderModel, palette: &Palette) {
  let area: Rect = f.area();
  f.render_widget(Clear, area);
  let lines = build_lines(model, palette, area.width as usize);
  f.render_widget(Paragraph::new(lines), area);
}

/// Lay out the prompt as styled lines no wider than `width` columns.
pub fn build_lines(model: &RenderModel, palette: &Palette, width: usize) -> Vec<Line<'static>> {
  let mut lines = Vec::new();
  let question = format!("? {} ", model.question);
  let rest = width.saturating_sub(UnicodeWidthStr::width(question.as_str()));
  let head = Span::styled(
    truncate_to_width(&question, width),
    Style::default().fg(palette.question).add_modifier(Modifier::BOLD),
  );

  if let Some(answer) = &model.answer {
    let tail = Span::styled(truncate_to_width(answer, rest), Style::default().fg(palette.answer));
    lines.push(Line::from(vec![head, tail]));
    return lines;
  }

  let dir = model.current_dir.display().to_string();
  let tail = Span::styled(truncate_to_width(&dir, rest), Style::default().fg(palette.directory));
  lines.push(Line::from(vec![head, tail]));

  if model.show_hint {
    lines.push(Line::from(Span::styled(
      truncate_to_width(HINT_TEXT, width),
      Style::default().fg(palette.hint),
    )));
  }
  if model.invalid_selection {
    lines.push(Line::from(Span::styled(
      truncate_to_width(INVALID_TEXT, width),
      Style::default().fg(palette.error),
    )));
  }

  let window = paginate::page_window(model.entries.len(), model.selected, model.page_size);
  for pos in window {
    let entry = model.entries[pos];
    let style = row_style(entry, model.selected == Some(pos), model.extensions, palette);
    lines.push(Line::from(Span::styled(truncate_to_width(&entry.display, width), style)));
  }
  if model.entries.len() > model.page_size {
    lines.push(Line::from(Span::styled(
      truncate_to_width(MORE_TEXT, width),
      Style::default().fg(palette.hint),
    )));
  }
  lines
}

/// Files whose name misses the extension list are dimmed, selected or not.
fn row_style(entry: &Entry, selected: bool, extensions: &[String], palette: &Palette) -> Style {
  let unmatched = !entry.is_dir && !entry.is_none && !matches_extension(&entry.display, extensions);
  match (selected, unmatched) {
    (true, false) => Style::default().fg(palette.selected).add_modifier(Modifier::BOLD),
    (true, true) => Style::default().fg(palette.selected_unmatched),
    (false, true) => Style::default().fg(palette.unmatched),
    (false, false) => match palette.item {
      Some(c) => Style::default().fg(c),
      None => Style::default(),
    },
  }
}
