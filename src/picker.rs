//! The file picker prompt: navigation state plus rendering.

use std::io;

use crate::{
  actions::dispatch_event,
  app::{
    NavEnv,
    NavState,
    PickerOptions,
  },
  core::{
    FileSystem,
    StdFs,
  },
  prompt::{
    Flow,
    Prompt,
    PromptEvent,
  },
  ui::{
    self,
    Palette,
    RenderModel,
  },
};

pub struct Picker<F: FileSystem = StdFs>
{
  fs:        F,
  options:   PickerOptions,
  palette:   Palette,
  show_hint: bool,
  state:     NavState,
}

impl Picker<StdFs>
{
  pub fn new(options: PickerOptions) -> io::Result<Self>
  {
    Self::with_fs(options, StdFs)
  }
}

impl<F: FileSystem> Picker<F>
{
  /// Open the picker on `options.path`, reading through `fs`.
  pub fn with_fs(
    options: PickerOptions,
    fs: F,
  ) -> io::Result<Self>
  {
    let state = NavState::open(NavEnv { fs: &fs, options: &options })?;
    Ok(Self {
      fs,
      options,
      palette: Palette::default(),
      show_hint: true,
      state,
    })
  }

  pub fn palette(
    mut self,
    palette: Palette,
  ) -> Self
  {
    self.palette = palette;
    self
  }

  pub fn show_hint(
    mut self,
    show: bool,
  ) -> Self
  {
    self.show_hint = show;
    self
  }

  pub fn state(&self) -> &NavState
  {
    &self.state
  }

  pub fn render_model(&self) -> RenderModel<'_>
  {
    RenderModel {
      question:          &self.options.message,
      current_dir:       self.state.current_dir(),
      entries:           self.state.shown_entries().collect(),
      selected:          self.state.selected_index(),
      page_size:         self.options.page_size,
      invalid_selection: self.state.invalid_selection(),
      answer:            self.state.answer(),
      extensions:        &self.options.extensions,
      show_hint:         self.show_hint,
    }
  }
}

impl<F: FileSystem> Prompt for Picker<F>
{
  type Output = String;

  fn height(&self) -> u16
  {
    ui::prompt_height(self.options.page_size)
  }

  fn render(
    &self,
    f: &mut ratatui::Frame,
  )
  {
    ui::draw_prompt(f, &self.render_model(), &self.palette);
  }

  fn on_event(
    &mut self,
    event: PromptEvent,
  ) -> io::Result<Flow<String>>
  {
    if event == PromptEvent::Cancel
    {
      return Ok(Flow::Cancelled);
    }
    let env = NavEnv { fs: &self.fs, options: &self.options };
    self.state = dispatch_event(&self.state, event, env)?;
    Ok(match self.state.answer()
    {
      Some(path) => Flow::Done(path),
      None => Flow::Continue,
    })
  }
}
