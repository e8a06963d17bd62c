//! Navigation commands. Each returns the next snapshot; an answered state
//! is returned unchanged.

use std::{
  io,
  path::PathBuf,
};

use crate::{
  app::{
    NavEnv,
    NavState,
    Status,
  },
  core::{
    Entry,
    EntryId,
    fs::parent_of,
    is_valid_selection,
  },
  trace,
};

impl NavState
{
  /// Move the cursor by `delta`, clamped to the shown list.
  pub fn move_cursor(
    &self,
    delta: isize,
  ) -> NavState
  {
    let mut next = self.clone();
    if self.is_answered()
    {
      return next;
    }
    if self.shown.is_empty()
    {
      next.selected = None;
      return next;
    }
    let last = self.shown.len() - 1;
    let current = self.selected_index().unwrap_or(0);
    let index = current.saturating_add_signed(delta).min(last);
    next.selected = self.shown_entry(index).map(|e| e.id);
    next
  }

  /// Switch into `target`, remembering the current directory.
  ///
  /// Files, the `<none>` entry and the current-directory entry leave the
  /// state unchanged.
  pub fn descend(
    &self,
    target: &Entry,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    if self.is_answered() || !target.is_enterable()
    {
      return Ok(self.clone());
    }
    self.change_dir(target.full_path.clone(), env)
  }

  /// Descend into the highlighted entry.
  pub fn enter_selected(
    &self,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    match self.selected_entry()
    {
      Some(entry) => self.descend(entry, env),
      None => Ok(self.clone()),
    }
  }

  /// Go to the parent directory; nothing happens at the root.
  pub fn ascend(
    &self,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    if self.is_answered()
    {
      return Ok(self.clone());
    }
    match parent_of(&self.current_dir)
    {
      Some(parent) if parent != self.current_dir =>
      {
        self.change_dir(parent, env)
      }
      _ => Ok(self.clone()),
    }
  }

  /// Return to the most recently visited directory. Exactly one history
  /// entry is consumed and nothing is pushed.
  pub fn go_back(
    &self,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    if self.is_answered()
    {
      return Ok(self.clone());
    }
    let mut history = self.history.clone();
    match history.pop()
    {
      Some(dir) =>
      {
        trace::log(format!("[nav] back -> {}", dir.display()));
        NavState::load(env, dir, history)
      }
      None => Ok(self.clone()),
    }
  }

  /// Whether the right key should open the selection rather than go back.
  pub fn can_go_forward(&self) -> bool
  {
    self
      .selected_entry()
      .is_some_and(|e| e.is_dir && matches!(e.id, EntryId::Item(_)))
  }

  /// Open the selected directory; only real directories qualify.
  pub fn go_forward(
    &self,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    if !self.can_go_forward()
    {
      return Ok(self.clone());
    }
    self.enter_selected(env)
  }

  /// Accept the selection if it is valid, otherwise flag it.
  pub fn submit(
    &self,
    env: NavEnv<'_>,
  ) -> NavState
  {
    let mut next = self.clone();
    if self.is_answered()
    {
      return next;
    }
    let opts = env.options;
    let valid = self
      .selected_entry()
      .is_some_and(|e| is_valid_selection(e, opts.selection_type, &opts.extensions));
    if valid
    {
      next.status = Status::Answered;
      next.invalid_selection = false;
      trace::log(format!(
        "[nav] answered: {:?}",
        next.answer().unwrap_or_default()
      ));
    }
    else
    {
      next.invalid_selection = true;
      trace::log("[nav] invalid selection");
    }
    next
  }

  fn change_dir(
    &self,
    dir: PathBuf,
    env: NavEnv<'_>,
  ) -> io::Result<NavState>
  {
    let mut history = self.history.clone();
    if dir != self.current_dir
    {
      history.push(self.current_dir.clone());
    }
    trace::log(format!(
      "[nav] {} -> {}",
      self.current_dir.display(),
      dir.display()
    ));
    NavState::load(env, dir, history)
  }
}
