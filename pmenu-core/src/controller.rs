//! The interactive loop: filter, draw, read a key, update, repeat.

use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::{
    error::{MenuError, Result},
    filter::filter,
    options::MenuOptions,
    screen::{Key, RowStyle, Screen},
    viewport::Viewport,
};

/// How a menu session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed(String),
    Cancelled,
}

impl Outcome {
    pub fn into_selection(self) -> Option<String> {
        match self {
            Outcome::Committed(line) => Some(line),
            Outcome::Cancelled => None,
        }
    }
}

/// What the loop does after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Return the filtered line at this index.
    Commit(usize),
    Cancel,
}

/// Query and selection of a running menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    query: String,
    selected: usize,
    max_query_length: usize,
}

impl MenuState {
    pub fn new(options: &MenuOptions) -> Self {
        Self {
            query: options
                .initial_query
                .chars()
                .take(options.max_query_length)
                .collect(),
            selected: 0,
            max_query_length: options.max_query_length,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the highlighted line within the current filtered list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Applies `key` given that the current filtered list has `filtered_len`
    /// lines. Any edit of the query moves the selection back to the top.
    pub fn handle(&mut self, key: Key, filtered_len: usize) -> Step {
        match key {
            Key::Enter => {
                if self.selected < filtered_len {
                    return Step::Commit(self.selected);
                }
            }
            Key::Up => {
                // the view follows the selection, so there is nothing to
                // scroll once the first line is selected
                self.selected = self.selected.saturating_sub(1);
            }
            Key::Down => {
                if self.selected + 1 < filtered_len {
                    self.selected += 1;
                }
            }
            Key::Backspace => {
                self.query.pop();
                self.selected = 0;
            }
            Key::Char(c) => {
                if self.query.chars().count() < self.max_query_length {
                    self.query.push(c);
                }
                self.selected = 0;
            }
            Key::Escape => return Step::Cancel,
            Key::Other => {}
        }

        Step::Continue
    }
}

/// A selection menu over a borrowed list of candidates.
pub struct Menu<'a, S> {
    candidates: &'a [S],
    prompt: &'a str,
    state: MenuState,
}

impl<'a, S: AsRef<str>> Menu<'a, S> {
    pub fn new(candidates: &'a [S], options: &'a MenuOptions) -> Self {
        Self {
            candidates,
            prompt: &options.prompt,
            state: MenuState::new(options),
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Runs frames on `screen` until the user commits or cancels.
    ///
    /// An interrupt while waiting for a key ends the menu as
    /// [`Outcome::Cancelled`]; every other screen error is returned.
    pub fn run<T: Screen>(&mut self, screen: &mut T) -> Result<Outcome> {
        loop {
            screen.clear();
            let filtered = filter(self.candidates, &self.state.query);
            self.render(screen, &filtered)?;
            screen.refresh()?;

            let key = match screen.read_key() {
                Ok(key) => key,
                Err(MenuError::Interrupted) => {
                    info!("interrupted while waiting for input, cancelling");
                    return Ok(Outcome::Cancelled);
                }
                Err(err) => return Err(err),
            };

            let step = self.state.handle(key, filtered.len());
            debug!(?key, ?step, query = %self.state.query, selected = self.state.selected);

            match step {
                Step::Continue => {}
                Step::Commit(index) => {
                    if let Some(line) = filtered.get(index) {
                        info!(index, "selection committed");
                        return Ok(Outcome::Committed(line.to_string()));
                    }
                }
                Step::Cancel => {
                    info!("selection cancelled");
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    }

    fn render<T: Screen>(&self, screen: &mut T, filtered: &[&str]) -> Result<()> {
        let (rows, _) = screen.dimensions()?;
        let selected = self.state.selected;
        let viewport = Viewport::compute(selected, filtered.len(), rows as usize);
        debug!(rows, lines = filtered.len(), ?viewport, "frame");

        for index in viewport.lines() {
            let style = if index == selected {
                RowStyle::Reversed
            } else {
                RowStyle::Normal
            };
            screen.draw_row(viewport.screen_row(index) as u16, filtered[index], style);
        }

        let header = format!("{}{}", self.prompt, self.state.query);
        screen.draw_row(0, &header, RowStyle::Bold);
        let col = u16::try_from(header.width()).unwrap_or(u16::MAX);
        screen.place_cursor(0, col);

        Ok(())
    }
}
