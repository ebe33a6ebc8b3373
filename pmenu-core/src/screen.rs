//! The terminal as seen by the menu loop.

use crate::error::Result;

/// A key press, decoded once at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Up,
    Down,
    Backspace,
    Escape,
    Char(char),
    Other,
}

/// Attributes a row is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyle {
    #[default]
    Normal,
    Reversed,
    Bold,
}

/// Drawing and input primitives of an acquired terminal.
///
/// Drawing calls go to an off-screen buffer; nothing becomes visible until
/// [`Screen::refresh`]. Rows and columns outside the current terminal size
/// must be ignored rather than reported.
pub trait Screen {
    /// Erases the off-screen buffer.
    fn clear(&mut self);

    /// Writes `text` at column 0 of `row`.
    fn draw_row(&mut self, row: u16, text: &str, style: RowStyle);

    /// Parks the visible cursor at `(row, col)` for the next refresh.
    fn place_cursor(&mut self, row: u16, col: u16);

    /// Paints the off-screen buffer to the terminal in one go.
    fn refresh(&mut self) -> Result<()>;

    /// Blocks until the next key. Returns [`MenuError::Interrupted`] when an
    /// interrupt arrives instead.
    ///
    /// [`MenuError::Interrupted`]: crate::MenuError::Interrupted
    fn read_key(&mut self) -> Result<Key>;

    /// Current `(rows, cols)`, queried live.
    fn dimensions(&self) -> Result<(u16, u16)>;
}
