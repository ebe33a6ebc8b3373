use std::io;

use pmenu_core::RowStyle;
use ratatui::{
    backend::Backend,
    style::{Modifier, Style},
    Terminal,
};

/// Off-screen rows for one frame, painted through a ratatui [`Terminal`].
///
/// Ratatui diffs each frame against the previous one, so a refresh only
/// writes the cells that changed. Rows or columns that fall outside the
/// terminal at paint time are dropped.
pub struct Canvas<B: Backend> {
    terminal: Terminal<B>,
    rows: Vec<(u16, String, RowStyle)>,
    cursor: Option<(u16, u16)>,
}

impl<B: Backend> Canvas<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            rows: Vec::new(),
            cursor: None,
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.cursor = None;
    }

    pub fn draw_row(&mut self, row: u16, text: &str, style: RowStyle) {
        self.rows.push((row, text.to_string(), style));
    }

    pub fn place_cursor(&mut self, row: u16, col: u16) {
        self.cursor = Some((row, col));
    }

    pub fn refresh(&mut self) -> io::Result<()> {
        let rows = &self.rows;
        let cursor = self.cursor;

        self.terminal.draw(|f| {
            let area = f.area();
            if area.width == 0 {
                return;
            }

            let buf = f.buffer_mut();
            for (row, text, style) in rows {
                if *row < area.height {
                    buf.set_stringn(
                        area.x,
                        area.y + row,
                        text,
                        area.width as usize,
                        cell_style(*style),
                    );
                }
            }

            // without a cursor position ratatui hides the cursor
            if let Some((row, col)) = cursor {
                if row < area.height {
                    f.set_cursor_position((area.x + col.min(area.width - 1), area.y + row));
                }
            }
        })?;

        Ok(())
    }

    /// Live `(rows, cols)` of the backend.
    pub fn dimensions(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.height, size.width))
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.terminal.show_cursor()
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.terminal.backend_mut()
    }
}

fn cell_style(style: RowStyle) -> Style {
    match style {
        RowStyle::Normal => Style::default(),
        RowStyle::Reversed => Style::default().add_modifier(Modifier::REVERSED),
        RowStyle::Bold => Style::default().add_modifier(Modifier::BOLD),
    }
}
