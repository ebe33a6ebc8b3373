//! Which slice of the filtered list is visible in a frame.
//!
//! The viewport is never stored: it is derived from the selection, the
//! number of filtered lines and the terminal height every frame. As a
//! consequence the view has no scroll memory; it always shows the
//! selection on the last visible line once the selection goes past the
//! first screenful, and snaps back to the top when the selection does.

use std::ops::Range;

/// Terminal rows reserved above the list (the search header).
pub const HEADER_ROWS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Index into the filtered list of the first visible line.
    pub start: usize,
    /// One past the index of the last visible line.
    pub end: usize,
    /// Number of list rows available in this frame.
    pub display_rows: usize,
}

impl Viewport {
    pub fn compute(selected: usize, filtered_len: usize, terminal_rows: usize) -> Self {
        let display_rows = terminal_rows.saturating_sub(HEADER_ROWS).min(filtered_len);
        let start = (selected + 1).saturating_sub(display_rows);
        let end = (start + display_rows).min(filtered_len);

        Self {
            start,
            end,
            display_rows,
        }
    }

    /// Indices into the filtered list that are drawn.
    pub fn lines(&self) -> Range<usize> {
        self.start..self.end.max(self.start)
    }

    /// Terminal row on which filtered line `index` is drawn.
    pub fn screen_row(&self, index: usize) -> usize {
        index - self.start + HEADER_ROWS
    }
}
