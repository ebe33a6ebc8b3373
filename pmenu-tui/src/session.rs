use std::{
    io::{self, IsTerminal, Stderr, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pmenu_core::{Key, MenuError, Result, RowStyle, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};

use crate::{
    canvas::Canvas,
    keys::{self, Input},
};

/// How long a key read waits before looking at the interrupt flag again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the terminal for its lifetime: raw mode, alternate screen, visible
/// cursor. Drawing goes to stderr so stdout stays free for the result.
///
/// The session does not touch process signal handling. Ctrl-C arrives as a
/// key in raw mode and is reported as [`MenuError::Interrupted`]; callers
/// that also want SIGINT/SIGTERM to end the menu route them into a flag
/// passed to [`TuiSession::with_interrupt_flag`]. The terminal is restored
/// when the session is dropped, including during a panic unwind.
pub struct TuiSession {
    canvas: Canvas<CrosstermBackend<Stderr>>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl TuiSession {
    /// Takes over the terminal. Fails with [`MenuError::SessionUnavailable`]
    /// before touching the screen when there is no terminal to take over.
    pub fn acquire() -> Result<Self> {
        let stderr = io::stderr();
        if !stderr.is_terminal() {
            return Err(MenuError::SessionUnavailable(
                "stderr is not a terminal".to_string(),
            ));
        }

        enable_raw_mode().map_err(|err| MenuError::SessionUnavailable(err.to_string()))?;

        match Self::enter(stderr) {
            Ok(session) => {
                info!("terminal session acquired");
                Ok(session)
            }
            Err(err) => {
                let _ = release_screen(&mut io::stderr(), disable_raw_mode);
                Err(err)
            }
        }
    }

    /// Makes [`Screen::read_key`] return [`MenuError::Interrupted`] once
    /// `flag` is set.
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    fn enter(mut stderr: Stderr) -> Result<Self> {
        enter_screen(&mut stderr)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        terminal.clear()?;

        Ok(Self {
            canvas: Canvas::new(terminal),
            interrupt: None,
        })
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, cursor::Show)
}

/// Undoes [`enter_screen`] and raw mode. Every step runs even when an
/// earlier one fails; the first error is returned.
fn release_screen<W: Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

impl Screen for TuiSession {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_row(&mut self, row: u16, text: &str, style: RowStyle) {
        self.canvas.draw_row(row, text, style);
    }

    fn place_cursor(&mut self, row: u16, col: u16) {
        self.canvas.place_cursor(row, col);
    }

    fn refresh(&mut self) -> Result<()> {
        Ok(self.canvas.refresh()?)
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            if self.interrupt.is_some() {
                if self.interrupted() {
                    debug!("interrupt flag raised");
                    return Err(MenuError::Interrupted);
                }
                if !event::poll(POLL_INTERVAL)? {
                    continue;
                }
            }

            match keys::decode(&event::read()?) {
                Input::Key(key) => return Ok(key),
                Input::Interrupt => return Err(MenuError::Interrupted),
            }
        }
    }

    fn dimensions(&self) -> Result<(u16, u16)> {
        Ok(self.canvas.dimensions()?)
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        match release_screen(self.canvas.backend_mut(), disable_raw_mode) {
            Ok(()) => info!("terminal session released"),
            Err(err) => warn!(%err, "failed to restore terminal"),
        }
    }
}
