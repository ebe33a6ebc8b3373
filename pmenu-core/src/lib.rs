//! Terminal-independent core of pmenu: candidate filtering, viewport math
//! and the key-driven menu loop.
//!
//! The loop talks to the terminal through the [`Screen`] trait, so it can
//! be driven by a real terminal session or by a scripted one in tests.

pub mod controller;
pub mod error;
pub mod filter;
pub mod options;
pub mod screen;
pub mod viewport;

pub use controller::{Menu, MenuState, Outcome, Step};
pub use error::{MenuError, Result};
pub use filter::filter;
pub use options::{MenuOptions, DEFAULT_PROMPT, MAX_QUERY_LENGTH};
pub use screen::{Key, RowStyle, Screen};
pub use viewport::Viewport;
