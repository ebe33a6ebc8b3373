mod canvas;
mod keys;
pub mod menu;
pub mod session;

pub use canvas::Canvas;
pub use menu::{run_menu, run_menu_on, run_menu_with};
pub use pmenu_core::{MenuError, MenuOptions, Result};
pub use session::TuiSession;
