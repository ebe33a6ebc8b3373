use pmenu_core::{Menu, MenuOptions, Result, Screen};

use crate::TuiSession;

/// Shows `candidates` in a menu on the terminal and returns the line the
/// user picked, or `None` when they cancelled.
pub fn run_menu<S: AsRef<str>>(candidates: &[S]) -> Result<Option<String>> {
    run_menu_with(candidates, &MenuOptions::default())
}

/// [`run_menu`] with explicit options.
pub fn run_menu_with<S: AsRef<str>>(
    candidates: &[S],
    options: &MenuOptions,
) -> Result<Option<String>> {
    let mut session = TuiSession::acquire()?;
    run_menu_on(candidates, options, &mut session)
}

/// Run a menu on an existing screen, e.g. a [`TuiSession`] that is reused
/// for several menus.
pub fn run_menu_on<S: AsRef<str>, T: Screen>(
    candidates: &[S],
    options: &MenuOptions,
    screen: &mut T,
) -> Result<Option<String>> {
    Ok(Menu::new(candidates, options).run(screen)?.into_selection())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::canvas::Canvas;
    use pmenu_core::{Key, MenuError, RowStyle};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, style::Modifier, Terminal};

    /// A real canvas fed with scripted keys.
    struct TestScreen {
        canvas: Canvas<TestBackend>,
        keys: VecDeque<Result<Key>>,
    }

    impl TestScreen {
        fn new(width: u16, height: u16, keys: Vec<Result<Key>>) -> Self {
            let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            Self {
                canvas: Canvas::new(terminal),
                keys: keys.into(),
            }
        }

        fn line(&self, y: u16) -> String {
            let buffer = self.canvas.backend().buffer();
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        }
    }

    impl Screen for TestScreen {
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
            self.keys.pop_front().expect("script exhausted")
        }

        fn dimensions(&self) -> Result<(u16, u16)> {
            Ok(self.canvas.dimensions()?)
        }
    }

    #[test]
    fn test_menu_on_canvas() {
        let mut screen = TestScreen::new(
            20,
            4,
            vec![Ok(Key::Char('a')), Ok(Key::Down), Ok(Key::Enter)],
        );
        let selection = run_menu_on(
            &["alpha", "bolt", "gamma"],
            &MenuOptions::default(),
            &mut screen,
        )
        .unwrap();

        assert_eq!(selection, Some("gamma".to_string()));
        assert_eq!(screen.line(0), "[Search]: a");
        assert_eq!(screen.line(1), "alpha");
        assert_eq!(screen.line(2), "gamma");
        assert_eq!(screen.line(3), "");

        let buffer = screen.canvas.backend().buffer();
        assert!(buffer.cell((0, 2)).unwrap().modifier.contains(Modifier::REVERSED));
        assert!(buffer.cell((0, 0)).unwrap().modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_interrupt_yields_none() {
        let mut screen = TestScreen::new(20, 4, vec![Ok(Key::Down), Err(MenuError::Interrupted)]);
        let selection =
            run_menu_on(&["a", "b"], &MenuOptions::default(), &mut screen).unwrap();

        assert_eq!(selection, None);
    }

    #[test]
    fn test_escape_yields_none() {
        let mut screen = TestScreen::new(20, 4, vec![Ok(Key::Escape)]);
        let candidates: Vec<String> = Vec::new();
        let selection =
            run_menu_on(&candidates, &MenuOptions::default(), &mut screen).unwrap();

        assert_eq!(selection, None);
    }

    #[test]
    fn test_frames_follow_backend_size() {
        let candidates: Vec<String> = (0..20).map(|i| format!("item {i}")).collect();
        let mut keys: Vec<Result<Key>> = (0..6).map(|_| Ok(Key::Down)).collect();
        keys.push(Ok(Key::Other));
        keys.push(Ok(Key::Escape));
        let mut screen = TestScreen::new(20, 10, keys);

        screen.canvas.backend_mut().resize(20, 3);
        run_menu_on(&candidates, &MenuOptions::default(), &mut screen).unwrap();

        assert_eq!(screen.line(0), "[Search]:");
        assert_eq!(screen.line(1), "item 5");
        assert_eq!(screen.line(2), "item 6");
    }
}
