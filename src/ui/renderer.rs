//! Top-level rendering coordinator.
//!
//! [`Display`] owns the screen, the theme and the current [`Layout`]. Once
//! per loop iteration the runtime calls [`Display::check_resize`] and then
//! [`Display::render`]:
//!
//! 1. **Resize**: if the resize flag was raised, clear it, re-read the
//!    terminal size, enforce the minimum and reposition every pane
//! 2. **View Model Computation**: transform `AppState` into `UIViewModel`
//! 3. **Component Rendering**: delegate to the component renderers
//!
//! Rendering never changes the catalog, the view or the queue; a resize only
//! updates pane heights.

use crate::app::{AppState, Mode};
use crate::domain::error::Result;
use crate::runtime::resize::ResizeFlag;
use crate::ui::components::{self, ListPaneView};
use crate::ui::layout::Layout;
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Screen plus everything needed to draw on it.
pub struct Display<S: Screen> {
    screen: S,
    theme: Theme,
    layout: Layout,
}

impl<S: Screen> Display<S> {
    /// Creates a display sized to the current screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen size cannot be read or is below the
    /// minimum.
    pub fn new(screen: S, theme: Theme) -> Result<Self> {
        let (cols, rows) = screen.size()?;
        let layout = Layout::compute(cols, rows)?;
        tracing::debug!(cols, rows, theme = %theme.name, "display initialized");
        Ok(Self {
            screen,
            theme,
            layout,
        })
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Pushes the current pane heights into `state`.
    pub fn reposition(&self, state: &mut AppState) {
        state.reposition(self.layout.list_height(), self.layout.queue_height());
    }

    /// Handles a pending resize notification.
    ///
    /// # Returns
    ///
    /// `true` if the layout was recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::TerminalTooSmall`](crate::domain::PkgviewError::TerminalTooSmall)
    /// if the terminal shrank below the minimum. This is fatal.
    pub fn check_resize(&mut self, flag: &ResizeFlag, state: &mut AppState) -> Result<bool> {
        if !flag.take() {
            return Ok(false);
        }
        self.relayout(state)?;
        Ok(true)
    }

    /// Re-reads the screen size and repositions every pane.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be read or is below the minimum.
    pub fn relayout(&mut self, state: &mut AppState) -> Result<()> {
        let (cols, rows) = self.screen.size()?;
        tracing::debug!(cols, rows, "terminal resized");
        self.layout = Layout::compute(cols, rows)?;
        self.screen.clear()?;
        self.reposition(state);
        Ok(())
    }

    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen cannot be written.
    pub fn render(&mut self, state: &AppState) -> Result<()> {
        let viewmodel = state.compute_viewmodel();
        self.render_viewmodel(&viewmodel)
    }

    fn render_viewmodel(&mut self, vm: &UIViewModel) -> Result<()> {
        let layout = self.layout;
        let theme = &self.theme;
        let screen: &mut dyn Screen = &mut self.screen;

        if vm.mode == Mode::Help {
            components::render_help(screen, layout.cols, layout.rows, theme)?;
            screen.set_cursor(None)?;
            return screen.refresh();
        }

        components::render_list(
            screen,
            layout.list,
            &ListPaneView {
                title: &vm.list_title,
                rows: &vm.list_rows,
                focused: vm.list_focused,
                footer: vm.list_footer.as_deref(),
                reserve_footer: true,
            },
            theme,
        )?;
        components::render_list(
            screen,
            layout.queue,
            &ListPaneView {
                title: &vm.queue_title,
                rows: &vm.queue_rows,
                focused: vm.queue_focused,
                footer: None,
                reserve_footer: false,
            },
            theme,
        )?;
        components::render_info(screen, layout.info, &vm.info, theme)?;
        components::render_status(screen, layout.status_row, layout.cols, &vm.status, theme)?;
        let cursor =
            components::render_input(screen, layout.input_row, layout.cols, vm.input.as_ref(), theme)?;
        screen.set_cursor(cursor)?;
        screen.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, Key, MacroTable};
    use crate::domain::{Attribute, Package, PkgviewError};
    use crate::ui::screen::Style;
    use std::cell::Cell;

    /// Screen keeping a character grid instead of a terminal.
    struct GridScreen {
        size: Cell<(u16, u16)>,
        cells: Vec<Vec<char>>,
        cursor: Option<(u16, u16)>,
        refreshes: usize,
    }

    impl GridScreen {
        fn new(cols: u16, rows: u16) -> Self {
            Self {
                size: Cell::new((cols, rows)),
                cells: vec![vec![' '; usize::from(cols)]; usize::from(rows)],
                cursor: None,
                refreshes: 0,
            }
        }

        fn line(&self, y: usize) -> String {
            self.cells[y].iter().collect::<String>().trim_end().to_string()
        }

        fn contains(&self, needle: &str) -> bool {
            (0..self.cells.len()).any(|y| self.line(y).contains(needle))
        }
    }

    impl Screen for GridScreen {
        fn size(&self) -> Result<(u16, u16)> {
            Ok(self.size.get())
        }

        fn clear(&mut self) -> Result<()> {
            let (cols, rows) = self.size.get();
            self.cells = vec![vec![' '; usize::from(cols)]; usize::from(rows)];
            Ok(())
        }

        fn write_at(&mut self, x: u16, y: u16, text: &str, _style: Style) -> Result<()> {
            let row = &mut self.cells[usize::from(y)];
            for (i, c) in text.chars().enumerate() {
                if let Some(cell) = row.get_mut(usize::from(x) + i) {
                    *cell = c;
                }
            }
            Ok(())
        }

        fn set_cursor(&mut self, position: Option<(u16, u16)>) -> Result<()> {
            self.cursor = position;
            Ok(())
        }

        fn refresh(&mut self) -> Result<()> {
            self.refreshes += 1;
            Ok(())
        }
    }

    fn setup() -> (Display<GridScreen>, AppState) {
        let display = Display::new(GridScreen::new(80, 24), Theme::default()).unwrap();
        let mut state = AppState::new();
        display.reposition(&mut state);
        handle_event(
            &mut state,
            &Event::CatalogLoaded {
                packages: vec![
                    Package::new("bash").with(Attribute::Description, "The GNU Bourne Again shell"),
                    Package::new("zsh"),
                ],
                macros: MacroTable::new(),
            },
        );
        (display, state)
    }

    #[test]
    fn renders_panes_and_status() {
        let (mut display, state) = setup();
        display.render(&state).unwrap();
        let screen = display.screen_mut();
        assert!(screen.line(0).starts_with("Packages (2/2)"));
        assert!(screen.contains(" bash"));
        assert!(screen.contains("Queue (0)"));
        assert!(screen.contains("Description: The GNU Bourne Again shell"));
        assert_eq!(
            screen.line(22),
            "Sorted by: Name Colored by: Install state Filtered by: -"
        );
        assert_eq!(screen.cursor, None);
        assert_eq!(screen.refreshes, 1);
    }

    #[test]
    fn input_mode_places_cursor() {
        let (mut display, mut state) = setup();
        handle_event(&mut state, &Event::Key(Key::Char('n')));
        display.render(&state).unwrap();
        let screen = display.screen_mut();
        assert_eq!(screen.line(23), "/n:");
        assert_eq!(screen.cursor, Some((3, 23)));
    }

    #[test]
    fn help_mode_replaces_panes() {
        let (mut display, mut state) = setup();
        handle_event(&mut state, &Event::Key(Key::Char('h')));
        display.render(&state).unwrap();
        assert_eq!(display.screen_mut().line(0), components::HELP_LINES[0]);
        assert!(!display.screen_mut().contains("Queue ("));
    }

    #[test]
    fn resize_is_applied_once() {
        let (mut display, mut state) = setup();
        let flag = ResizeFlag::new();
        assert!(!display.check_resize(&flag, &mut state).unwrap());

        display.screen_mut().size.set((100, 40));
        flag.raise();
        assert!(display.check_resize(&flag, &mut state).unwrap());
        assert_eq!(display.layout().rows, 40);
        assert_eq!(state.page_height(), display.layout().list_height());
        assert!(!display.check_resize(&flag, &mut state).unwrap());
    }

    #[test]
    fn resize_below_minimum_is_fatal() {
        let (mut display, mut state) = setup();
        let flag = ResizeFlag::new();
        display.screen_mut().size.set((50, 10));
        flag.raise();
        let err = display.check_resize(&flag, &mut state).unwrap_err();
        assert!(matches!(err, PkgviewError::TerminalTooSmall { .. }));
        assert_eq!(state.view().count(), 2);
    }
}
