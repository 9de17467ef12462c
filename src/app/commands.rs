//! Command handlers for the six operations.
//!
//! Every committed input line, whether typed or produced by a macro, goes
//! through [`AppState::apply_command`]. Handlers record the raw line in the
//! history of their operation before doing anything else, so a command that
//! turns out to be a no-op is still recallable.
//!
//! Failures here are never errors: an invalid pattern or an unknown macro
//! leaves the state as it was and at most sets a status message.

use super::actions::Action;
use super::filter::compile_pattern;
use super::modes::Operation;
use super::state::AppState;
use crate::domain::{Attribute, Package};
use crate::ui::theme::assign_color_slots;

/// Nesting limit for macros invoking macros.
pub const MAX_MACRO_DEPTH: usize = 16;

/// Placeholder replaced by the queued package names in exec commands.
pub const QUEUE_PLACEHOLDER: &str = "%p";

/// Parsed `fields!:pattern` filter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FilterExpr<'a> {
    fields: &'a str,
    negated: bool,
    pattern: &'a str,
}

impl<'a> FilterExpr<'a> {
    /// Splits off a leading `letters[!]:` prefix. Text without a valid
    /// prefix is a bare pattern.
    fn parse(text: &'a str) -> Self {
        if let Some((head, pattern)) = text.split_once(':') {
            let (fields, negated) = match head.strip_suffix('!') {
                Some(fields) => (fields, true),
                None => (head, false),
            };
            if fields.chars().all(|c| c.is_ascii_alphabetic()) {
                return Self {
                    fields,
                    negated,
                    pattern,
                };
            }
        }
        Self {
            fields: "",
            negated: false,
            pattern: text,
        }
    }
}

/// Splits off a leading `letters:` prefix of a search phrase.
fn split_search(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((fields, phrase)) if fields.chars().all(|c| c.is_ascii_alphabetic()) => {
            (fields, phrase)
        }
        _ => ("", text),
    }
}

enum Matcher {
    Substring(String),
    Pattern(regex::Regex),
}

impl AppState {
    /// Commits `text` to the handler of `op`.
    ///
    /// Empty text and [`Operation::None`] are no-ops. Returns the side
    /// effects the runtime has to perform, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pkgview::app::{AppState, Operation};
    /// use pkgview::domain::Package;
    /// use std::collections::BTreeMap;
    ///
    /// let mut state = AppState::new();
    /// state.load_catalog(vec![Package::new("bash"), Package::new("zsh")], BTreeMap::new());
    /// state.apply_command(Operation::Filter, "n:zsh");
    /// assert_eq!(state.view().count(), 1);
    /// ```
    pub fn apply_command(&mut self, op: Operation, text: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        self.status = None;
        self.dispatch(op, text, 0, &mut actions);
        self.list_footer = None;
        actions
    }

    /// True if committing the current input line would run a filter, which
    /// is the one command slow enough to warrant a progress footer.
    #[must_use]
    pub fn commits_filter(&self) -> bool {
        self.mode == super::Mode::Input
            && self.pending == Operation::Filter
            && !self.input.is_empty()
    }

    fn dispatch(
        &mut self,
        op: Operation,
        text: &str,
        depth: usize,
        actions: &mut Vec<Action>,
    ) {
        if text.is_empty() {
            return;
        }
        match op {
            Operation::Filter => self.filter(text),
            Operation::Sort => self.sort(text),
            Operation::Search => self.search(text),
            Operation::ColorCode => self.color_code(text),
            Operation::Exec => actions.push(self.exec(text)),
            Operation::Macro => self.run_macro(text, depth, actions),
            Operation::None => {}
        }
    }

    fn filter(&mut self, text: &str) {
        let _span = tracing::debug_span!("filter", text).entered();
        self.histories.add(Operation::Filter, text);
        self.selection.reset();

        let expr = FilterExpr::parse(text);
        if expr.pattern.is_empty() {
            return;
        }
        if !expr.fields.is_empty() {
            self.selection.set(expr.fields);
        }

        let matcher = if expr.pattern.chars().all(char::is_alphanumeric) {
            Matcher::Substring(expr.pattern.to_string())
        } else {
            match compile_pattern(expr.pattern) {
                Ok(pattern) => Matcher::Pattern(pattern),
                Err(e) => {
                    tracing::debug!(error = %e, "invalid filter pattern");
                    self.status = Some(format!("Invalid pattern: {}", expr.pattern));
                    return;
                }
            }
        };

        let before = self.view.len();
        let selection = &self.selection;
        let excludes = |package: &Package| match (&matcher, expr.negated) {
            (Matcher::Substring(s), false) => selection.excludes_substring(package, s),
            (Matcher::Substring(s), true) => selection.excludes_substring_negated(package, s),
            (Matcher::Pattern(p), false) => selection.excludes_pattern(package, p),
            (Matcher::Pattern(p), true) => selection.excludes_pattern_negated(package, p),
        };
        let catalog = &self.catalog;
        self.view.retain(|&i| !excludes(&catalog[i]));

        self.list_pane.set_len(self.view.len());
        self.list_pane.move_abs(0);
        if !self.filter_description.is_empty() {
            self.filter_description.push_str(", ");
        }
        self.filter_description.push_str(text);

        tracing::debug!(before, after = self.view.len(), "filter applied");
    }

    fn search(&mut self, text: &str) {
        let _span = tracing::debug_span!("search", text).entered();
        self.histories.add(Operation::Search, text);
        self.selection.reset();

        let (fields, phrase) = split_search(text);
        if !fields.is_empty() {
            self.selection.set(fields);
        }
        if phrase.is_empty() {
            return;
        }
        let Some(focused) = self.list_pane.focused_index() else {
            return;
        };

        let start = focused + 1;
        let hit = (start..self.view.len()).chain(0..start).find(|&row| {
            self.selection
                .contains_substring(&self.catalog[self.view[row]], phrase)
        });

        match hit {
            Some(row) => {
                tracing::debug!(row, "search hit");
                self.list_pane.move_abs(row);
            }
            None => tracing::debug!("search found nothing"),
        }
    }

    fn sort(&mut self, text: &str) {
        self.histories.add(Operation::Sort, text);
        let Some(attr) = Attribute::first_in(text) else {
            return;
        };
        tracing::debug!(%attr, "sorting view");
        self.sorted_by = attr;
        self.sort_view(attr);
        self.list_pane.set_len(self.view.len());
    }

    fn color_code(&mut self, text: &str) {
        self.histories.add(Operation::ColorCode, text);
        let Some(attr) = Attribute::first_in(text) else {
            return;
        };
        tracing::debug!(%attr, "recoloring catalog");
        self.selection.reset();
        self.color_slots = assign_color_slots(&self.catalog, attr);
        self.colored_by = attr;
    }

    fn exec(&mut self, text: &str) -> Action {
        self.histories.add(Operation::Exec, text);
        let names = self
            .queue
            .iter()
            .map(|&i| self.catalog[i].name())
            .collect::<Vec<_>>()
            .join(" ");
        let command = text.replace(QUEUE_PLACEHOLDER, &names);
        tracing::debug!(command = %command, "exec requested");
        Action::Exec { command }
    }

    /// Expands a comma-separated list of macro names. An unknown name, a
    /// command without an operation selector, or nesting past
    /// [`MAX_MACRO_DEPTH`] abandons the rest of this list only; enclosing
    /// macros carry on with their next part.
    fn run_macro(&mut self, text: &str, depth: usize, actions: &mut Vec<Action>) {
        let _span = tracing::debug_span!("macro", text, depth).entered();
        self.histories.add(Operation::Macro, text);

        if depth >= MAX_MACRO_DEPTH {
            tracing::warn!(depth, "macro nesting limit reached");
            self.status = Some(format!("Macro nesting too deep: {text}"));
            return;
        }

        for name in text.split(',').map(str::trim) {
            let Some(command) = self.macros.get(name).cloned() else {
                tracing::debug!(name, "unknown macro");
                self.status = Some(format!("Unknown macro: {name}"));
                return;
            };

            let mut chars = command.chars();
            let op = chars.next().map_or(Operation::None, Operation::from_char);
            if op == Operation::None {
                tracing::debug!(name, command = %command, "macro has no operation selector");
                return;
            }
            self.dispatch(op, chars.as_str(), depth + 1, actions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::MacroTable;

    fn package(name: &str, description: &str) -> Package {
        Package::new(name).with(Attribute::Description, description)
    }

    fn state() -> AppState {
        let mut state = AppState::new();
        state.reposition(20, 10);
        state.load_catalog(
            vec![
                package("bash", "The GNU Bourne Again shell"),
                package("fish", "Smart and user friendly shell"),
                package("vim", "Vi Improved, a text editor"),
                package("zsh", "A very advanced and programmable command interpreter"),
            ],
            MacroTable::new(),
        );
        state
    }

    fn names(state: &AppState) -> Vec<String> {
        state.view().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn parse_filter_prefix() {
        assert_eq!(
            FilterExpr::parse("nd!:x"),
            FilterExpr { fields: "nd", negated: true, pattern: "x" }
        );
        assert_eq!(
            FilterExpr::parse(":x"),
            FilterExpr { fields: "", negated: false, pattern: "x" }
        );
        assert_eq!(
            FilterExpr::parse("a b:c"),
            FilterExpr { fields: "", negated: false, pattern: "a b:c" }
        );
        assert_eq!(
            FilterExpr::parse("n:a:b"),
            FilterExpr { fields: "n", negated: false, pattern: "a:b" }
        );
    }

    #[test]
    fn substring_filter_keeps_matches() {
        let mut state = state();
        state.apply_command(Operation::Filter, "shell");
        assert_eq!(names(&state), vec!["bash", "fish"]);
        assert_eq!(state.filter_description(), "shell");
    }

    #[test]
    fn negated_filter_drops_matches() {
        let mut state = state();
        state.apply_command(Operation::Filter, "d!:shell");
        assert_eq!(names(&state), vec!["vim", "zsh"]);
    }

    #[test]
    fn pattern_filter_and_description_accumulates() {
        let mut state = state();
        state.apply_command(Operation::Filter, "n:^.i");
        state.apply_command(Operation::Filter, "n!:m$");
        assert_eq!(names(&state), vec!["fish"]);
        assert_eq!(state.filter_description(), "n:^.i, n!:m$");
    }

    #[test]
    fn invalid_pattern_leaves_view_untouched() {
        let mut state = state();
        state.apply_command(Operation::Filter, "[a-");
        assert_eq!(names(&state).len(), 4);
        assert_eq!(state.filter_description(), "");
        assert!(state.status().is_some());
        assert_eq!(state.histories().get(Operation::Filter).unwrap().len(), 1);
    }

    #[test]
    fn empty_pattern_is_recorded_but_ignored() {
        let mut state = state();
        state.apply_command(Operation::Filter, "n:");
        assert_eq!(names(&state).len(), 4);
        assert_eq!(state.histories().get(Operation::Filter).unwrap().entries(), ["n:"]);
    }

    #[test]
    fn filter_resets_focus_to_top() {
        let mut state = state();
        state.list_pane.move_abs(3);
        state.apply_command(Operation::Filter, "s");
        assert_eq!(state.list_focus(), Some(0));
    }

    #[test]
    fn search_moves_forward_and_wraps() {
        let mut state = state();
        state.apply_command(Operation::Search, "shell");
        assert_eq!(state.list_focus(), Some(1));
        state.apply_command(Operation::Search, "shell");
        assert_eq!(state.list_focus(), Some(0));
    }

    #[test]
    fn search_miss_keeps_focus() {
        let mut state = state();
        state.list_pane.move_abs(2);
        state.apply_command(Operation::Search, "emacs");
        assert_eq!(state.list_focus(), Some(2));
    }

    #[test]
    fn search_field_prefix_narrows_selection() {
        let mut state = state();
        state.apply_command(Operation::Search, "n:vim");
        assert_eq!(state.list_focus(), Some(2));
        assert_eq!(state.selection().attributes(), &[Attribute::Name]);
    }

    #[test]
    fn sort_uses_first_valid_attribute() {
        let mut state = state();
        state.apply_command(Operation::Sort, "#d");
        assert_eq!(state.sorted_by(), Attribute::Description);
        assert_eq!(names(&state), vec!["zsh", "fish", "bash", "vim"]);

        state.apply_command(Operation::Sort, "#!");
        assert_eq!(state.sorted_by(), Attribute::Description);
    }

    #[test]
    fn clear_filter_keeps_sort_order() {
        let mut state = state();
        state.apply_command(Operation::Sort, "d");
        state.apply_command(Operation::Filter, "shell");
        state.clear_filter();
        assert_eq!(names(&state), vec!["zsh", "fish", "bash", "vim"]);
        assert_eq!(state.filter_description(), "");
    }

    #[test]
    fn color_code_sets_attribute_and_resets_selection() {
        let mut state = state();
        state.apply_command(Operation::Search, "r:core");
        state.apply_command(Operation::ColorCode, "r");
        assert_eq!(state.colored_by(), Attribute::Repository);
        assert_eq!(state.selection(), &crate::app::filter::FilterSelection::new());
    }

    #[test]
    fn exec_substitutes_queue_names() {
        let mut state = state();
        state.enqueue_focused();
        state.enqueue_focused();
        let actions = state.apply_command(Operation::Exec, "sudo pacman -S %p");
        assert_eq!(
            actions,
            vec![Action::Exec {
                command: "sudo pacman -S bash fish".to_string()
            }]
        );
    }

    #[test]
    fn macro_runs_parts_in_order() {
        let mut state = state();
        state.macros = MacroTable::from([
            ("shells".to_string(), "/d:shell".to_string()),
            ("bydesc".to_string(), ".d".to_string()),
        ]);
        state.apply_command(Operation::Macro, "shells, bydesc");
        assert_eq!(names(&state), vec!["fish", "bash"]);
        assert_eq!(state.histories().get(Operation::Filter).unwrap().entries(), ["d:shell"]);
        assert_eq!(state.histories().get(Operation::Macro).unwrap().entries(), ["shells, bydesc"]);
    }

    #[test]
    fn unknown_macro_aborts_remaining_parts() {
        let mut state = state();
        state.macros = MacroTable::from([("bydesc".to_string(), ".d".to_string())]);
        state.apply_command(Operation::Macro, "missing,bydesc");
        assert_eq!(state.sorted_by(), Attribute::Name);
    }

    #[test]
    fn macro_without_selector_is_ignored() {
        let mut state = state();
        state.macros = MacroTable::from([("x".to_string(), "hello".to_string())]);
        state.apply_command(Operation::Macro, "x");
        assert_eq!(names(&state).len(), 4);
    }

    #[test]
    fn recursive_macro_hits_depth_limit() {
        let mut state = state();
        state.macros = MacroTable::from([
            ("loop".to_string(), "@loop".to_string()),
            ("sort".to_string(), ".d".to_string()),
        ]);
        state.apply_command(Operation::Macro, "loop,sort");
        assert_eq!(state.sorted_by(), Attribute::Description);
        assert_eq!(
            state.histories().get(Operation::Macro).unwrap().len(),
            MAX_MACRO_DEPTH + 1
        );
        assert_eq!(state.status(), Some("Macro nesting too deep: loop"));
    }

    #[test]
    fn nesting_limit_behaves_like_unknown_nested_name() {
        let mut unknown = state();
        unknown.macros = MacroTable::from([
            ("missing".to_string(), "@nosuch".to_string()),
            ("sort".to_string(), ".d".to_string()),
        ]);
        unknown.apply_command(Operation::Macro, "missing,sort");

        let mut looping = state();
        looping.macros = MacroTable::from([
            ("loop".to_string(), "@loop".to_string()),
            ("sort".to_string(), ".d".to_string()),
        ]);
        looping.apply_command(Operation::Macro, "loop,sort");

        assert_eq!(unknown.sorted_by(), Attribute::Description);
        assert_eq!(looping.sorted_by(), unknown.sorted_by());
        assert_eq!(names(&looping), names(&unknown));
    }

    #[test]
    fn next_command_clears_status() {
        let mut state = state();
        state.apply_command(Operation::Macro, "3");
        assert_eq!(state.status(), Some("Unknown macro: 3"));
        state.apply_command(Operation::Sort, "d");
        assert_eq!(state.status(), None);

        state.apply_command(Operation::Filter, "n:(");
        assert!(state.status().is_some());
        state.apply_command(Operation::Search, "vim");
        assert_eq!(state.status(), None);
    }

    #[test]
    fn search_fields_apply_even_without_phrase() {
        let mut state = state();
        state.apply_command(Operation::Search, "n:");
        assert_eq!(state.selection().attributes(), &[Attribute::Name]);
        assert_eq!(state.list_focus(), Some(0));
    }

    #[test]
    fn nested_macros_expand() {
        let mut state = state();
        state.macros = MacroTable::from([
            ("outer".to_string(), "@inner".to_string()),
            ("inner".to_string(), "/vim".to_string()),
        ]);
        state.apply_command(Operation::Macro, "outer");
        assert_eq!(names(&state), vec!["vim"]);
    }
}
