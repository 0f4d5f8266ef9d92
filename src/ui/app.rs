use crate::ui::config::Config;
use crate::ui::routes::{self, Route};
use crate::ui::theme::{Theme, ThemeMode};
use crate::viz::{catalog, ArrayEditor, ArrayEngine, Operation, Outcome, SearchOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    Structures,
    Algorithms,
}

/// Which text input of the editor page receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Add,
    Search,
}

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: String,
    pub path: String,
}

pub struct App {
    pub route: Route,
    pub focus: FocusPane,
    pub sidebar_tab: SidebarTab,
    pub sidebar_index: usize,
    pub operation_index: usize,
    /// Operation whose code snippet is shown.
    pub selected_operation: Option<Operation>,
    pub engine: ArrayEngine,
    pub editor: ArrayEditor,
    pub editor_field: EditorField,
    pub add_input: String,
    pub search_input: String,
    pub status: Option<String>,
    pub theme_mode: ThemeMode,
    /// Where toggled themes are persisted; `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    pub show_info: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            route: Route::Home,
            focus: FocusPane::Sidebar,
            sidebar_tab: SidebarTab::Structures,
            sidebar_index: 0,
            operation_index: 0,
            selected_operation: None,
            engine: ArrayEngine::new(),
            editor: ArrayEditor::new(),
            editor_field: EditorField::Add,
            add_input: String::new(),
            search_input: String::new(),
            status: None,
            theme_mode: config.theme,
            config_path,
            show_info: false,
            should_quit: false,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme_mode.theme()
    }

    /// Flip dark/light and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        info!(theme = %self.theme_mode, "theme toggled");

        if let Some(path) = &self.config_path {
            let config = Config {
                theme: self.theme_mode,
            };
            if let Err(e) = config.save_to(path) {
                warn!(error = %format!("{e:#}"), "failed to save theme preference");
                self.status = Some(format!("Could not save theme: {e}"));
            }
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Sidebar if self.route.is_array_page() => FocusPane::Content,
            FocusPane::Sidebar => FocusPane::Sidebar,
            FocusPane::Content => FocusPane::Sidebar,
        };
    }

    // -- Sidebar -----------------------------------------------------------

    pub fn sidebar_items(&self) -> Vec<SidebarItem> {
        match self.sidebar_tab {
            SidebarTab::Structures => {
                let mut items = vec![SidebarItem {
                    label: "Home".to_string(),
                    path: Route::Home.path().to_string(),
                }];
                items.extend(routes::DATA_STRUCTURES.iter().map(|name| SidebarItem {
                    label: (*name).to_string(),
                    path: routes::structure_path(name),
                }));
                items
            }
            SidebarTab::Algorithms => routes::ALGORITHMS
                .iter()
                .map(|name| SidebarItem {
                    label: (*name).to_string(),
                    path: routes::algorithm_path(name),
                })
                .collect(),
        }
    }

    pub fn set_sidebar_tab(&mut self, tab: SidebarTab) {
        if self.sidebar_tab != tab {
            self.sidebar_tab = tab;
            self.sidebar_index = 0;
        }
    }

    pub fn next(&mut self) {
        let count = self.list_len();
        if count > 0 {
            let index = self.list_index_mut();
            *index = (*index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.list_len();
        if count > 0 {
            let index = self.list_index_mut();
            *index = if *index > 0 { *index - 1 } else { count - 1 };
        }
    }

    fn list_len(&self) -> usize {
        match self.focus {
            FocusPane::Sidebar => self.sidebar_items().len(),
            FocusPane::Content => catalog().len(),
        }
    }

    fn list_index_mut(&mut self) -> &mut usize {
        match self.focus {
            FocusPane::Sidebar => &mut self.sidebar_index,
            FocusPane::Content => &mut self.operation_index,
        }
    }

    /// Follow the selected sidebar link.
    pub fn activate_sidebar(&mut self) {
        if let Some(item) = self.sidebar_items().get(self.sidebar_index) {
            self.navigate(Route::from_path(&item.path));
            if self.route.is_array_page() {
                self.focus = FocusPane::Content;
            }
        }
    }

    // -- Routing -----------------------------------------------------------

    /// Switch pages. Leaving an array page stops its timers; entering one
    /// starts it from the seed array.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        match self.route {
            Route::ArrayOperations => {
                self.engine.cancel();
            }
            Route::ArrayEditor => self.editor.cancel_timers(),
            _ => {}
        }

        match route {
            Route::ArrayOperations => {
                self.engine.reset();
                self.operation_index = 0;
                self.selected_operation = None;
            }
            Route::ArrayEditor => {
                self.editor = ArrayEditor::new();
                self.editor_field = EditorField::Add;
                self.add_input.clear();
                self.search_input.clear();
            }
            _ => {}
        }

        info!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.status = None;
        if !self.route.is_array_page() {
            self.focus = FocusPane::Sidebar;
        }
    }

    // -- Operations page ---------------------------------------------------

    pub fn trigger_selected(&mut self, now: Instant) {
        if let Some(record) = catalog().get(self.operation_index) {
            self.trigger(record.operation, now);
        }
    }

    pub fn trigger(&mut self, operation: Operation, now: Instant) {
        self.selected_operation = Some(operation);
        self.operation_index = operation as usize;
        let outcome = self.engine.trigger(operation, now);
        self.status = Some(self.describe(outcome));
    }

    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Accessed { index } => {
                let value = self.engine.array().get(index).copied().unwrap_or_default();
                format!("Accessed array[{index}] = {value}")
            }
            Outcome::Inserted { index, value } => format!("Inserted {value} at index {index}"),
            Outcome::RemovalPending { index } => format!("Removing element at index {index}"),
            Outcome::Iterating { len } => format!("Iterating over {len} elements"),
            Outcome::Searching { target } => format!("Searching for {target}"),
            Outcome::Skipped => "Array is empty".to_string(),
        }
    }

    // -- Editor page -------------------------------------------------------

    pub fn editor_input_mut(&mut self) -> &mut String {
        match self.editor_field {
            EditorField::Add => &mut self.add_input,
            EditorField::Search => &mut self.search_input,
        }
    }

    pub fn editor_push_char(&mut self, c: char) {
        if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
            self.editor_input_mut().push(c);
        }
    }

    pub fn editor_pop_char(&mut self) {
        self.editor_input_mut().pop();
    }

    /// Submit the focused input: add on the add field, search on the search
    /// field.
    pub fn editor_submit(&mut self, now: Instant) {
        match self.editor_field {
            EditorField::Add => {
                if let Some(item) = self.editor.add(&self.add_input, now) {
                    self.add_input.clear();
                    self.status = Some(format!("Added {}", item.value));
                }
            }
            EditorField::Search => {
                if let Some(outcome) = self.editor.search(&self.search_input, now) {
                    self.status = Some(match outcome {
                        SearchOutcome::Found(index) => format!("Found at index {index}"),
                        SearchOutcome::NotFound => "Not found (-1)".to_string(),
                    });
                }
            }
        }
    }

    pub fn editor_remove(&mut self, now: Instant) {
        if let Some(item) = self.editor.remove_last(now) {
            self.status = Some(format!("Removed {}", item.value));
        }
    }

    /// Cycle Add -> Search -> sidebar.
    pub fn editor_next_field(&mut self) {
        match self.editor_field {
            EditorField::Add => self.editor_field = EditorField::Search,
            EditorField::Search => {
                self.editor_field = EditorField::Add;
                self.focus = FocusPane::Sidebar;
            }
        }
    }

    // -- Timers ------------------------------------------------------------

    /// Advance the mounted page's timers. Returns `true` if a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.route {
            Route::ArrayOperations => self.engine.tick(now),
            Route::ArrayEditor => self.editor.tick(now),
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.route {
            Route::ArrayOperations => self.engine.next_deadline(),
            Route::ArrayEditor => self.editor.next_deadline(),
            _ => None,
        }
    }

    // -- Keys --------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Info modal swallows everything but its close keys
        if self.show_info {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Esc) {
                self.toggle_info();
            }
            return;
        }

        match self.focus {
            FocusPane::Content if self.route == Route::ArrayEditor => {
                self.handle_editor_key(key, now);
            }
            FocusPane::Content if self.route == Route::ArrayOperations => {
                self.handle_operations_key(key, now);
            }
            _ => self.handle_sidebar_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('i') => self.toggle_info(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => {
                self.set_sidebar_tab(SidebarTab::Structures);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => {
                self.set_sidebar_tab(SidebarTab::Algorithms);
            }
            KeyCode::Enter => self.activate_sidebar(),
            _ => {}
        }
    }

    fn handle_operations_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('i') => self.toggle_info(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Esc | KeyCode::Tab => self.focus = FocusPane::Sidebar,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Enter => self.trigger_selected(now),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(record) = catalog().get(index) {
                    self.trigger(record.operation, now);
                }
            }
            KeyCode::Char('e') => {
                self.navigate(Route::ArrayEditor);
                self.focus = FocusPane::Content;
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.editor_field = EditorField::Add;
                self.focus = FocusPane::Sidebar;
            }
            KeyCode::Tab => self.editor_next_field(),
            KeyCode::Enter => self.editor_submit(now),
            KeyCode::Backspace => self.editor_pop_char(),
            KeyCode::Delete => self.editor_remove(now),
            KeyCode::Char(c) => self.editor_push_char(c),
            _ => {}
        }
    }
}
