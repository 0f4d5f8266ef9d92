//! Application state tests
//!
//! Tests for routing, focus toggling, page lifecycle and theme persistence.

use dataviz::ui::app::{FocusPane, SidebarTab};
use dataviz::ui::config::Config;
use dataviz::ui::routes::Route;
use dataviz::ui::theme::ThemeMode;
use dataviz::ui::App;
use dataviz::viz::Operation;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn create_test_app() -> App {
    App::new(Config::default(), None)
}

#[test]
fn test_focus_toggle_only_on_array_pages() {
    let mut app = create_test_app();

    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Sidebar, "home has nothing to focus");

    app.navigate(Route::ArrayOperations);
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Content);
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Sidebar);
}

#[test]
fn test_theme_toggle_is_persisted() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("dataviz").join("config.json");

    let mut app = App::new(Config::load(&config_path), Some(config_path.clone()));
    assert_eq!(app.theme_mode, ThemeMode::Dark);

    app.toggle_theme();
    assert_eq!(
        Config::load_from(&config_path).expect("saved").theme,
        ThemeMode::Light
    );

    // A fresh start picks the saved preference up
    let app = App::new(Config::load(&config_path), Some(config_path));
    assert_eq!(app.theme_mode, ThemeMode::Light);
}

#[test]
fn test_theme_save_failure_is_reported_not_fatal() {
    let temp_dir = TempDir::new().expect("create temp dir");
    // A directory where the file should be makes the write fail
    let config_path = temp_dir.path().to_path_buf();

    let mut app = App::new(Config::default(), Some(config_path));
    app.toggle_theme();

    assert_eq!(app.theme_mode, ThemeMode::Light);
    assert!(app
        .status
        .as_deref()
        .is_some_and(|s| s.starts_with("Could not save theme")));
}

#[test]
fn test_remount_restores_seed_array() {
    let t0 = Instant::now();
    let mut app = create_test_app();

    app.navigate(Route::ArrayOperations);
    app.trigger(Operation::Insert, t0);
    assert_eq!(app.engine.array().len(), 6);

    app.navigate(Route::Home);
    app.navigate(Route::ArrayOperations);
    assert_eq!(app.engine.array(), &[5, 2, 8, 1, 9]);
    assert_eq!(app.selected_operation, None);
}

#[test]
fn test_editor_timers_stop_when_leaving() {
    let t0 = Instant::now();
    let mut app = create_test_app();

    app.navigate(Route::ArrayEditor);
    app.add_input = "4".to_string();
    app.editor_submit(t0);
    assert!(app.next_deadline().is_some());

    app.navigate(Route::Home);
    assert_eq!(app.next_deadline(), None);
    assert!(!app.tick(t0 + Duration::from_secs(1)));
}

#[test]
fn test_tick_reports_changes() {
    let t0 = Instant::now();
    let mut app = create_test_app();
    app.navigate(Route::ArrayOperations);
    app.trigger(Operation::Iterate, t0);

    assert!(!app.tick(t0 + Duration::from_millis(100)));
    assert!(app.tick(t0 + Duration::from_millis(500)));
    assert_eq!(app.engine.highlight(), Some(1));
}

#[test]
fn test_algorithm_tab_links_are_placeholders() {
    let mut app = create_test_app();
    app.set_sidebar_tab(SidebarTab::Algorithms);
    app.sidebar_index = 3;
    app.activate_sidebar();

    assert_eq!(app.route, Route::Placeholder("/binary-search".to_string()));
    assert_eq!(app.focus, FocusPane::Sidebar);
}
