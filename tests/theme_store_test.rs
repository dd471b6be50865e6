//! Tests for the on-disk theme preference.

use strictly_tictactoe::{FileThemeStore, Theme, ThemeStore, toggle_saved_theme};

#[test]
fn test_missing_file_means_no_saved_theme() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileThemeStore::new(dir.path().join("theme.toml"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    let mut store = FileThemeStore::new(&path);
    store.save(Theme::Dark).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme = \"dark\""));

    let reopened = FileThemeStore::new(&path);
    assert_eq!(reopened.load().unwrap(), Some(Theme::Dark));
}

#[test]
fn test_toggle_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileThemeStore::new(dir.path().join("theme.toml"));
    assert_eq!(toggle_saved_theme(&mut store).unwrap(), Theme::Dark);
    assert_eq!(toggle_saved_theme(&mut store).unwrap(), Theme::Light);
    assert_eq!(store.load().unwrap(), Some(Theme::Light));
}

#[test]
fn test_garbage_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "theme = \"sepia\"").unwrap();

    let err = FileThemeStore::new(&path).load().unwrap_err();
    assert!(err.message.contains("Failed to parse theme file"));
}
