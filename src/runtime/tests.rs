use super::startup::load_store;
use crate::config::LibrarySettings;
use crate::library::Library;
use crate::playlist::{PlaylistFile, PlaylistPersistence, PlaylistRecord, Song};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// A music root holding two songs, and a playlist file path next to it.
fn setup() -> (TempDir, Library, PlaylistFile) {
    let dir = tempdir().unwrap();
    let music = dir.path().join("music");
    fs::create_dir_all(&music).unwrap();
    fs::write(music.join("one.mp3"), b"not real audio").unwrap();
    fs::write(music.join("two.mp3"), b"not real audio").unwrap();
    let library = Library::new(LibrarySettings {
        root: music,
        ..LibrarySettings::default()
    });
    let file = PlaylistFile::new(dir.path().join("playlists.json"));
    (dir, library, file)
}

fn write(path: &Path, text: &str) {
    fs::write(path, text).unwrap();
}

#[test]
fn first_run_seeds_and_saves_the_library_playlist() {
    let (_dir, library, file) = setup();
    let store = load_store(&file, &library).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.sample().name, "Library");
    assert_eq!(store.sample().songs.len(), 2);

    let saved = file.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Library");
}

#[test]
fn saved_playlists_drop_missing_songs_without_rewriting_the_file() {
    let (dir, library, file) = setup();
    let one = dir.path().join("music").join("one.mp3");
    let records = vec![PlaylistRecord {
        name: "Mix".into(),
        songs: vec![Song::new("one", &one), Song::new("gone", "/nowhere/gone.mp3")],
    }];
    let text = serde_json::to_string(&records).unwrap();
    write(file.path(), &text);

    let store = load_store(&file, &library).unwrap();
    assert_eq!(store.sample().name, "Mix");
    assert_eq!(store.sample().songs.len(), 1);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), text);
}

#[test]
fn malformed_file_is_left_alone() {
    let (_dir, library, file) = setup();
    write(file.path(), "{ not json");

    let store = load_store(&file, &library).unwrap();
    assert_eq!(store.sample().name, "Library");
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "{ not json");
}

#[test]
fn playlists_on_a_missing_drive_are_not_overwritten() {
    let (_dir, library, file) = setup();
    let text = r#"[{"name":"External","songs":[{"name":"a","path":"/mnt/ext/a.mp3","artist":"Z"}]},{"name":"More","songs":[{"name":"b","path":"/mnt/ext/b.mp3","artist":"Z"}]}]"#;
    write(file.path(), text);

    let store = load_store(&file, &library).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.sample().name, "Library");
    assert_eq!(fs::read_to_string(file.path()).unwrap(), text);
}

#[test]
fn empty_library_is_an_error() {
    let dir = tempdir().unwrap();
    let library = Library::new(LibrarySettings {
        root: dir.path().to_path_buf(),
        ..LibrarySettings::default()
    });
    let file = PlaylistFile::new(dir.path().join("playlists.json"));
    assert!(load_store(&file, &library).is_err());
    assert!(!file.path().exists());
}
