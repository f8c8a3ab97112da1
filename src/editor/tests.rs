use super::*;
use crate::interaction::{Frame, Point};
use crate::playlist::{
    DEFAULT_ARTIST, DEFAULT_TITLE, PlaylistFile, PlaylistPersistence, PlaylistRecord,
    PlaylistStore, Song,
};
use crate::theme::Themes;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

struct ScriptedPicker {
    answers: Vec<Option<PathBuf>>,
}

impl ScriptedPicker {
    fn returning(path: &str) -> Self {
        Self {
            answers: vec![Some(PathBuf::from(path))],
        }
    }

    fn cancelled() -> Self {
        Self {
            answers: vec![None],
        }
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_audio_file(&mut self) -> Option<PathBuf> {
        if self.answers.is_empty() {
            None
        } else {
            self.answers.remove(0)
        }
    }
}

fn songs(n: usize) -> Vec<Song> {
    (0..n)
        .map(|i| Song::new(format!("Song {i}"), format!("/music/{i}.mp3")))
        .collect()
}

fn store_with(playlists: &[(&str, usize)]) -> PlaylistStore {
    let records = playlists
        .iter()
        .map(|(name, n)| PlaylistRecord {
            name: name.to_string(),
            songs: songs(*n),
        })
        .collect();
    PlaylistStore::from_records(records).unwrap()
}

fn editor() -> PlaylistEditor {
    let mut e = PlaylistEditor::new(10, Themes::default().current());
    e.layout(80, 24);
    e
}

fn file_in(dir: &TempDir) -> PlaylistFile {
    PlaylistFile::new(dir.path().join("playlists.json"))
}

#[test]
fn new_playlist_has_only_the_sentinel_card() {
    let mut e = editor();
    e.open_new();
    assert!(e.is_open());
    assert_eq!(e.cards().len(), 1);
    assert!(e.cards().get(0).unwrap().is_sentinel());
}

#[test]
fn sentinel_card_is_last_and_unique_across_pages() {
    let store = store_with(&[("Long", 12)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    assert_eq!(e.cards().len(), 13);
    assert_eq!(e.cards().page_count(), 2);
    assert_eq!(e.cards().current_index(), 1);
    assert!(e.cards().get(12).unwrap().is_sentinel());
    let sentinels = (0..13)
        .filter(|&i| e.cards().get(i).unwrap().is_sentinel())
        .count();
    assert_eq!(sentinels, 1);
    assert!(e.shows_paging());
}

#[test]
fn only_one_field_is_active_at_a_time() {
    let store = store_with(&[("Mix", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    e.begin_name_edit();
    assert!(e.name_field().is_active());

    e.begin_edit(1, EditField::Artist);
    assert!(!e.name_field().is_active());
    assert_eq!(
        e.active(),
        Some(TextTarget::Card {
            card: 1,
            field: EditField::Artist
        })
    );

    e.begin_edit(0, EditField::Name);
    assert_eq!(
        e.active(),
        Some(TextTarget::Card {
            card: 0,
            field: EditField::Name
        })
    );
    // Switching fields committed the artist edit on card 1.
    assert!(e.cards().get(1).unwrap().is_modified());
}

#[test]
fn typing_goes_to_the_active_field_only() {
    let store = store_with(&[("Mix", 1)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    assert!(!e.type_char('x'));

    e.begin_edit(0, EditField::Name);
    e.clear_field();
    for c in "Intro".chars() {
        e.type_char(c);
    }
    assert!(!e.type_char('\n'));
    e.backspace();
    e.submit_key();

    assert_eq!(e.active(), None);
    let card = e.cards().get(0).unwrap();
    assert_eq!(card.song.name, "Intr");
    assert!(card.is_modified());
    assert_eq!(e.name_field().text(), "Mix");
}

#[test]
fn empty_fields_commit_to_defaults() {
    let store = store_with(&[("Mix", 1)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    e.begin_edit(0, EditField::Name);
    e.clear_field();
    e.begin_edit(0, EditField::Artist);
    e.type_char('Z');
    e.clear_field();
    e.commit_active();

    let card = e.cards().get(0).unwrap();
    assert_eq!(card.song.name, DEFAULT_TITLE);
    assert_eq!(card.song.artist, DEFAULT_ARTIST);
}

#[test]
fn sentinel_card_never_shows_confirm() {
    let mut e = editor();
    e.open_new();
    e.begin_edit(0, EditField::Name);
    e.type_char('!');
    e.commit_active();
    assert!(!e.cards().get(0).unwrap().is_modified());

    e.confirm_card(0);
    assert!(e.draft().is_empty());
}

#[test]
fn confirm_writes_the_card_into_the_draft() {
    let store = store_with(&[("Mix", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    e.begin_edit(1, EditField::Artist);
    e.clear_field();
    for c in "Nina".chars() {
        e.type_char(c);
    }
    e.confirm_card(1);

    assert_eq!(e.draft()[1].artist, "Nina");
    assert!(!e.cards().get(1).unwrap().is_modified());
}

#[test]
fn resizing_keeps_unconfirmed_card_edits() {
    let store = store_with(&[("Mix", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());
    let narrow = e.cards().get(1).unwrap().artist.bounds;

    e.begin_edit(1, EditField::Artist);
    e.clear_field();
    for c in "Nina".chars() {
        e.type_char(c);
    }
    e.layout(120, 30);

    assert_eq!(e.active(), None);
    let card = e.cards().get(1).unwrap();
    assert!(card.is_modified());
    assert_eq!(card.value(EditField::Artist), "Nina");
    assert!(card.artist.bounds.width > narrow.width);
    assert_eq!(e.draft()[1].artist, crate::playlist::DEFAULT_ARTIST);

    e.confirm_card(1);
    assert_eq!(e.draft()[1].artist, "Nina");
}

#[test]
fn picking_a_path_on_the_sentinel_appends_a_song() {
    let mut e = editor();
    e.open_new();
    let mut picker = ScriptedPicker::returning("/music/new.mp3");

    e.pick_path(0, &mut picker);

    assert_eq!(e.draft().len(), 1);
    assert_eq!(e.draft()[0].path, PathBuf::from("/music/new.mp3"));
    assert_eq!(e.draft()[0].artist, DEFAULT_ARTIST);
    assert_eq!(e.cards().len(), 2);
    assert!(e.cards().get(1).unwrap().is_sentinel());
}

#[test]
fn picking_a_path_replaces_an_existing_song_immediately() {
    let store = store_with(&[("Mix", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    e.pick_path(0, &mut ScriptedPicker::returning("/elsewhere/0.mp3"));
    assert_eq!(e.draft()[0].path, PathBuf::from("/elsewhere/0.mp3"));
    assert!(!e.cards().get(0).unwrap().is_modified());

    e.pick_path(1, &mut ScriptedPicker::cancelled());
    assert_eq!(e.draft()[1].path, PathBuf::from("/music/1.mp3"));
}

#[test]
fn removing_a_song_rebuilds_the_cards() {
    let store = store_with(&[("Mix", 3)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    e.remove_song(1);
    let names: Vec<&str> = e.draft().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Song 0", "Song 2"]);
    assert_eq!(e.cards().len(), 3);

    // The sentinel has nothing to remove.
    e.remove_song(2);
    assert_eq!(e.draft().len(), 2);
}

#[test]
fn submitting_an_empty_draft_is_rejected() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("Mix", 1)]);
    let mut e = editor();
    e.open_new();

    assert_eq!(e.submit(&mut store, &file), None);
    assert!(e.is_open());
    assert_eq!(store.len(), 1);
    assert!(!file.path().exists());
}

#[test]
fn submit_drops_unconfirmed_edits() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("Mix", 1)]);
    let id = store.sample_id();
    let mut e = editor();
    e.edit_playlist(&store, id);

    e.begin_edit(0, EditField::Name);
    e.type_char('?');
    e.commit_active();

    let event = e.submit(&mut store, &file);
    assert_eq!(event, Some(EditorEvent::PlaylistsChanged { id }));
    assert_eq!(store.get(id).unwrap().songs[0].name, "Song 0");
    assert!(!e.is_open());
}

#[test]
fn submitting_a_new_playlist_persists_it() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("Mix", 1)]);
    let mut e = editor();
    e.open_new();
    e.begin_name_edit();
    for c in "Road trip".chars() {
        e.type_char(c);
    }
    e.pick_path(0, &mut ScriptedPicker::returning("/music/drive.mp3"));

    let Some(EditorEvent::PlaylistsChanged { id }) = e.submit(&mut store, &file) else {
        panic!("expected a saved playlist");
    };
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(id).unwrap().name, "Road trip");

    let saved = file.load().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].name, "Road trip");
    assert_eq!(saved[1].songs[0].path, PathBuf::from("/music/drive.mp3"));
}

#[test]
fn deleting_the_only_playlist_is_rejected() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("Solo", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    assert_eq!(e.delete_playlist(&mut store, &file), None);
    assert_eq!(store.len(), 1);
    assert!(e.is_open());
}

#[test]
fn deleting_removes_the_playlist_and_saves() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("A", 1), ("B", 1)]);
    let b = store.ids()[1];
    let mut e = editor();
    e.edit_playlist(&store, b);

    let event = e.delete_playlist(&mut store, &file);
    assert_eq!(event, Some(EditorEvent::PlaylistDeleted { id: Some(b) }));
    assert!(!store.contains(b));
    assert!(e.draft().is_empty());
    assert!(!e.is_open());
    assert_eq!(file.load().unwrap().len(), 1);
}

fn click(e: &mut PlaylistEditor, at: Point, store: &mut PlaylistStore, file: &PlaylistFile) {
    let mut picker = ScriptedPicker::cancelled();
    for down in [false, true, false] {
        let ctx = EditorContext {
            store: &mut *store,
            persistence: file,
            picker: &mut picker,
        };
        e.update(&Frame::new(at, down, 0.0), ctx);
    }
}

#[test]
fn clicking_a_card_field_activates_it_and_pressing_elsewhere_commits() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("Mix", 2)]);
    let mut e = editor();
    e.edit_playlist(&store, store.sample_id());

    let name = e.cards().get(0).unwrap().name.bounds;
    let at = Point::new(name.x + 1.5, name.y + 0.5);
    click(&mut e, at, &mut store, &file);
    assert_eq!(
        e.active(),
        Some(TextTarget::Card {
            card: 0,
            field: EditField::Name
        })
    );
    e.type_char('!');

    let mut picker = ScriptedPicker::cancelled();
    let ctx = EditorContext {
        store: &mut store,
        persistence: &file,
        picker: &mut picker,
    };
    e.update(&Frame::new(Point::cell(0, 22), true, 0.0), ctx);

    assert_eq!(e.active(), None);
    let card = e.cards().get(0).unwrap();
    assert_eq!(card.song.name, "Song 0!");
    assert!(card.is_modified());
}

#[test]
fn delete_button_is_inert_for_a_new_playlist() {
    let dir = tempdir().unwrap();
    let file = file_in(&dir);
    let mut store = store_with(&[("A", 1), ("B", 1)]);
    let mut e = editor();
    e.open_new();

    let b = e.delete.bounds;
    click(&mut e, Point::new(b.x + 1.5, b.y + 0.5), &mut store, &file);
    assert!(e.is_open());
    assert_eq!(store.len(), 2);
}
