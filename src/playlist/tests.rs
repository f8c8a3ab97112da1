use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn record(name: &str, songs: &[&str]) -> PlaylistRecord {
    PlaylistRecord {
        name: name.into(),
        songs: songs
            .iter()
            .map(|p| Song::new(Path::new(p).file_stem().unwrap().to_string_lossy(), *p))
            .collect(),
    }
}

fn store(records: Vec<PlaylistRecord>) -> PlaylistStore {
    PlaylistStore::from_records(records).unwrap()
}

#[test]
fn from_records_assigns_ids_in_order_and_picks_first_as_sample() {
    let s = store(vec![record("A", &["/a.mp3"]), record("B", &["/b.mp3"])]);
    let names: Vec<&str> = s.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(s.sample().name, "A");
    assert_eq!(s.revision(), 0);
}

#[test]
fn from_records_rejects_empty_input() {
    assert_eq!(
        PlaylistStore::from_records(Vec::new()).unwrap_err(),
        StoreError::Empty
    );
}

#[test]
fn removing_the_only_playlist_is_rejected() {
    let mut s = store(vec![record("Solo", &["/a.mp3"])]);
    let id = s.sample_id();
    assert_eq!(s.remove(id).unwrap_err(), StoreError::LastPlaylist);
    assert_eq!(s.len(), 1);
    assert_eq!(s.revision(), 0);
}

#[test]
fn removing_the_sample_reassigns_it() {
    let mut s = store(vec![record("A", &["/a.mp3"]), record("B", &["/b.mp3"])]);
    let a = s.sample_id();
    let removed = s.remove(a).unwrap();
    assert_eq!(removed.name, "A");
    assert_eq!(s.sample().name, "B");
    assert!(s.get(a).is_none());
}

#[test]
fn ids_are_never_reused() {
    let mut s = store(vec![record("A", &["/a.mp3"]), record("B", &["/b.mp3"])]);
    let b = s.ids()[1];
    s.remove(b).unwrap();
    let c = s.insert("C", vec![Song::new("c", "/c.mp3")]);
    assert_ne!(b, c);
    assert!(c > b);
}

#[test]
fn update_and_path_repair_bump_revision() {
    let mut s = store(vec![record("A", &["/a.mp3"])]);
    let id = s.sample_id();
    s.update(id, "Renamed", vec![Song::new("x", "/x.mp3")]).unwrap();
    s.replace_song_path(id, 0, "/moved/x.mp3".into()).unwrap();
    assert_eq!(s.revision(), 2);

    let p = s.get(id).unwrap();
    assert_eq!(p.name, "Renamed");
    assert_eq!(p.songs[0].path, Path::new("/moved/x.mp3"));
    assert_eq!(
        s.replace_song_path(id, 4, "/y.mp3".into()).unwrap_err(),
        StoreError::NoSuchSong { id, index: 4 }
    );
}

#[test]
fn reconcile_drops_missing_songs_and_empty_playlists() {
    let mut s = store(vec![
        record("Gone", &["/missing/1.mp3"]),
        record("Mixed", &["/ok/1.mp3", "/missing/2.mp3"]),
    ]);
    let gone = s.sample_id();
    let mixed = s.ids()[1];

    let report = s
        .reconcile(|p: &Path| p.starts_with("/ok"))
        .unwrap();
    assert_eq!(report.dropped_songs, 2);
    assert_eq!(report.dropped_playlists, vec![gone]);
    assert!(report.sample_changed);
    assert_eq!(s.sample_id(), mixed);
    assert_eq!(s.get(mixed).unwrap().songs.len(), 1);
}

#[test]
fn reconcile_without_survivors_leaves_store_untouched() {
    let mut s = store(vec![record("A", &["/a.mp3"]), record("B", &["/b.mp3"])]);
    assert_eq!(s.reconcile(|_| false).unwrap_err(), StoreError::NoSurvivors);
    assert_eq!(s.len(), 2);
    assert_eq!(s.revision(), 0);
}

#[test]
fn playlist_file_round_trips_and_keeps_order() {
    let dir = tempdir().unwrap();
    let file = PlaylistFile::new(dir.path().join("nested").join("playlists.json"));
    assert!(file.load().unwrap().is_empty());

    let s = store(vec![record("B side", &["/b.mp3"]), record("A side", &["/a.mp3"])]);
    file.save(&s).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded, s.records());
    assert_eq!(loaded[0].name, "B side");
}

#[test]
fn missing_artist_defaults_when_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlists.json");
    fs::write(
        &path,
        r#"[{"name":"Old","songs":[{"name":"Tune","path":"/t.mp3"}]}]"#,
    )
    .unwrap();

    let loaded = PlaylistFile::new(&path).load().unwrap();
    assert_eq!(loaded[0].songs[0].artist, DEFAULT_ARTIST);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlists.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        PlaylistFile::new(&path).load(),
        Err(PersistError::Json { .. })
    ));
}
