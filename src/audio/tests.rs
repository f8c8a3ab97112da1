use super::fake::FakeBackend;
use super::*;
use crate::config::LibrarySettings;
use crate::library::Library;
use crate::playlist::{PlaylistRecord, PlaylistStore, Song};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{TempDir, tempdir};

const LENGTH: Duration = Duration::from_secs(200);

struct Fixture {
    dir: TempDir,
    store: PlaylistStore,
    engine: PlaybackEngine<FakeBackend>,
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, b"not real audio").unwrap();
    p
}

fn songs(paths: &[PathBuf]) -> Vec<Song> {
    paths
        .iter()
        .map(|p| Song::new(p.file_stem().unwrap().to_string_lossy(), p.clone()))
        .collect()
}

/// Playlist A holds `a_count` real files, B holds one file that does not exist.
fn fixture(a_count: usize) -> Fixture {
    let dir = tempdir().unwrap();
    let a: Vec<PathBuf> = (0..a_count)
        .map(|i| touch(dir.path(), &format!("a{i}.mp3")))
        .collect();
    let b = vec![dir.path().join("gone").join("b.mp3")];
    let store = PlaylistStore::from_records(vec![
        PlaylistRecord {
            name: "A".into(),
            songs: songs(&a),
        },
        PlaylistRecord {
            name: "B".into(),
            songs: songs(&b),
        },
    ])
    .unwrap();
    let library = Library::new(LibrarySettings {
        root: dir.path().to_path_buf(),
        ..LibrarySettings::default()
    });
    let engine = PlaybackEngine::new(FakeBackend::new(LENGTH), library, &store, 0.5);
    Fixture { dir, store, engine }
}

fn id_of(store: &PlaylistStore, name: &str) -> crate::playlist::PlaylistId {
    store.iter().find(|p| p.name == name).unwrap().id
}

#[test]
fn change_playlist_starts_first_song() {
    let mut f = fixture(2);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);

    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert_eq!(f.engine.track_index(), 0);
    assert_eq!(f.engine.duration(), LENGTH);
    assert_eq!(f.engine.now_playing(&f.store).unwrap().name, "a0");
    assert_eq!(f.engine.backend().volume, 0.5);
}

#[test]
fn out_of_range_index_plays_first_song() {
    let mut f = fixture(3);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);
    f.engine.play(&mut f.store, 2);
    assert_eq!(f.engine.track_index(), 2);

    f.engine.play(&mut f.store, 5);
    assert_eq!(f.engine.track_index(), 0);
    assert_eq!(f.engine.transport(), TransportState::Playing);
}

#[test]
fn next_wraps_to_start_and_prev_from_first_replays_it() {
    let mut f = fixture(2);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);

    f.engine.next(&mut f.store);
    assert_eq!(f.engine.track_index(), 1);
    f.engine.next(&mut f.store);
    assert_eq!(f.engine.track_index(), 0);
    f.engine.prev(&mut f.store);
    assert_eq!(f.engine.track_index(), 0);
    assert_eq!(f.engine.backend().loads.len(), 4);
}

#[test]
fn missing_playlist_falls_back_to_sample_after_reconcile() {
    let mut f = fixture(2);
    let a = id_of(&f.store, "A");
    let b = id_of(&f.store, "B");

    f.engine.change_playlist(&mut f.store, b);

    assert_eq!(f.engine.playlist_id(), a);
    assert_eq!(f.engine.track_index(), 0);
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert!(f.store.get(b).is_none());
    assert_eq!(f.store.len(), 1);
}

#[test]
fn unknown_playlist_id_switches_to_sample() {
    let mut f = fixture(2);
    let b = id_of(&f.store, "B");
    let mut other = f.store.clone();
    let stray = other.insert("elsewhere", Vec::new());
    assert!(!f.store.contains(stray));

    f.engine.change_playlist(&mut f.store, stray);
    assert_eq!(f.engine.playlist_id(), f.store.sample_id());
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert!(!f.store.contains(b));
}

#[test]
fn moved_file_is_found_by_rescan_and_repaired() {
    let mut f = fixture(1);
    let b = id_of(&f.store, "B");
    let moved = f.dir.path().join("moved");
    fs::create_dir_all(&moved).unwrap();
    let real = touch(&moved, "b.mp3");

    f.engine.change_playlist(&mut f.store, b);

    assert_eq!(f.engine.playlist_id(), b);
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert_eq!(f.store.get(b).unwrap().songs[0].path, real);
}

#[test]
fn nothing_playable_makes_engine_inert_and_keeps_store() {
    let mut f = fixture(0);
    let b = id_of(&f.store, "B");
    let before = f.store.len();

    f.engine.change_playlist(&mut f.store, b);

    assert!(f.engine.is_inert());
    assert_eq!(f.engine.transport(), TransportState::Stopped);
    assert_eq!(f.store.len(), before);

    f.engine.play(&mut f.store, 0);
    f.engine.toggle_pause(&mut f.store);
    assert_eq!(f.engine.transport(), TransportState::Stopped);
    assert!(f.engine.backend().loads.is_empty());
}

#[test]
fn toggle_pause_cycles_and_restarts_after_stop() {
    let mut f = fixture(2);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);
    f.engine.next(&mut f.store);

    f.engine.toggle_pause(&mut f.store);
    assert_eq!(f.engine.transport(), TransportState::Paused);
    assert!(f.engine.backend().paused);
    f.engine.toggle_pause(&mut f.store);
    assert_eq!(f.engine.transport(), TransportState::Playing);

    f.engine.stop();
    assert_eq!(f.engine.transport(), TransportState::Stopped);
    let loads = f.engine.backend().loads.len();
    f.engine.toggle_pause(&mut f.store);
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert_eq!(f.engine.track_index(), 1);
    assert_eq!(f.engine.backend().loads.len(), loads + 1);
}

#[test]
fn skip_and_rewind_accumulate_offset() {
    let mut f = fixture(1);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);

    f.engine.backend_mut().set_elapsed(Duration::from_secs(30));
    f.engine.skip(Duration::from_secs(10));
    assert_eq!(f.engine.position(), Duration::from_secs(40));

    f.engine.backend_mut().set_elapsed(Duration::from_secs(5));
    f.engine.rewind(Duration::from_secs(10));
    assert_eq!(f.engine.position(), Duration::from_secs(35));

    f.engine.rewind(Duration::from_secs(100));
    assert_eq!(f.engine.position(), Duration::ZERO);
    assert_eq!(
        f.engine.backend().seeks,
        vec![
            Duration::from_secs(40),
            Duration::from_secs(35),
            Duration::ZERO
        ]
    );
}

#[test]
fn scrubbing_is_ignored_while_stopped_and_resumes_when_paused() {
    let mut f = fixture(1);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);

    f.engine.stop();
    f.engine.skip(Duration::from_secs(10));
    assert!(f.engine.backend().seeks.is_empty());

    f.engine.toggle_pause(&mut f.store);
    f.engine.toggle_pause(&mut f.store);
    assert_eq!(f.engine.transport(), TransportState::Paused);
    f.engine.skip(Duration::from_secs(10));
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert_eq!(f.engine.backend().seeks, vec![Duration::from_secs(10)]);
}

#[test]
fn seek_to_fraction_clamps_and_plays() {
    let mut f = fixture(1);
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);
    f.engine.toggle_pause(&mut f.store);

    f.engine.seek_to_fraction(0.25);
    assert_eq!(f.engine.transport(), TransportState::Playing);
    assert_eq!(f.engine.position(), Duration::from_secs(50));
    assert!((f.engine.progress() - 0.25).abs() < 1e-6);

    f.engine.seek_to_fraction(3.0);
    assert_eq!(f.engine.position(), LENGTH);
}

#[test]
fn failed_seek_leaves_transport_alone() {
    let mut f = fixture(1);
    f.engine.seek_to_fraction(0.5);
    assert_eq!(f.engine.transport(), TransportState::Stopped);
    assert_eq!(f.engine.position(), Duration::ZERO);
    assert!(f.engine.backend().seeks.is_empty());
}

#[test]
fn progress_is_zero_without_duration() {
    let mut f = fixture(1);
    f.engine.backend_mut().length = Duration::ZERO;
    let a = id_of(&f.store, "A");
    f.engine.change_playlist(&mut f.store, a);
    f.engine.backend_mut().set_elapsed(Duration::from_secs(3));
    assert_eq!(f.engine.progress(), 0.0);
}

#[test]
fn volume_clamps_and_mutes() {
    let mut f = fixture(1);

    f.engine.set_volume(1.7);
    assert_eq!(f.engine.volume(), 1.0);
    assert!(!f.engine.is_muted());

    f.engine.set_volume(-0.2);
    assert_eq!(f.engine.volume(), 0.0);
    assert!(f.engine.is_muted());
    assert_eq!(f.engine.backend().volume, 0.0);

    f.engine.toggle_mute();
    assert!(!f.engine.is_muted());
    assert_eq!(f.engine.volume(), 0.05);
}

#[test]
fn mute_remembers_level() {
    let mut f = fixture(1);
    f.engine.set_volume(0.7);
    f.engine.toggle_mute();
    assert_eq!(f.engine.volume(), 0.0);
    assert_eq!(f.engine.backend().volume, 0.0);

    f.engine.toggle_mute();
    assert_eq!(f.engine.volume(), 0.7);
    assert_eq!(f.engine.backend().volume, 0.7);

    f.engine.change_volume(-0.2);
    assert!((f.engine.volume() - 0.5).abs() < 1e-6);
}
