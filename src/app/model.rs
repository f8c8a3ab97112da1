//! The application model: every widget plus the state they act on.
//!
//! `App::tick` is called once per frame with the pointer snapshot. Each widget
//! feeds the frame to its own pointer state; clicks are dispatched into the
//! playback engine, the panels, the theme provider or the playlist editor.

use std::time::Duration;

use crate::audio::{MediaBackend, PlaybackEngine, TransportState};
use crate::config::Settings;
use crate::editor::{EditorContext, EditorEvent, FilePicker, PlaylistEditor};
use crate::interaction::{Bounds, Clickable, Frame, ImageWidget, Slider, TextClick, TextWidget};
use crate::panel::{Direction, SlidePanel};
use crate::playlist::{PlaylistId, PlaylistPersistence, PlaylistStore};
use crate::theme::{IconName, Theme, Themes};

use super::sidebar::{BarAction, OptionBar};
use super::tray::{Tray, TrayAction};
use super::view::{PlaylistView, ViewAction};

/// Progress at or past this fraction counts as the end of the song.
const END_OF_SONG: f32 = 0.9999;
const MARGIN: f32 = 4.0;

/// What the progress bar shows this frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ProgressDisplay {
    pub fraction: f32,
    pub elapsed: Duration,
    pub remaining: Duration,
}

pub struct App<B> {
    pub store: PlaylistStore,
    pub engine: PlaybackEngine<B>,
    persistence: Box<dyn PlaylistPersistence>,
    picker: Box<dyn FilePicker>,
    themes: Themes,

    pub tray: Tray,
    pub progress: Slider,
    progress_live: bool,
    pub view: PlaylistView,
    pub playlist_bar: OptionBar<PlaylistId>,
    pub theme_bar: OptionBar<&'static str>,
    pub playlist_button: ImageWidget,
    pub add_button: TextWidget,
    pub settings_button: ImageWidget,
    pub editor: PlaylistEditor,

    /// How far the playlist bar has pushed the main content to the right.
    content_shift: f32,
    size: (u16, u16),
    scrub: Duration,
    volume_step: f32,
    seen_revision: u64,
    should_quit: bool,
}

impl<B: MediaBackend> App<B> {
    pub fn new(
        settings: &Settings,
        store: PlaylistStore,
        engine: PlaybackEngine<B>,
        persistence: Box<dyn PlaylistPersistence>,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        let themes = Themes::starting_with(&settings.ui.theme);
        let theme = themes.current().clone();
        let ui = &settings.ui;
        let none = Bounds::default();
        let playlist_panel = SlidePanel::new(0.0, Direction::Right, ui.panel_speed).shifting_content();
        let theme_panel = SlidePanel::new(0.0, Direction::Left, ui.panel_speed).with_scrim();

        let mut app = Self {
            store,
            engine,
            persistence,
            picker,
            tray: Tray::new(settings.controls.scrub_seconds, &theme),
            progress: Slider::new(none, &theme),
            progress_live: false,
            view: PlaylistView::new(ui.songs_per_page, &theme),
            playlist_bar: OptionBar::new("Playlists", playlist_panel, ui.options_per_page, &theme)
                .editable(),
            theme_bar: OptionBar::new("Themes", theme_panel, ui.options_per_page, &theme),
            playlist_button: ImageWidget::new(IconName::Playlist, none, &theme),
            add_button: TextWidget::new("+", none, &theme),
            settings_button: ImageWidget::new(IconName::Settings, none, &theme),
            editor: PlaylistEditor::new(ui.editor_songs_per_page, &theme),
            content_shift: 0.0,
            size: (0, 0),
            scrub: Duration::from_secs(settings.controls.scrub_seconds),
            volume_step: settings.audio.volume_step,
            seen_revision: 0,
            should_quit: false,
            themes,
        };
        let names: Vec<(&'static str, String)> =
            app.themes.names().map(|n| (n, n.to_string())).collect();
        app.theme_bar.set_options(names, &theme);
        app.refresh_playlists();
        app.resize(80, 24);
        app
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    pub fn content_shift(&self) -> f32 {
        self.content_shift
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start the sample playlist.
    pub fn start(&mut self) {
        let sample = self.store.sample_id();
        self.engine.change_playlist(&mut self.store, sample);
        self.sync_with_store();
    }

    /// Lay every widget out for a `width` x `height` cell terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        let w = f32::from(width);
        self.playlist_bar.panel.resize((w / 4.0).floor());
        self.theme_bar.panel.resize((w / 3.0).floor());
        self.playlist_bar.layout(0.0);
        self.theme_bar.layout(w - self.theme_bar.panel.width());
        self.content_shift = if self.playlist_bar.panel.is_open() {
            self.playlist_bar.panel.width()
        } else {
            0.0
        };
        self.settings_button.bounds = Bounds::new(w - 4.0, 0.0, 2.0, 1.0);
        self.editor.layout(width, height);
        self.layout_content();
    }

    fn layout_content(&mut self) {
        let (w, h) = (f32::from(self.size.0), f32::from(self.size.1));
        let s = self.content_shift;
        self.playlist_button.bounds = Bounds::new(1.0 + s, 0.0, 2.0, 1.0);
        self.add_button.bounds = Bounds::new(4.0 + s, 0.0, 1.0, 1.0);
        self.view.layout(w, s);
        self.progress.bounds = Bounds::new(MARGIN + s, h - 5.0, (w - 2.0 * MARGIN).max(1.0), 1.0);
        self.tray.layout(w, h - 2.0, s);
    }

    /// Evaluate one frame.
    pub fn tick(&mut self, frame: &Frame) {
        let moved = self.playlist_bar.advance(frame.dt).shift;
        if moved != 0.0 {
            self.content_shift += moved;
            self.layout_content();
        }
        self.theme_bar.advance(frame.dt);
        self.tray
            .sync(self.engine.transport(), self.engine.is_muted(), self.themes.current());

        let dialog = self.editor.is_open();
        let main_live = !dialog && !self.theme_bar.panel.is_visible();

        if let Some(action) = self.tray.poll(frame, main_live) {
            self.apply_tray(action);
        }

        self.advance_at_end();
        self.progress_live = self.engine.transport() != TransportState::Stopped && !dialog;
        if let Some(fraction) = self.progress.interact(frame, self.progress_live) {
            self.engine.seek_to_fraction(fraction);
        }

        match self.view.poll(frame, main_live) {
            Some(ViewAction::Play(index)) => self.engine.play(&mut self.store, index),
            Some(ViewAction::PagePrev) => self.view.prev_page(),
            Some(ViewAction::PageNext) => self.view.next_page(),
            None => {}
        }

        match self.playlist_bar.poll(frame, main_live) {
            Some(BarAction::Select(id)) => self.engine.change_playlist(&mut self.store, id),
            Some(BarAction::Edit(id)) => self.editor.edit_playlist(&self.store, id),
            Some(BarAction::PagePrev) => self.playlist_bar.prev_page(),
            Some(BarAction::PageNext) => self.playlist_bar.next_page(),
            None => {}
        }
        if self.playlist_button.poll(frame, main_live) {
            self.playlist_bar.panel.toggle();
        }
        if self.add_button.interact(frame, main_live) == TextClick::Label {
            self.editor.open_new();
        }

        match self.theme_bar.poll(frame, !dialog) {
            Some(BarAction::Select(name)) => self.load_theme(name),
            Some(BarAction::PagePrev) => self.theme_bar.prev_page(),
            Some(BarAction::PageNext) => self.theme_bar.next_page(),
            Some(BarAction::Edit(_)) | None => {}
        }
        if self.settings_button.poll(frame, !dialog) {
            self.theme_bar.panel.toggle();
        }

        let ctx = EditorContext {
            store: &mut self.store,
            persistence: self.persistence.as_ref(),
            picker: self.picker.as_mut(),
        };
        if let Some(event) = self.editor.update(frame, ctx) {
            self.apply_editor_event(event);
        }

        self.sync_with_store();
    }

    fn apply_tray(&mut self, action: TrayAction) {
        match action {
            TrayAction::ToggleMute => self.engine.toggle_mute(),
            TrayAction::SetVolume(v) => self.engine.set_volume(v),
            TrayAction::Rewind => self.rewind(),
            TrayAction::Prev => self.prev(),
            TrayAction::TogglePause => self.toggle_pause(),
            TrayAction::Stop => self.stop(),
            TrayAction::Next => self.next(),
            TrayAction::Skip => self.skip(),
        }
    }

    /// Move on when the current song has played out.
    ///
    /// Positions are unsigned and rewinding floors at zero, so there is no
    /// underflow case that would step back to the previous song.
    fn advance_at_end(&mut self) {
        if self.engine.transport() != TransportState::Playing {
            return;
        }
        if self.engine.progress() >= END_OF_SONG || self.engine.song_finished() {
            self.engine.next(&mut self.store);
        }
    }

    /// The progress bar reads zero while it is not live.
    pub fn progress_display(&self) -> ProgressDisplay {
        if !self.progress_live {
            return ProgressDisplay::default();
        }
        let duration = self.engine.duration();
        let elapsed = self.engine.position().min(duration);
        ProgressDisplay {
            fraction: self.engine.progress().clamp(0.0, 1.0),
            elapsed,
            remaining: duration.saturating_sub(elapsed),
        }
    }

    pub fn next(&mut self) {
        self.engine.next(&mut self.store);
    }

    pub fn prev(&mut self) {
        self.engine.prev(&mut self.store);
    }

    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause(&mut self.store);
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn skip(&mut self) {
        self.engine.skip(self.scrub);
    }

    pub fn rewind(&mut self) {
        self.engine.rewind(self.scrub);
    }

    pub fn volume_up(&mut self) {
        self.engine.change_volume(self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.engine.change_volume(-self.volume_step);
    }

    /// Open or close the playlist bar unless it is still moving.
    pub fn toggle_playlist_bar(&mut self) {
        let panel = &mut self.playlist_bar.panel;
        if panel.is_open() || !panel.is_visible() {
            panel.toggle();
        }
    }

    /// Open or close the theme bar unless it is still moving.
    pub fn toggle_theme_bar(&mut self) {
        let panel = &mut self.theme_bar.panel;
        if panel.is_open() || !panel.is_visible() {
            panel.toggle();
        }
    }

    /// Switch to theme `name` and put every widget back to its normal look.
    pub fn load_theme(&mut self, name: &str) {
        if !self.themes.select(name) {
            tracing::debug!("unknown theme {name:?}");
            return;
        }
        let theme = self.themes.current();
        self.tray.load_theme(theme);
        self.progress.load_theme(theme);
        self.view.load_theme(theme);
        self.playlist_bar.load_theme(theme);
        self.theme_bar.load_theme(theme);
        self.playlist_button.load_theme(theme);
        self.add_button.load_theme(theme);
        self.settings_button.load_theme(theme);
        self.editor.load_theme(theme);
        tracing::info!("theme changed to {name}");
    }

    fn apply_editor_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::PlaylistsChanged { id } => {
                tracing::debug!(%id, "playlists changed");
                self.refresh_playlists();
            }
            EditorEvent::PlaylistDeleted { id } => {
                tracing::debug!(?id, "playlist deleted");
                if !self.store.contains(self.engine.playlist_id()) {
                    let sample = self.store.sample_id();
                    self.engine.change_playlist(&mut self.store, sample);
                }
                self.refresh_playlists();
            }
        }
    }

    /// Rebuild the playlist bar and the view from the store.
    pub fn refresh_playlists(&mut self) {
        let options: Vec<(PlaylistId, String)> =
            self.store.iter().map(|p| (p.id, p.name.clone())).collect();
        self.playlist_bar.set_options(options, self.themes.current());
        self.reload_view();
        self.seen_revision = self.store.revision();
    }

    fn reload_view(&mut self) {
        if let Some(playlist) = self.store.get(self.engine.playlist_id()) {
            self.view.load(playlist, self.themes.current());
        }
    }

    /// Pick up store changes made by the engine (repaired paths, dropped songs).
    ///
    /// These stay in memory; only the editor writes the playlist file.
    fn sync_with_store(&mut self) {
        if self.store.revision() != self.seen_revision {
            self.refresh_playlists();
        } else if self.view.playlist_id() != Some(self.engine.playlist_id()) {
            self.reload_view();
        }
    }
}
