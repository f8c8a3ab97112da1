use std::path::PathBuf;

use crate::interaction::{Bounds, Clickable, Frame, ImageWidget, TextClick, TextWidget};
use crate::library::shorten;
use crate::playlist::{DEFAULT_ARTIST, DEFAULT_TITLE, Song};
use crate::theme::{IconName, Theme};

pub const NEW_SONG_NAME: &str = "Add a new song";
pub const NEW_SONG_PATH: &str = "Add a path";

/// The text fields of a card that can be typed into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditField {
    Name,
    Artist,
}

/// Where a card's song lives in the draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardSlot {
    Existing(usize),
    /// The trailing card that appends a new song.
    New,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardAction {
    Edit(EditField),
    PickPath,
    Confirm,
    Remove,
}

/// Horizontal layout shared by every card row.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CardColumns {
    left: f32,
    width: f32,
}

impl CardColumns {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width: width.max(16.0),
        }
    }

    fn name(&self, row: f32) -> Bounds {
        Bounds::new(self.left, row, (self.width * 0.3).floor(), 1.0)
    }

    fn artist(&self, row: f32) -> Bounds {
        let name = self.name(row);
        Bounds::new(name.x + name.width + 1.0, row, (self.width * 0.25).floor(), 1.0)
    }

    fn path(&self, row: f32) -> Bounds {
        let artist = self.artist(row);
        let x = artist.x + artist.width + 1.0;
        Bounds::new(x, row, (self.left + self.width - 6.0 - x).max(1.0), 1.0)
    }

    fn confirm(&self, row: f32) -> Bounds {
        Bounds::new(self.left + self.width - 5.0, row, 2.0, 1.0)
    }

    fn delete(&self, row: f32) -> Bounds {
        Bounds::new(self.left + self.width - 2.0, row, 2.0, 1.0)
    }
}

fn label(text: &str, bounds: Bounds) -> String {
    shorten(text, bounds.width as usize)
}

/// One editable row of the playlist editor.
#[derive(Debug, Clone)]
pub struct SongCard {
    pub slot: CardSlot,
    pub song: Song,
    modified: bool,
    pub name: TextWidget,
    pub artist: TextWidget,
    pub path: TextWidget,
    pub confirm: ImageWidget,
    pub delete: Option<ImageWidget>,
}

impl SongCard {
    pub fn existing(
        index: usize,
        song: Song,
        columns: CardColumns,
        row: f32,
        theme: &Theme,
    ) -> Self {
        let path = song.path.display().to_string();
        let mut card = Self::build(CardSlot::Existing(index), song, &path, columns, row, theme);
        card.delete = Some(ImageWidget::new(IconName::Cross, columns.delete(row), theme));
        card
    }

    pub fn sentinel(columns: CardColumns, row: f32, theme: &Theme) -> Self {
        let song = Song::new(NEW_SONG_NAME, PathBuf::new()).by(DEFAULT_ARTIST);
        Self::build(CardSlot::New, song, NEW_SONG_PATH, columns, row, theme)
    }

    fn build(
        slot: CardSlot,
        song: Song,
        path_label: &str,
        columns: CardColumns,
        row: f32,
        theme: &Theme,
    ) -> Self {
        let (name, artist, path) = (columns.name(row), columns.artist(row), columns.path(row));
        Self {
            slot,
            name: TextWidget::new(label(&song.name, name), name, theme),
            artist: TextWidget::new(label(&song.artist, artist), artist, theme),
            path: TextWidget::new(label(path_label, path), path, theme),
            confirm: ImageWidget::new(IconName::Tick, columns.confirm(row), theme),
            delete: None,
            song,
            modified: false,
        }
    }

    /// Move the card to `row` of `columns`, keeping its contents and edit state.
    pub fn place(&mut self, columns: CardColumns, row: f32) {
        self.name.bounds = columns.name(row);
        self.artist.bounds = columns.artist(row);
        self.path.bounds = columns.path(row);
        self.confirm.bounds = columns.confirm(row);
        if let Some(d) = self.delete.as_mut() {
            d.bounds = columns.delete(row);
        }
        self.name.label = label(&self.song.name, self.name.bounds);
        self.artist.label = label(&self.song.artist, self.artist.bounds);
        let path = if self.song.path.as_os_str().is_empty() {
            NEW_SONG_PATH.to_string()
        } else {
            self.song.path.display().to_string()
        };
        self.path.label = label(&path, self.path.bounds);
    }

    pub fn is_sentinel(&self) -> bool {
        self.slot == CardSlot::New
    }

    /// Whether the confirm icon is shown.
    pub fn is_modified(&self) -> bool {
        self.modified && !self.is_sentinel()
    }

    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.song.name,
            EditField::Artist => &self.song.artist,
        }
    }

    pub fn field_bounds(&self, field: EditField) -> Bounds {
        match field {
            EditField::Name => self.name.bounds,
            EditField::Artist => self.artist.bounds,
        }
    }

    /// Store a typed value; empty input falls back to the field's default.
    pub fn set_value(&mut self, field: EditField, text: &str) {
        let text = text.trim();
        match field {
            EditField::Name => {
                self.song.name = if text.is_empty() { DEFAULT_TITLE } else { text }.to_string();
                self.name.label = label(&self.song.name, self.name.bounds);
            }
            EditField::Artist => {
                self.song.artist = if text.is_empty() { DEFAULT_ARTIST } else { text }.to_string();
                self.artist.label = label(&self.song.artist, self.artist.bounds);
            }
        }
        self.modified = true;
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path.label = label(&path.display().to_string(), self.path.bounds);
        self.song.path = path;
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.name.load_theme(theme);
        self.artist.load_theme(theme);
        self.path.load_theme(theme);
        self.confirm.load_theme(theme);
        if let Some(d) = self.delete.as_mut() {
            d.load_theme(theme);
        }
    }

    /// Run the pointer checks of every widget on the card.
    pub fn interact(&mut self, frame: &Frame, enabled: bool) -> Option<CardAction> {
        let mut action = None;
        if self.name.interact(frame, enabled) == TextClick::Label {
            action = Some(CardAction::Edit(EditField::Name));
        }
        if self.artist.interact(frame, enabled) == TextClick::Label {
            action = Some(CardAction::Edit(EditField::Artist));
        }
        if self.path.interact(frame, enabled) == TextClick::Label {
            action = Some(CardAction::PickPath);
        }
        let confirm_live = enabled && self.is_modified();
        if self.confirm.poll(frame, confirm_live) {
            action = Some(CardAction::Confirm);
        }
        let removed = self.delete.as_mut().is_some_and(|d| d.poll(frame, enabled));
        if removed {
            action = Some(CardAction::Remove);
        }
        action
    }
}
