use crate::interaction::{
    Bounds, Clickable, Frame, ImageWidget, TextClick, TextWidget,
};
use crate::paging::Pager;
use crate::playlist::{PlaylistId, PlaylistPersistence, PlaylistStore, Song};
use crate::theme::{IconName, Theme};

use super::card::{CardAction, CardColumns, CardSlot, EditField, SongCard};
use super::input::InputField;
use super::picker::FilePicker;

const HEADER_ROW: f32 = 3.0;
const CARDS_TOP: f32 = 5.0;
const NAME_FIELD_X: f32 = 23.0;

/// The one text box that currently receives typing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextTarget {
    PlaylistName,
    Card { card: usize, field: EditField },
}

/// Changes the rest of the app has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    PlaylistsChanged { id: PlaylistId },
    PlaylistDeleted { id: Option<PlaylistId> },
}

/// What the editor needs from its owner while handling a frame.
pub struct EditorContext<'a> {
    pub store: &'a mut PlaylistStore,
    pub persistence: &'a dyn PlaylistPersistence,
    pub picker: &'a mut dyn FilePicker,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DialogAction {
    Save,
    Close,
    Delete,
    EditName,
    PagePrev,
    PageNext,
    Card(usize, CardAction),
}

/// Modal dialog that creates or edits one playlist.
///
/// Songs are edited in a draft; the store only changes on `submit` or
/// `delete_playlist`.
#[derive(Debug)]
pub struct PlaylistEditor {
    is_open: bool,
    playlist_id: Option<PlaylistId>,
    name: InputField,
    card_input: InputField,
    draft: Vec<Song>,
    cards: Pager<SongCard>,
    active: Option<TextTarget>,
    pub save: TextWidget,
    pub delete: TextWidget,
    pub close_button: ImageWidget,
    pub page_prev: ImageWidget,
    pub page_next: ImageWidget,
    columns: CardColumns,
    theme: Theme,
    button_was_down: bool,
}

impl PlaylistEditor {
    pub fn new(songs_per_page: usize, theme: &Theme) -> Self {
        let mut editor = Self {
            is_open: false,
            playlist_id: None,
            name: InputField::default(),
            card_input: InputField::default(),
            draft: Vec::new(),
            cards: Pager::new(&[], songs_per_page),
            active: None,
            save: TextWidget::new("Save", Bounds::default(), theme),
            delete: TextWidget::new("Delete playlist", Bounds::default(), theme),
            close_button: ImageWidget::new(IconName::Cross, Bounds::default(), theme),
            page_prev: ImageWidget::new(IconName::PagePrev, Bounds::default(), theme),
            page_next: ImageWidget::new(IconName::PageNext, Bounds::default(), theme),
            columns: CardColumns::default(),
            theme: theme.clone(),
            button_was_down: false,
        };
        editor.rebuild();
        editor
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The playlist being edited; `None` while composing a new one.
    pub fn playlist_id(&self) -> Option<PlaylistId> {
        self.playlist_id
    }

    pub fn name_field(&self) -> &InputField {
        &self.name
    }

    /// The text box over the card field being edited, if any.
    pub fn card_input(&self) -> Option<&InputField> {
        match self.active {
            Some(TextTarget::Card { .. }) => Some(&self.card_input),
            _ => None,
        }
    }

    pub fn active(&self) -> Option<TextTarget> {
        self.active
    }

    pub fn draft(&self) -> &[Song] {
        &self.draft
    }

    pub fn cards(&self) -> &Pager<SongCard> {
        &self.cards
    }

    /// Page buttons are only shown when the cards span several pages.
    pub fn shows_paging(&self) -> bool {
        self.cards.page_count() > 1
    }

    pub fn open_new(&mut self) {
        self.playlist_id = None;
        self.name.clear();
        self.draft.clear();
        self.rebuild();
        self.is_open = true;
    }

    pub fn edit_playlist(&mut self, store: &PlaylistStore, id: PlaylistId) {
        let Some(playlist) = store.get(id) else {
            tracing::debug!(%id, "cannot edit a playlist that is not in the store");
            return;
        };
        self.playlist_id = Some(id);
        self.name.set_text(playlist.name.clone());
        self.draft = playlist.songs.clone();
        self.rebuild();
        self.is_open = true;
    }

    /// Hide the dialog, dropping any field being edited.
    pub fn close(&mut self) {
        self.set_active(None);
        self.is_open = false;
    }

    pub fn begin_name_edit(&mut self) {
        self.commit_active();
        self.set_active(Some(TextTarget::PlaylistName));
    }

    pub fn begin_edit(&mut self, card: usize, field: EditField) {
        self.commit_active();
        let Some(c) = self.cards.get(card) else {
            tracing::debug!(card, "no such card");
            return;
        };
        self.card_input.set_text(c.value(field));
        self.card_input.bounds = c.field_bounds(field);
        self.set_active(Some(TextTarget::Card { card, field }));
    }

    /// Write the active card field back to its card and deactivate everything.
    pub fn commit_active(&mut self) {
        if let Some(TextTarget::Card { card, field }) = self.active {
            let text = self.card_input.text().to_string();
            if let Some(c) = self.cards.get_mut(card) {
                c.set_value(field, &text);
            }
        }
        self.set_active(None);
    }

    pub fn confirm_card(&mut self, card: usize) {
        self.commit_active();
        let Some(c) = self.cards.get(card) else {
            return;
        };
        match c.slot {
            CardSlot::Existing(i) if i < self.draft.len() => {
                self.draft[i] = c.song.clone();
                self.rebuild();
            }
            _ => tracing::debug!(card, "nothing to confirm"),
        }
    }

    /// Ask the picker for a file and store it on the card without a confirm step.
    pub fn pick_path(&mut self, card: usize, picker: &mut dyn FilePicker) {
        self.commit_active();
        if self.cards.get(card).is_none() {
            return;
        }
        let Some(path) = picker.pick_audio_file() else {
            tracing::debug!("no file picked");
            return;
        };
        let Some(c) = self.cards.get_mut(card) else {
            return;
        };
        c.set_path(path);
        let song = c.song.clone();
        match c.slot {
            CardSlot::Existing(i) => {
                if let Some(entry) = self.draft.get_mut(i) {
                    *entry = song;
                }
            }
            CardSlot::New => self.draft.push(song),
        }
        self.rebuild();
    }

    pub fn remove_song(&mut self, card: usize) {
        self.commit_active();
        let Some(CardSlot::Existing(i)) = self.cards.get(card).map(|c| c.slot) else {
            return;
        };
        if i < self.draft.len() {
            self.draft.remove(i);
            self.rebuild();
        }
    }

    pub fn type_char(&mut self, c: char) -> bool {
        match self.active {
            Some(TextTarget::PlaylistName) => self.name.push(c),
            Some(TextTarget::Card { .. }) => self.card_input.push(c),
            None => false,
        }
    }

    pub fn backspace(&mut self) {
        match self.active {
            Some(TextTarget::PlaylistName) => self.name.pop(),
            Some(TextTarget::Card { .. }) => self.card_input.pop(),
            None => {}
        }
    }

    pub fn clear_field(&mut self) {
        match self.active {
            Some(TextTarget::PlaylistName) => self.name.clear(),
            Some(TextTarget::Card { .. }) => self.card_input.clear(),
            None => {}
        }
    }

    /// Enter: finish typing into the active field.
    pub fn submit_key(&mut self) {
        self.commit_active();
    }

    /// Save the draft into the store and persist it.
    ///
    /// Edits that were never confirmed are dropped. An empty draft is rejected.
    pub fn submit(
        &mut self,
        store: &mut PlaylistStore,
        persistence: &dyn PlaylistPersistence,
    ) -> Option<EditorEvent> {
        self.set_active(None);
        self.rebuild();
        if self.draft.is_empty() {
            tracing::debug!("refusing to save a playlist without songs");
            return None;
        }
        let name = self.name.text().to_string();
        let songs = self.draft.clone();
        let id = match self.playlist_id {
            Some(id) if store.contains(id) => {
                if let Err(e) = store.update(id, name, songs) {
                    tracing::error!("failed to update playlist {id}: {e}");
                    return None;
                }
                id
            }
            _ => store.insert(name, songs),
        };
        if let Err(e) = persistence.save(store) {
            tracing::error!("failed to save playlists: {e}");
        }
        tracing::info!(%id, "playlist saved");
        self.playlist_id = None;
        self.close();
        Some(EditorEvent::PlaylistsChanged { id })
    }

    /// Delete the edited playlist; refused while it is the only one.
    pub fn delete_playlist(
        &mut self,
        store: &mut PlaylistStore,
        persistence: &dyn PlaylistPersistence,
    ) -> Option<EditorEvent> {
        if store.len() == 1 {
            tracing::debug!("refusing to delete the only playlist");
            return None;
        }
        let deleted = self.playlist_id.take();
        if let Some(id) = deleted {
            match store.remove(id) {
                Ok(p) => tracing::info!(%id, name = %p.name, "playlist deleted"),
                Err(e) => tracing::debug!("nothing deleted: {e}"),
            }
        }
        self.draft.clear();
        self.name.clear();
        self.rebuild();
        if let Err(e) = persistence.save(store) {
            tracing::error!("failed to save playlists: {e}");
        }
        self.close();
        Some(EditorEvent::PlaylistDeleted { id: deleted })
    }

    /// Run the dialog's pointer checks for one frame and dispatch the click.
    pub fn update(&mut self, frame: &Frame, ctx: EditorContext<'_>) -> Option<EditorEvent> {
        let pressed_now = frame.button_down && !self.button_was_down;
        self.button_was_down = frame.button_down;
        if !self.is_open {
            return None;
        }
        if pressed_now {
            self.commit_active();
        }

        match self.poll_widgets(frame)? {
            DialogAction::Save => self.submit(ctx.store, ctx.persistence),
            DialogAction::Delete => self.delete_playlist(ctx.store, ctx.persistence),
            DialogAction::Close => {
                self.close();
                None
            }
            DialogAction::EditName => {
                self.begin_name_edit();
                None
            }
            DialogAction::PagePrev => {
                self.cards.prev();
                None
            }
            DialogAction::PageNext => {
                self.cards.next();
                None
            }
            DialogAction::Card(card, action) => {
                match action {
                    CardAction::Edit(field) => self.begin_edit(card, field),
                    CardAction::PickPath => self.pick_path(card, ctx.picker),
                    CardAction::Confirm => self.confirm_card(card),
                    CardAction::Remove => self.remove_song(card),
                }
                None
            }
        }
    }

    fn poll_widgets(&mut self, frame: &Frame) -> Option<DialogAction> {
        let mut action = None;
        if self.save.interact(frame, true) == TextClick::Label {
            action = Some(DialogAction::Save);
        }
        if self.close_button.check(frame) {
            action = Some(DialogAction::Close);
        }
        let deletable = self.playlist_id.is_some();
        if self.delete.interact(frame, deletable) == TextClick::Label {
            action = Some(DialogAction::Delete);
        }
        if self.name.check(frame) {
            action = Some(DialogAction::EditName);
        }
        let paged = self.shows_paging();
        if self.page_prev.poll(frame, paged && self.cards.has_prev()) {
            action = Some(DialogAction::PagePrev);
        }
        if self.page_next.poll(frame, paged && self.cards.has_next()) {
            action = Some(DialogAction::PageNext);
        }
        let first = self.cards.absolute_index(0);
        for (slot, card) in self.cards.current_page_mut().iter_mut().enumerate() {
            if let Some(a) = card.interact(frame, true) {
                action = Some(DialogAction::Card(first + slot, a));
            }
        }
        action
    }

    /// Position every widget for a `width` x `height` cell area.
    pub fn layout(&mut self, width: u16, height: u16) {
        let (w, h) = (f32::from(width), f32::from(height));
        self.close_button.bounds = Bounds::new(w - 4.0, 1.0, 2.0, 1.0);
        self.save.bounds = Bounds::new(2.0, HEADER_ROW, 4.0, 1.0);
        self.delete.bounds = Bounds::new(w - 18.0, HEADER_ROW, 15.0, 1.0);
        let name_width = (w - NAME_FIELD_X - 20.0).clamp(1.0, 30.0);
        self.name.bounds = Bounds::new(NAME_FIELD_X, HEADER_ROW, name_width, 1.0);
        let nav_row = (CARDS_TOP + self.cards.page_size() as f32 + 1.0).min(h - 1.0);
        self.page_prev.bounds = Bounds::new(w / 2.0 - 8.0, nav_row, 2.0, 1.0);
        self.page_next.bounds = Bounds::new(w / 2.0 + 6.0, nav_row, 2.0, 1.0);
        self.columns = CardColumns::new(2.0, w - 4.0);

        self.commit_active();
        let size = self.cards.page_size().max(1);
        for i in 0..self.cards.len() {
            let row = CARDS_TOP + (i % size) as f32;
            if let Some(card) = self.cards.get_mut(i) {
                card.place(self.columns, row);
            }
        }
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.save.load_theme(theme);
        self.delete.load_theme(theme);
        self.close_button.load_theme(theme);
        self.page_prev.load_theme(theme);
        self.page_next.load_theme(theme);
        self.name.reset();
        self.card_input.reset();
        for i in 0..self.cards.len() {
            if let Some(card) = self.cards.get_mut(i) {
                card.load_theme(theme);
            }
        }
    }

    /// One card per draft song plus the trailing new-song card, showing the last page.
    fn rebuild(&mut self) {
        self.set_active(None);
        let size = self.cards.page_size().max(1);
        let row = |i: usize| CARDS_TOP + (i % size) as f32;
        let mut cards: Vec<SongCard> = self
            .draft
            .iter()
            .enumerate()
            .map(|(i, song)| SongCard::existing(i, song.clone(), self.columns, row(i), &self.theme))
            .collect();
        cards.push(SongCard::sentinel(self.columns, row(self.draft.len()), &self.theme));
        self.cards.set_items(&cards);
        self.cards.last();
    }

    fn set_active(&mut self, target: Option<TextTarget>) {
        self.active = target;
        if target == Some(TextTarget::PlaylistName) {
            self.name.activate();
        } else {
            self.name.deactivate();
        }
        if matches!(target, Some(TextTarget::Card { .. })) {
            self.card_input.activate();
        } else {
            self.card_input.deactivate();
        }
    }
}
