use crate::interaction::{Bounds, Clickable, Frame, ImageWidget, TextClick, TextWidget};
use crate::library::shorten;
use crate::paging::Pager;
use crate::playlist::{Playlist, PlaylistId};
use crate::theme::{IconName, Theme};

const TITLE_ROW: f32 = 2.0;
const TILES_TOP: f32 = 4.0;
const TILE_HEIGHT: f32 = 2.0;
const MARGIN: f32 = 4.0;

/// One song of the shown playlist.
#[derive(Debug, Clone)]
pub struct SongTile {
    /// Position in the playlist.
    pub index: usize,
    pub title: TextWidget,
    pub artist: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Play(usize),
    PagePrev,
    PageNext,
}

/// The songs of the active playlist, a page at a time.
#[derive(Debug, Clone)]
pub struct PlaylistView {
    playlist: Option<PlaylistId>,
    pub title: String,
    tiles: Pager<SongTile>,
    pub page_prev: ImageWidget,
    pub page_next: ImageWidget,
    area: Bounds,
}

impl PlaylistView {
    pub fn new(songs_per_page: usize, theme: &Theme) -> Self {
        Self {
            playlist: None,
            title: String::new(),
            tiles: Pager::new(&[], songs_per_page),
            page_prev: ImageWidget::new(IconName::PagePrev, Bounds::default(), theme),
            page_next: ImageWidget::new(IconName::PageNext, Bounds::default(), theme),
            area: Bounds::default(),
        }
    }

    pub fn playlist_id(&self) -> Option<PlaylistId> {
        self.playlist
    }

    pub fn tiles(&self) -> &Pager<SongTile> {
        &self.tiles
    }

    pub fn title_row(&self) -> f32 {
        TITLE_ROW
    }

    pub fn area(&self) -> Bounds {
        self.area
    }

    pub fn shows_paging(&self) -> bool {
        self.tiles.page_count() > 1
    }

    /// Show `playlist`, starting from its first page.
    pub fn load(&mut self, playlist: &Playlist, theme: &Theme) {
        self.playlist = Some(playlist.id);
        self.title = playlist.name.clone();
        let width = self.area.width;
        let size = self.tiles.page_size();
        let tiles: Vec<SongTile> = playlist
            .songs
            .iter()
            .enumerate()
            .map(|(index, song)| {
                let bounds = self.tile_bounds(index % size);
                SongTile {
                    index,
                    title: TextWidget::new(shorten(&song.name, width as usize), bounds, theme),
                    artist: shorten(&song.artist, width as usize),
                }
            })
            .collect();
        self.tiles = Pager::new(&tiles, size);
    }

    /// Place the view inside a `width` x `height` area moved right by `shift`.
    pub fn layout(&mut self, width: f32, shift: f32) {
        let size = self.tiles.page_size();
        self.area = Bounds::new(
            MARGIN + shift,
            TITLE_ROW,
            (width - 2.0 * MARGIN).max(1.0),
            TILES_TOP - TITLE_ROW + size as f32 * TILE_HEIGHT,
        );
        let nav_row = TILES_TOP + size as f32 * TILE_HEIGHT + 1.0;
        let centre = (self.area.x + self.area.width / 2.0).floor();
        self.page_prev.bounds = Bounds::new(centre - 8.0, nav_row, 2.0, 1.0);
        self.page_next.bounds = Bounds::new(centre + 6.0, nav_row, 2.0, 1.0);
        for i in 0..self.tiles.len() {
            let bounds = self.tile_bounds(i % size);
            if let Some(tile) = self.tiles.get_mut(i) {
                tile.title.bounds = bounds;
            }
        }
    }

    fn tile_bounds(&self, slot: usize) -> Bounds {
        Bounds::new(
            self.area.x,
            TILES_TOP + slot as f32 * TILE_HEIGHT,
            self.area.width,
            TILE_HEIGHT,
        )
    }

    pub fn poll(&mut self, frame: &Frame, enabled: bool) -> Option<ViewAction> {
        let mut action = None;
        for tile in self.tiles.current_page_mut() {
            if tile.title.interact(frame, enabled) == TextClick::Label {
                action = Some(ViewAction::Play(tile.index));
            }
        }
        let paged = enabled && self.shows_paging();
        if self.page_prev.poll(frame, paged && self.tiles.has_prev()) {
            action = Some(ViewAction::PagePrev);
        }
        if self.page_next.poll(frame, paged && self.tiles.has_next()) {
            action = Some(ViewAction::PageNext);
        }
        action
    }

    pub fn prev_page(&mut self) {
        self.tiles.prev();
    }

    pub fn next_page(&mut self) {
        self.tiles.next();
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        for i in 0..self.tiles.len() {
            if let Some(tile) = self.tiles.get_mut(i) {
                tile.title.load_theme(theme);
            }
        }
        self.page_prev.load_theme(theme);
        self.page_next.load_theme(theme);
    }
}
