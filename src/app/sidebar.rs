use crate::interaction::{Bounds, Clickable, Frame, ImageWidget, TextClick, TextWidget};
use crate::library::shorten;
use crate::paging::Pager;
use crate::panel::{PanelTick, SlidePanel};
use crate::theme::{IconName, Theme};

const OPTIONS_TOP: f32 = 3.0;
/// Longest option label before it is cut with "...".
const LABEL_LIMIT: usize = 16;

#[derive(Debug, Clone)]
pub struct BarOption<K> {
    pub key: K,
    pub widget: TextWidget,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BarAction<K> {
    Select(K),
    /// The trailing edit icon of an option was clicked.
    Edit(K),
    PagePrev,
    PageNext,
}

/// A titled, paged list of options on a slide panel.
#[derive(Debug, Clone)]
pub struct OptionBar<K> {
    pub title: &'static str,
    pub panel: SlidePanel,
    options: Pager<BarOption<K>>,
    pub page_prev: ImageWidget,
    pub page_next: ImageWidget,
    /// Left edge of the panel when fully open.
    anchor: f32,
    editable: bool,
}

impl<K: Copy> OptionBar<K> {
    pub fn new(title: &'static str, panel: SlidePanel, per_page: usize, theme: &Theme) -> Self {
        Self {
            title,
            panel,
            options: Pager::new(&[], per_page),
            page_prev: ImageWidget::new(IconName::PagePrev, Bounds::default(), theme),
            page_next: ImageWidget::new(IconName::PageNext, Bounds::default(), theme),
            anchor: 0.0,
            editable: false,
        }
    }

    /// Give every option a trailing edit icon.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    pub fn options(&self) -> &Pager<BarOption<K>> {
        &self.options
    }

    /// Left edge of the panel this frame.
    pub fn x(&self) -> f32 {
        self.anchor + self.panel.offset()
    }

    pub fn shows_paging(&self) -> bool {
        self.options.page_count() > 1
    }

    /// Replace the options, keeping the current page where possible.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = (K, String)>, theme: &Theme) {
        let options: Vec<BarOption<K>> = options
            .into_iter()
            .map(|(key, label)| {
                let mut widget = TextWidget::new(shorten(&label, LABEL_LIMIT), Bounds::default(), theme);
                if self.editable {
                    widget = widget.with_trailing(ImageWidget::new(IconName::Edit, Bounds::default(), theme));
                }
                BarOption { key, widget }
            })
            .collect();
        self.options.set_items(&options);
        self.place();
    }

    /// Anchor the open panel at column `anchor`.
    pub fn layout(&mut self, anchor: f32) {
        self.anchor = anchor;
        self.place();
    }

    /// Move the panel one frame and keep its widgets on it.
    pub fn advance(&mut self, dt: f32) -> PanelTick {
        let tick = self.panel.advance(dt);
        self.place();
        tick
    }

    fn place(&mut self) {
        let x = self.x();
        let width = (self.panel.width() - 4.0).max(1.0);
        let size = self.options.page_size();
        for i in 0..self.options.len() {
            let row = OPTIONS_TOP + (i % size) as f32;
            if let Some(option) = self.options.get_mut(i) {
                option.widget.bounds = Bounds::new(x + 2.0, row, width, 1.0);
                if let Some(edit) = option.widget.trailing.as_mut() {
                    edit.bounds = Bounds::new(x + 2.0 + width - 2.0, row, 2.0, 1.0);
                }
            }
        }
        let nav_row = OPTIONS_TOP + size as f32 + 1.0;
        let centre = (x + self.panel.width() / 2.0).floor();
        self.page_prev.bounds = Bounds::new(centre - 6.0, nav_row, 2.0, 1.0);
        self.page_next.bounds = Bounds::new(centre + 4.0, nav_row, 2.0, 1.0);
    }

    /// Pointer checks for the options; only live while the panel is fully open.
    pub fn poll(&mut self, frame: &Frame, enabled: bool) -> Option<BarAction<K>> {
        let live = enabled && self.panel.interactive();
        let mut action = None;
        for option in self.options.current_page_mut() {
            match option.widget.interact(frame, live) {
                TextClick::Label => action = Some(BarAction::Select(option.key)),
                TextClick::Trailing => action = Some(BarAction::Edit(option.key)),
                TextClick::None => {}
            }
        }
        let paged = live && self.shows_paging();
        if self.page_prev.poll(frame, paged && self.options.has_prev()) {
            action = Some(BarAction::PagePrev);
        }
        if self.page_next.poll(frame, paged && self.options.has_next()) {
            action = Some(BarAction::PageNext);
        }
        action
    }

    pub fn prev_page(&mut self) {
        self.options.prev();
    }

    pub fn next_page(&mut self) {
        self.options.next();
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        for i in 0..self.options.len() {
            if let Some(option) = self.options.get_mut(i) {
                option.widget.load_theme(theme);
            }
        }
        self.page_prev.load_theme(theme);
        self.page_next.load_theme(theme);
    }
}
