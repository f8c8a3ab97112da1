//! UI rendering for the terminal user interface.
//!
//! Widgets carry their own bounds in cell units, so drawing is a matter of
//! putting each widget's glyph or label at its position in its current color.

use std::time::Duration;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::{App, OptionBar, ProgressDisplay};
use crate::audio::{MediaBackend, TransportState};
use crate::editor::PlaylistEditor;
use crate::interaction::{Bounds, ImageWidget, Slider, TextWidget};
use crate::paging::Pager;
use crate::theme::Theme;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

/// Format a `Duration` as `M:SS`.
fn format_mss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The part of `bounds` that lies on screen.
fn clip(bounds: Bounds, area: Rect) -> Option<Rect> {
    let x0 = bounds.x.floor().max(0.0);
    let y0 = bounds.y.floor().max(0.0);
    let x1 = (bounds.x + bounds.width).ceil().min(f32::from(area.width));
    let y1 = (bounds.y + bounds.height).ceil().min(f32::from(area.height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

/// Write `text` at a (possibly off-screen) cell position, cutting what does not fit.
fn put(buf: &mut Buffer, x: f32, y: f32, text: &str, style: Style) {
    let area = buf.area;
    let (x, y) = (x.floor(), y.floor());
    if y < 0.0 || y >= f32::from(area.height) || x >= f32::from(area.width) {
        return;
    }
    let skip = if x < 0.0 { (-x) as usize } else { 0 };
    let x = x.max(0.0) as u16;
    let text: String = text.chars().skip(skip).collect();
    buf.set_stringn(x, y as u16, text, usize::from(area.width - x), style);
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn draw_icon(buf: &mut Buffer, w: &ImageWidget) {
    let icon = w.icon();
    put(buf, w.bounds.x, w.bounds.y, icon.glyph, fg(icon.tint));
}

fn draw_text(buf: &mut Buffer, w: &TextWidget) {
    put(buf, w.bounds.x, w.bounds.y, &w.label, fg(w.color()));
    if let Some(trailing) = w.trailing.as_ref().filter(|_| w.shows_trailing()) {
        draw_icon(buf, trailing);
    }
}

/// A horizontal bar filled to `fraction`.
fn draw_bar(buf: &mut Buffer, slider: &Slider, fraction: f32) {
    let b = slider.bounds;
    let cells = b.width.max(0.0) as usize;
    let filled = ((fraction.clamp(0.0, 1.0) * b.width).round() as usize).min(cells);
    put(buf, b.x, b.y, &"─".repeat(cells), fg(slider.track_color()));
    put(buf, b.x, b.y, &"━".repeat(filled), fg(slider.fill_color()));
}

/// Page buttons and the "Page n/m" label between them; disabled buttons are dimmed.
fn draw_paging<T: Clone>(buf: &mut Buffer, pager: &Pager<T>, prev: &ImageWidget, next: &ImageWidget) {
    let dim = |w: &ImageWidget, enabled: bool| {
        let icon = w.icon();
        let mut style = fg(icon.tint);
        if !enabled {
            style = style.add_modifier(Modifier::DIM);
        }
        (icon.glyph, style)
    };
    let (glyph, style) = dim(prev, pager.has_prev());
    put(buf, prev.bounds.x, prev.bounds.y, glyph, style);
    let (glyph, style) = dim(next, pager.has_next());
    put(buf, next.bounds.x, next.bounds.y, glyph, style);
    let label = pager.label();
    let gap_start = prev.bounds.x + prev.bounds.width;
    let gap = next.bounds.x - gap_start;
    let x = gap_start + ((gap - label.chars().count() as f32) / 2.0).floor();
    put(buf, x, prev.bounds.y, &label, fg(next.icon().tint));
}

/// Render the entire UI for `app`.
pub fn draw<B: MediaBackend>(frame: &mut Frame, app: &App<B>) {
    let area = frame.area();
    let theme = app.theme();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!("Terminal too small (need {MIN_WIDTH}x{MIN_HEIGHT})"))
            .alignment(Alignment::Center)
            .style(fg(theme.normal));
        frame.render_widget(msg, Rect::new(0, area.height / 2, area.width, 1));
        return;
    }

    let buf = frame.buffer_mut();
    draw_main(buf, app, theme);
    draw_bar_panel(buf, &app.playlist_bar, theme);

    if app.theme_bar.panel.draws_scrim() {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
    draw_bar_panel(buf, &app.theme_bar, theme);
    draw_icon(buf, &app.settings_button);

    if app.editor.is_open() {
        frame.render_widget(Clear, area);
        draw_editor(frame, &app.editor, theme);
    }
}

fn draw_main<B: MediaBackend>(buf: &mut Buffer, app: &App<B>, theme: &Theme) {
    draw_icon(buf, &app.playlist_button);
    draw_text(buf, &app.add_button);

    let view = &app.view;
    let title_style = fg(theme.normal).add_modifier(Modifier::BOLD);
    put(buf, view.area().x, view.title_row(), &view.title, title_style);
    let playing = (view.playlist_id() == Some(app.engine.playlist_id())
        && app.engine.transport() != TransportState::Stopped)
        .then(|| app.engine.track_index());
    for tile in view.tiles().current_page() {
        let b = tile.title.bounds;
        let mut style = fg(tile.title.color());
        if playing == Some(tile.index) {
            style = style.add_modifier(Modifier::BOLD);
            put(buf, b.x - 2.0, b.y, "▶", fg(theme.hover));
        }
        put(buf, b.x, b.y, &tile.title.label, style);
        put(buf, b.x + 2.0, b.y + 1.0, &tile.artist, fg(theme.hover));
    }
    if view.shows_paging() {
        draw_paging(buf, view.tiles(), &view.page_prev, &view.page_next);
    }

    let progress = app.progress.bounds;
    if app.engine.is_inert() {
        put(buf, progress.x, progress.y - 2.0, "Playback disabled: no playable songs", fg(theme.press));
    } else if let Some(song) = app.engine.now_playing(&app.store) {
        let line = format!("{} · {}", song.name, song.artist);
        put(buf, progress.x, progress.y - 2.0, &line, title_style);
    }
    let ProgressDisplay {
        fraction,
        elapsed,
        remaining,
    } = app.progress_display();
    draw_bar(buf, &app.progress, fraction);
    let label_style = fg(theme.normal);
    put(buf, progress.x, progress.y + 1.0, &format_mss(elapsed), label_style);
    let remaining = format_mss(remaining);
    let right = progress.x + progress.width - remaining.chars().count() as f32;
    put(buf, right, progress.y + 1.0, &remaining, label_style);

    let tray = &app.tray;
    draw_icon(buf, &tray.sound);
    draw_bar(buf, &tray.volume, app.engine.volume());
    draw_text(buf, &tray.rewind);
    draw_icon(buf, &tray.prev);
    draw_icon(buf, &tray.play);
    draw_icon(buf, &tray.stop);
    draw_icon(buf, &tray.next);
    draw_text(buf, &tray.skip);
}

fn draw_bar_panel<K: Copy>(buf: &mut Buffer, bar: &OptionBar<K>, theme: &Theme) {
    if !bar.panel.is_visible() {
        return;
    }
    let area = buf.area;
    let bounds = Bounds::new(bar.x(), 0.0, bar.panel.width(), f32::from(area.height));
    let Some(rect) = clip(bounds, area) else {
        return;
    };
    Clear.render(rect, buf);
    buf.set_style(rect, Style::default().bg(theme.panel_background));
    let title_style = fg(theme.normal).add_modifier(Modifier::BOLD);
    put(buf, bar.x() + 2.0, 1.0, bar.title, title_style);
    for option in bar.options().current_page() {
        draw_text(buf, &option.widget);
    }
    if bar.shows_paging() {
        draw_paging(buf, bar.options(), &bar.page_prev, &bar.page_next);
    }
}

fn draw_editor(frame: &mut Frame, editor: &PlaylistEditor, theme: &Theme) {
    let area = frame.area();
    let title = if editor.playlist_id().is_some() {
        " edit playlist "
    } else {
        " new playlist "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(theme.panel_background).fg(theme.normal));
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    draw_icon(buf, &editor.close_button);
    draw_text(buf, &editor.save);
    if editor.playlist_id().is_some() {
        draw_text(buf, &editor.delete);
    }

    let field = Style::default().bg(theme.field_background).fg(theme.field_text);
    let name = editor.name_field();
    put(buf, name.bounds.x - 15.0, name.bounds.y, "Playlist name:", fg(theme.normal));
    draw_input(buf, name.bounds, name.text(), name.is_active(), field);

    for card in editor.cards().current_page() {
        draw_text(buf, &card.name);
        draw_text(buf, &card.artist);
        draw_text(buf, &card.path);
        if card.is_modified() {
            draw_icon(buf, &card.confirm);
        }
        if let Some(delete) = &card.delete {
            draw_icon(buf, delete);
        }
    }
    if let Some(input) = editor.card_input() {
        draw_input(buf, input.bounds, input.text(), true, field);
    }
    if editor.shows_paging() {
        draw_paging(buf, editor.cards(), &editor.page_prev, &editor.page_next);
    }
}

/// A text box; the tail of long text stays visible while typing.
fn draw_input(buf: &mut Buffer, bounds: Bounds, text: &str, active: bool, style: Style) {
    let Some(rect) = clip(bounds, buf.area) else {
        return;
    };
    buf.set_style(rect, style);
    let mut shown = text.to_string();
    if active {
        shown.push('_');
    }
    let width = usize::from(rect.width);
    let count = shown.chars().count();
    let tail: String = shown.chars().skip(count.saturating_sub(width)).collect();
    put(buf, bounds.x, bounds.y, &tail, style);
}
