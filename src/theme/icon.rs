use ratatui::style::Color;

use crate::interaction::Visual;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconName {
    Play,
    Pause,
    Stop,
    Prev,
    Next,
    SoundOn,
    SoundOff,
    Playlist,
    Settings,
    Edit,
    Cross,
    Tick,
    PageNext,
    PagePrev,
}

/// A renderable icon: a glyph and its tint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: IconName,
    pub glyph: &'static str,
    pub tint: Color,
}

fn glyph(name: IconName) -> &'static str {
    match name {
        IconName::Play => "▶",
        IconName::Pause => "⏸",
        IconName::Stop => "■",
        IconName::Prev => "⏮",
        IconName::Next => "⏭",
        IconName::SoundOn => "🔊",
        IconName::SoundOff => "🔇",
        IconName::Playlist => "☰",
        IconName::Settings => "⚙",
        IconName::Edit => "✎",
        IconName::Cross => "✕",
        IconName::Tick => "✓",
        IconName::PageNext => "▸",
        IconName::PagePrev => "◂",
    }
}

/// Resolve `name` tinted with `tint`.
pub fn resolve(name: IconName, tint: Color) -> Icon {
    Icon {
        name,
        glyph: glyph(name),
        tint,
    }
}

/// The normal/hover/pressed variants of `name` for a color triple.
pub fn resolve_visual(name: IconName, tints: &Visual<Color>) -> Visual<Icon> {
    Visual::new(
        resolve(name, tints.normal),
        resolve(name, tints.hover),
        resolve(name, tints.pressed),
    )
}
