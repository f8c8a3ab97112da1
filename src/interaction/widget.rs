//! Clickable widget variants built on `PointerState`.

use ratatui::style::Color;

use crate::theme::{Icon, IconName, Theme, resolve_visual};

use super::pointer::{Bounds, Frame, PointerState, Visual, VisualState};

/// The capability shared by everything that can be hovered and clicked.
pub trait Clickable {
    fn pointer(&self) -> &PointerState;
    fn pointer_mut(&mut self) -> &mut PointerState;
    fn bounds(&self) -> Bounds;

    /// Evaluate `frame`; true when a click completed this frame.
    fn check(&mut self, frame: &Frame) -> bool {
        let bounds = self.bounds();
        self.pointer_mut().check(frame, bounds).just_clicked
    }

    /// Check when `enabled`, otherwise only record the button level.
    fn poll(&mut self, frame: &Frame, enabled: bool) -> bool {
        if enabled {
            self.check(frame)
        } else {
            self.pointer_mut().suspend(frame.button_down);
            false
        }
    }

    fn visual(&self) -> VisualState {
        self.pointer().visual()
    }

    fn hovering(&self) -> bool {
        self.pointer().hovering()
    }

    fn reset(&mut self) {
        self.pointer_mut().reset();
    }
}

/// An icon button.
#[derive(Debug, Clone)]
pub struct ImageWidget {
    pub bounds: Bounds,
    name: IconName,
    icons: Visual<Icon>,
    pointer: PointerState,
}

impl ImageWidget {
    pub fn new(name: IconName, bounds: Bounds, theme: &Theme) -> Self {
        Self {
            bounds,
            name,
            icons: resolve_visual(name, &theme.button_colors()),
            pointer: PointerState::new(),
        }
    }

    pub fn name(&self) -> IconName {
        self.name
    }

    /// The icon for the current visual state.
    pub fn icon(&self) -> &Icon {
        self.icons.pick(self.pointer.visual())
    }

    /// Swap the icon (e.g. play/pause) keeping the interaction state.
    pub fn set_icon(&mut self, name: IconName, theme: &Theme) {
        if self.name != name {
            self.name = name;
            self.icons = resolve_visual(name, &theme.button_colors());
        }
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.icons = resolve_visual(self.name, &theme.button_colors());
        self.pointer.reset();
    }
}

impl Clickable for ImageWidget {
    fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Which part of a `TextWidget` was clicked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextClick {
    None,
    Label,
    Trailing,
}

/// A text button, optionally carrying a trailing icon shown while hovered.
#[derive(Debug, Clone)]
pub struct TextWidget {
    pub label: String,
    pub bounds: Bounds,
    pub trailing: Option<ImageWidget>,
    colors: Visual<Color>,
    pointer: PointerState,
}

impl TextWidget {
    pub fn new(label: impl Into<String>, bounds: Bounds, theme: &Theme) -> Self {
        Self {
            label: label.into(),
            bounds,
            trailing: None,
            colors: theme.button_colors(),
            pointer: PointerState::new(),
        }
    }

    pub fn with_trailing(mut self, trailing: ImageWidget) -> Self {
        self.trailing = Some(trailing);
        self
    }

    pub fn color(&self) -> Color {
        *self.colors.pick(self.pointer.visual())
    }

    /// Whether the trailing icon should be drawn this frame.
    pub fn shows_trailing(&self) -> bool {
        self.trailing.is_some() && self.pointer.hovering()
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.colors = theme.button_colors();
        self.pointer.reset();
        if let Some(t) = self.trailing.as_mut() {
            t.load_theme(theme);
        }
    }

    /// Evaluate the label and its trailing icon.
    ///
    /// The label does not click while the trailing icon is hovered, and the
    /// trailing icon is only live while the label is hovered.
    pub fn interact(&mut self, frame: &Frame, enabled: bool) -> TextClick {
        let trailing_hovered = self.trailing.as_ref().is_some_and(|t| t.hovering());
        let label_clicked = self.poll(frame, enabled) && !trailing_hovered;

        let hovering = self.pointer.hovering();
        let mut trailing_clicked = false;
        if let Some(t) = self.trailing.as_mut() {
            if enabled && hovering {
                trailing_clicked = t.check(frame);
            } else {
                t.pointer_mut().reset();
                t.pointer_mut().suspend(frame.button_down);
            }
        }

        if trailing_clicked {
            TextClick::Trailing
        } else if label_clicked {
            TextClick::Label
        } else {
            TextClick::None
        }
    }
}

impl Clickable for TextWidget {
    fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A horizontal bar that reports where along its width it was clicked.
#[derive(Debug, Clone)]
pub struct Slider {
    pub bounds: Bounds,
    track: Visual<Color>,
    fill: Visual<Color>,
    pointer: PointerState,
}

impl Slider {
    pub fn new(bounds: Bounds, theme: &Theme) -> Self {
        Self {
            bounds,
            track: theme.button_colors(),
            fill: theme.progress_colors(),
            pointer: PointerState::new(),
        }
    }

    pub fn track_color(&self) -> Color {
        *self.track.pick(self.pointer.visual())
    }

    pub fn fill_color(&self) -> Color {
        *self.fill.pick(self.pointer.visual())
    }

    /// The clicked fraction in `[0, 1]`, if a click completed this frame.
    pub fn interact(&mut self, frame: &Frame, enabled: bool) -> Option<f32> {
        if self.poll(frame, enabled) {
            Some(self.bounds.fraction_x(frame.pointer))
        } else {
            None
        }
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.track = theme.button_colors();
        self.fill = theme.progress_colors();
        self.pointer.reset();
    }
}

impl Clickable for Slider {
    fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
