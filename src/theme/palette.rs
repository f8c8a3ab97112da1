use ratatui::style::Color;

use crate::interaction::Visual;

/// Every color the widgets read from the current theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub normal: Color,
    pub hover: Color,
    pub press: Color,
    pub progress_normal: Color,
    pub progress_hover: Color,
    pub progress_press: Color,
    pub background: Color,
    pub panel_background: Color,
    pub field_background: Color,
    pub field_text: Color,
}

impl Theme {
    /// Colors of buttons, labels and slider tracks.
    pub fn button_colors(&self) -> Visual<Color> {
        Visual::new(self.normal, self.hover, self.press)
    }

    /// Colors of the filled part of the progress and volume bars.
    pub fn progress_colors(&self) -> Visual<Color> {
        Visual::new(self.progress_normal, self.progress_hover, self.progress_press)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

const DEFAULT: Theme = Theme {
    name: "default",
    normal: rgb(240, 240, 240),
    hover: rgb(120, 120, 120),
    press: rgb(60, 60, 60),
    progress_normal: rgb(120, 120, 120),
    progress_hover: rgb(60, 60, 60),
    progress_press: rgb(30, 30, 30),
    background: rgb(69, 69, 69),
    panel_background: rgb(0, 0, 0),
    field_background: rgb(255, 255, 255),
    field_text: rgb(0, 0, 0),
};

static BUILTIN: [Theme; 4] = [
    DEFAULT,
    Theme {
        name: "blue",
        normal: rgb(245, 217, 37),
        hover: rgb(163, 145, 25),
        press: rgb(123, 109, 19),
        progress_normal: rgb(168, 146, 0),
        progress_hover: rgb(112, 98, 0),
        progress_press: rgb(84, 73, 0),
        background: rgb(62, 36, 244),
        panel_background: rgb(33, 13, 168),
        ..DEFAULT
    },
    Theme {
        name: "mint",
        normal: rgb(221, 255, 247),
        hover: rgb(110, 127, 123),
        progress_normal: rgb(147, 225, 216),
        background: rgb(78, 167, 163),
        panel_background: rgb(78, 167, 163),
        ..DEFAULT
    },
    Theme {
        name: "nebula",
        normal: rgb(25, 179, 184),
        hover: rgb(14, 98, 101),
        press: rgb(9, 63, 64),
        progress_normal: rgb(190, 60, 136),
        progress_hover: rgb(95, 30, 68),
        progress_press: rgb(48, 15, 34),
        background: rgb(16, 16, 76),
        panel_background: rgb(11, 11, 50),
        ..DEFAULT
    },
];

/// The selectable themes and the current choice.
#[derive(Debug, Clone)]
pub struct Themes {
    current: usize,
}

impl Default for Themes {
    fn default() -> Self {
        Self { current: 0 }
    }
}

impl Themes {
    /// Start on `name`, falling back to the default theme for unknown names.
    pub fn starting_with(name: &str) -> Self {
        let mut themes = Self::default();
        if !themes.select(name) {
            tracing::warn!("unknown theme {name:?}, using {:?}", DEFAULT.name);
        }
        themes
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|t| t.name)
    }

    pub fn current(&self) -> &Theme {
        &BUILTIN[self.current]
    }

    /// Switch to `name`; returns false (and keeps the current theme) if unknown.
    pub fn select(&mut self, name: &str) -> bool {
        match BUILTIN.iter().position(|t| t.name == name) {
            Some(i) => {
                self.current = i;
                true
            }
            None => false,
        }
    }
}
