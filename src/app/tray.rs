use crate::audio::TransportState;
use crate::interaction::{Bounds, Clickable, Frame, ImageWidget, Slider, TextClick, TextWidget};
use crate::theme::{IconName, Theme};

const VOLUME_WIDTH: f32 = 10.0;
const TRAY_WIDTH: f32 = 36.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TrayAction {
    ToggleMute,
    SetVolume(f32),
    Rewind,
    Prev,
    TogglePause,
    Stop,
    Next,
    Skip,
}

/// Transport buttons and the volume slider along the bottom row.
#[derive(Debug, Clone)]
pub struct Tray {
    pub sound: ImageWidget,
    pub volume: Slider,
    pub rewind: TextWidget,
    pub prev: ImageWidget,
    pub play: ImageWidget,
    pub stop: ImageWidget,
    pub next: ImageWidget,
    pub skip: TextWidget,
}

impl Tray {
    pub fn new(scrub_seconds: u64, theme: &Theme) -> Self {
        let none = Bounds::default();
        Self {
            sound: ImageWidget::new(IconName::SoundOn, none, theme),
            volume: Slider::new(none, theme),
            rewind: TextWidget::new(format!("-{scrub_seconds}s"), none, theme),
            prev: ImageWidget::new(IconName::Prev, none, theme),
            play: ImageWidget::new(IconName::Play, none, theme),
            stop: ImageWidget::new(IconName::Stop, none, theme),
            next: ImageWidget::new(IconName::Next, none, theme),
            skip: TextWidget::new(format!("+{scrub_seconds}s"), none, theme),
        }
    }

    /// Centre the tray on `row` of a `width` wide area moved right by `shift`.
    pub fn layout(&mut self, width: f32, row: f32, shift: f32) {
        let mut x = ((width - TRAY_WIDTH) / 2.0).floor().max(0.0) + shift;
        let mut place = |w: f32, gap: f32| {
            let b = Bounds::new(x, row, w, 1.0);
            x += w + gap;
            b
        };
        self.sound.bounds = place(2.0, 1.0);
        self.volume.bounds = place(VOLUME_WIDTH, 2.0);
        self.rewind.bounds = place(self.rewind.label.chars().count() as f32, 1.0);
        self.prev.bounds = place(2.0, 1.0);
        self.play.bounds = place(2.0, 1.0);
        self.stop.bounds = place(2.0, 1.0);
        self.next.bounds = place(2.0, 1.0);
        self.skip.bounds = place(self.skip.label.chars().count() as f32, 0.0);
    }

    /// Match the play and sound icons to the engine state.
    pub fn sync(&mut self, transport: TransportState, muted: bool, theme: &Theme) {
        let play = if transport == TransportState::Playing {
            IconName::Pause
        } else {
            IconName::Play
        };
        self.play.set_icon(play, theme);
        let sound = if muted {
            IconName::SoundOff
        } else {
            IconName::SoundOn
        };
        self.sound.set_icon(sound, theme);
    }

    pub fn poll(&mut self, frame: &Frame, enabled: bool) -> Option<TrayAction> {
        let mut action = None;
        if self.sound.poll(frame, enabled) {
            action = Some(TrayAction::ToggleMute);
        }
        if let Some(f) = self.volume.interact(frame, enabled) {
            action = Some(TrayAction::SetVolume(f));
        }
        if self.rewind.interact(frame, enabled) == TextClick::Label {
            action = Some(TrayAction::Rewind);
        }
        if self.prev.poll(frame, enabled) {
            action = Some(TrayAction::Prev);
        }
        if self.play.poll(frame, enabled) {
            action = Some(TrayAction::TogglePause);
        }
        if self.stop.poll(frame, enabled) {
            action = Some(TrayAction::Stop);
        }
        if self.next.poll(frame, enabled) {
            action = Some(TrayAction::Next);
        }
        if self.skip.interact(frame, enabled) == TextClick::Label {
            action = Some(TrayAction::Skip);
        }
        action
    }

    pub fn load_theme(&mut self, theme: &Theme) {
        self.sound.load_theme(theme);
        self.volume.load_theme(theme);
        self.rewind.load_theme(theme);
        self.prev.load_theme(theme);
        self.play.load_theme(theme);
        self.stop.load_theme(theme);
        self.next.load_theme(theme);
        self.skip.load_theme(theme);
    }
}
