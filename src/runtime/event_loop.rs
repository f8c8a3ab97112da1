use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::MediaBackend;
use crate::config;
use crate::interaction::{Frame, Point};
use crate::ui;

/// Longest step fed to animations, e.g. after a blocking file dialog.
const MAX_STEP: f32 = 0.25;

/// Last known mouse position and left button state.
#[derive(Debug, Clone, Copy)]
struct Pointer {
    at: Point,
    down: bool,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            at: Point::new(-1.0, -1.0),
            down: false,
        }
    }
}

impl Pointer {
    fn frame(&self, dt: f32) -> Frame {
        Frame::new(self.at, self.down, dt)
    }

    /// Apply a mouse event; true when the button changed state.
    fn apply(&mut self, mouse: MouseEvent) -> bool {
        self.at = Point::cell(mouse.column, mouse.row);
        let was_down = self.down;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.down = true,
            MouseEventKind::Up(MouseButton::Left) => self.down = false,
            _ => {}
        }
        was_down != self.down
    }
}

/// Tick, draw, then drain input until the next frame is due. Returns once
/// the app asks to quit.
pub fn run<B: MediaBackend>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App<B>,
) -> anyhow::Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(settings.ui.frame_rate));
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut pointer = Pointer::default();
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(MAX_STEP);
        last = now;
        app.tick(&pointer.frame(dt));
        if app.should_quit() {
            return Ok(());
        }
        terminal.draw(|f| ui::draw(f, app))?;

        let deadline = now + frame_time;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                // Presses and releases are ticked at once so a click shorter
                // than a frame still shows both edges.
                Event::Mouse(mouse) => {
                    if pointer.apply(mouse) {
                        app.tick(&pointer.frame(0.0));
                    }
                }
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
