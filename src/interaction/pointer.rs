//! Hover/press/release tracking for a single clickable rectangle.

/// A pointer position in screen units (terminal cells, sampled at the cell centre).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of the terminal cell at `column`/`row`.
    pub fn cell(column: u16, row: u16) -> Self {
        Self {
            x: f32::from(column) + 0.5,
            y: f32::from(row) + 0.5,
        }
    }
}

/// Axis-aligned rectangle in screen units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict containment: a point lying on any edge is outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }

    /// Horizontal position of `p` inside the rectangle as a fraction in `[0, 1]`.
    pub fn fraction_x(&self, p: Point) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((p.x - self.x) / self.width).clamp(0.0, 1.0)
    }
}

/// Per-tick input threaded into every component's update call.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Frame {
    pub pointer: Point,
    pub button_down: bool,
    /// Seconds since the previous tick.
    pub dt: f32,
}

impl Frame {
    pub fn new(pointer: Point, button_down: bool, dt: f32) -> Self {
        Self {
            pointer,
            button_down,
            dt,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VisualState {
    #[default]
    Normal,
    Hover,
    Pressed,
}

/// A value per visual state, e.g. the three theme colors of a button.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual<T> {
    pub normal: T,
    pub hover: T,
    pub pressed: T,
}

impl<T> Visual<T> {
    pub fn new(normal: T, hover: T, pressed: T) -> Self {
        Self {
            normal,
            hover,
            pressed,
        }
    }

    pub fn pick(&self, state: VisualState) -> &T {
        match state {
            VisualState::Normal => &self.normal,
            VisualState::Hover => &self.hover,
            VisualState::Pressed => &self.pressed,
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PointerUpdate {
    pub hovering: bool,
    pub just_clicked: bool,
}

/// Hover/press state of one widget.
///
/// A click fires only when the press began inside the bounds while the button went
/// down, and the button is released without the pointer ever leaving the bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerState {
    hovering: bool,
    pressed: bool,
    visual: VisualState,
    button_was_down: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn visual(&self) -> VisualState {
        self.visual
    }

    /// Evaluate one frame against `bounds`.
    pub fn update(&mut self, pointer: Point, button_down: bool, bounds: Bounds) -> PointerUpdate {
        let was_down = std::mem::replace(&mut self.button_was_down, button_down);
        let inside = bounds.contains(pointer);

        if self.pressed {
            if !button_down && inside {
                self.pressed = false;
                self.hovering = true;
                self.visual = VisualState::Hover;
                return PointerUpdate {
                    hovering: true,
                    just_clicked: true,
                };
            }
            if !inside {
                // Drag-off (or release outside) cancels the pending click.
                self.cancel();
            }
            return self.snapshot();
        }

        if !button_down {
            self.hovering = inside;
            self.visual = if inside {
                VisualState::Hover
            } else {
                VisualState::Normal
            };
            return self.snapshot();
        }

        // Button is down: hover is not recomputed, a press only starts on the edge.
        if self.hovering && inside && !was_down {
            self.pressed = true;
            self.visual = VisualState::Pressed;
        }
        self.snapshot()
    }

    /// Convenience wrapper over `update` taking a whole `Frame`.
    pub fn check(&mut self, frame: &Frame, bounds: Bounds) -> PointerUpdate {
        self.update(frame.pointer, frame.button_down, bounds)
    }

    /// Record the button level for a frame in which the widget is not checked.
    ///
    /// A press in progress is dropped: its release would go unseen.
    pub fn suspend(&mut self, button_down: bool) {
        if self.pressed {
            self.cancel();
        }
        self.button_was_down = button_down;
    }

    /// Back to `Normal`, e.g. after a theme change.
    pub fn reset(&mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        self.pressed = false;
        self.hovering = false;
        self.visual = VisualState::Normal;
    }

    fn snapshot(&self) -> PointerUpdate {
        PointerUpdate {
            hovering: self.hovering,
            just_clicked: false,
        }
    }
}
