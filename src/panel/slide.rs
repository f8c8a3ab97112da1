/// Which side the panel hides toward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Hidden past the left edge, slides in to the right.
    Right,
    /// Hidden past the right edge, slides in to the left.
    Left,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Result of one animation step.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PanelTick {
    /// Horizontal shift to apply to the rest of the layout this tick.
    pub shift: f32,
    pub visible: bool,
}

const SNAP: f32 = 1.0;
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct SlidePanel {
    width: f32,
    direction: Direction,
    speed: f32,
    shifts_content: bool,
    scrim: bool,
    phase: PanelPhase,
    offset: f32,
}

impl SlidePanel {
    pub fn new(width: f32, direction: Direction, speed: f32) -> Self {
        Self {
            width,
            direction,
            speed,
            shifts_content: false,
            scrim: false,
            phase: PanelPhase::Closed,
            offset: direction.sign() * width,
        }
    }

    /// Report the distance moved as a content shift.
    pub fn shifting_content(mut self) -> Self {
        self.shifts_content = true;
        self
    }

    /// Draw a backdrop behind the panel while it is visible.
    pub fn with_scrim(mut self) -> Self {
        self.scrim = true;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Current displacement from the open position.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_open(&self) -> bool {
        self.phase == PanelPhase::Open
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    pub fn draws_scrim(&self) -> bool {
        self.scrim && self.is_visible()
    }

    /// Children only receive pointer checks while fully open.
    pub fn interactive(&self) -> bool {
        self.is_open()
    }

    pub fn open(&mut self) {
        match self.phase {
            PanelPhase::Closed => {
                self.offset = self.hidden_offset();
                self.phase = PanelPhase::Opening;
            }
            PanelPhase::Closing => self.phase = PanelPhase::Opening,
            PanelPhase::Opening | PanelPhase::Open => {}
        }
    }

    pub fn close(&mut self) {
        match self.phase {
            PanelPhase::Open | PanelPhase::Opening => self.phase = PanelPhase::Closing,
            PanelPhase::Closing | PanelPhase::Closed => {}
        }
    }

    pub fn toggle(&mut self) {
        match self.phase {
            PanelPhase::Closed | PanelPhase::Closing => self.open(),
            PanelPhase::Open | PanelPhase::Opening => self.close(),
        }
    }

    /// Change the width, finishing any animation in progress.
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        match self.phase {
            PanelPhase::Opening | PanelPhase::Open => {
                self.phase = PanelPhase::Open;
                self.offset = 0.0;
            }
            PanelPhase::Closing | PanelPhase::Closed => {
                self.phase = PanelPhase::Closed;
                self.offset = self.hidden_offset();
            }
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> PanelTick {
        let step = self.width * self.speed * (dt * REFERENCE_FPS);
        let moved = match self.phase {
            PanelPhase::Opening => {
                let moved = self.move_toward(0.0, step);
                if self.offset.abs() < SNAP {
                    self.offset = 0.0;
                    self.phase = PanelPhase::Open;
                }
                moved
            }
            PanelPhase::Closing => {
                let moved = -self.move_toward(self.hidden_offset(), step);
                if (self.offset - self.hidden_offset()).abs() < SNAP {
                    self.offset = self.hidden_offset();
                    self.phase = PanelPhase::Closed;
                }
                moved
            }
            PanelPhase::Open | PanelPhase::Closed => 0.0,
        };
        PanelTick {
            shift: if self.shifts_content { moved } else { 0.0 },
            visible: self.is_visible(),
        }
    }

    fn hidden_offset(&self) -> f32 {
        self.direction.sign() * self.width
    }

    /// Move the offset toward `target` by at most `step`, snapping the final
    /// unit so the total travel matches the distance exactly. Returns the
    /// distance covered.
    fn move_toward(&mut self, target: f32, step: f32) -> f32 {
        let remaining = (target - self.offset).abs();
        let mut moved = step.max(0.0).min(remaining);
        if remaining - moved < SNAP {
            moved = remaining;
        }
        self.offset += (target - self.offset).signum() * moved;
        moved
    }
}
