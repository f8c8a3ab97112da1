use crate::interaction::{Bounds, Clickable, PointerState};

/// A single-line text box that accepts typing while active.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub bounds: Bounds,
    text: String,
    active: bool,
    pointer: PointerState,
}

impl InputField {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Append `c` unless it is a control character.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl Clickable for InputField {
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
