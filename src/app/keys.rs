use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::audio::MediaBackend;

use super::model::App;

impl<B: MediaBackend> App<B> {
    /// Apply one key press.
    ///
    /// While the playlist editor is open every key goes to its text fields;
    /// the player shortcuts only work with the dialog closed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        if self.editor.is_open() {
            self.editor_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('n') => self.next(),
            KeyCode::Char('p') => self.prev(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('s') => self.stop(),
            KeyCode::Right => self.skip(),
            KeyCode::Left => self.rewind(),
            KeyCode::Up => self.volume_up(),
            KeyCode::Down => self.volume_down(),
            KeyCode::Esc => self.toggle_theme_bar(),
            KeyCode::Char('x') => self.toggle_playlist_bar(),
            _ => {}
        }
    }

    fn editor_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.editor.submit_key(),
            KeyCode::Backspace if shift => self.editor.clear_field(),
            KeyCode::Char('u') if ctrl => self.editor.clear_field(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Char(c) if !ctrl => {
                self.editor.type_char(c);
            }
            _ => {}
        }
    }
}
