use std::path::PathBuf;

/// Source of a user-chosen audio file.
pub trait FilePicker {
    fn pick_audio_file(&mut self) -> Option<PathBuf>;
}

/// Native file dialog filtered to the configured audio extensions.
#[derive(Debug, Clone)]
pub struct DialogPicker {
    extensions: Vec<String>,
    start_dir: Option<PathBuf>,
}

impl DialogPicker {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions,
            start_dir: None,
        }
    }

    pub fn starting_in(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}

impl FilePicker for DialogPicker {
    /// Blocks until the dialog is closed; cancelling yields `None`.
    fn pick_audio_file(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select your song")
            .add_filter("Audio files", self.extensions.as_slice());
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        let picked = dialog.pick_file();
        tracing::debug!(?picked, "file picker closed");
        picked
    }
}
