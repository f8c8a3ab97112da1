use std::{env, path::PathBuf};

use super::schema::Settings;

const APP_DIR: &str = "reprise";

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `REPRISE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("REPRISE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.frame_rate == 0 {
            return Err("ui.frame_rate must be >= 1".to_string());
        }
        if !(self.ui.panel_speed > 0.0 && self.ui.panel_speed <= 1.0) {
            return Err("ui.panel_speed must be in (0, 1]".to_string());
        }
        if self.ui.songs_per_page == 0
            || self.ui.options_per_page == 0
            || self.ui.editor_songs_per_page == 0
        {
            return Err("ui page sizes must be >= 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err("audio.initial_volume must be in [0, 1]".to_string());
        }
        Ok(())
    }

    /// Playlist file from `storage.playlists_path` or the XDG data directory.
    pub fn playlists_path(&self) -> Option<PathBuf> {
        self.storage
            .playlists_path
            .clone()
            .or_else(|| default_data_path().map(|d| d.join("playlists.json")))
    }

    /// Log file from `logging.file` or the XDG state directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| default_state_path().map(|d| d.join("reprise.log")))
    }
}

/// Resolve the config path from `REPRISE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("REPRISE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/reprise/config.toml`
/// or `~/.config/reprise/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).map(|d| d.join("config.toml"))
}

/// `$XDG_DATA_HOME/reprise` or `~/.local/share/reprise`.
pub fn default_data_path() -> Option<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// `$XDG_STATE_HOME/reprise` or `~/.local/state/reprise`.
pub fn default_state_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    let base = if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| {
            home_fallback
                .iter()
                .fold(PathBuf::from(home), |p, part| p.join(part))
        })
    };

    base.map(|d| d.join(APP_DIR))
}
