//! Small types shared by the audio backend and the playback engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::playlist::PlaylistId;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("playlist {0} has no song to play")]
    NoSong(PlaylistId),
    #[error("no song is loaded")]
    NothingLoaded,
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),
}
