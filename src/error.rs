//! Error types for asset loading and video recording.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a gallery file into a texture.
///
/// None of these stop the program: the gallery logs them and shows a
/// placeholder tile for the affected slot.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to create texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}

/// Failures of the ffmpeg pipe.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to start ffmpeg: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ffmpeg stdin is not available")]
    NoStdin,

    #[error("failed to write frame to ffmpeg: {0}")]
    Pipe(#[source] std::io::Error),

    #[error("failed to wait for ffmpeg: {0}")]
    Wait(#[source] std::io::Error),

    #[error("ffmpeg exited with {0}")]
    Exit(std::process::ExitStatus),
}
