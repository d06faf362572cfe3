use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use raylib::prelude::*;
use tracing::{info, warn};
use crate::error::RecordError;

/// Pipes raw RGBA frames into an ffmpeg child process that encodes them.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
    waited: bool,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg, RecordError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(RecordError::Spawn)?;
        let stdin = process.stdin.take().ok_or(RecordError::NoStdin)?;
        info!(output = ?output, width, height, fps, "recording started");
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0, waited: false })
    }

    pub fn write(&mut self, image: &Image) -> Result<(), RecordError> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        // SAFETY: a framebuffer image is uncompressed RGBA8, width * height * 4 bytes
        let pixels = unsafe {
            std::slice::from_raw_parts(image.data() as *const u8, width * height * 4)
        };

        let stdin = self.stdin.as_mut().ok_or(RecordError::NoStdin)?;
        for row in bottom_up_rows(pixels, width, height) {
            stdin.write_all(row).map_err(RecordError::Pipe)?;
        }
        self.frames += 1;
        Ok(())
    }

    /// Closes the pipe and waits for ffmpeg to finish encoding.
    pub fn finish(mut self) -> Result<(), RecordError> {
        self.stdin = None;
        self.waited = true;
        let status = self.process.wait().map_err(RecordError::Wait)?;
        if !status.success() {
            return Err(RecordError::Exit(status));
        }
        info!(frames = self.frames, "recording finished");
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        if self.waited {
            return;
        }
        self.stdin = None;
        if let Err(e) = self.process.wait() {
            warn!(error = %e, "failed to wait for ffmpeg");
        }
    }
}

/// Rows of an RGBA pixel buffer from the last to the first. Render textures
/// are stored bottom-up while ffmpeg expects top-down.
pub fn bottom_up_rows(pixels: &[u8], width: usize, height: usize) -> impl Iterator<Item = &[u8]> {
    let stride = width * 4;
    (0..height).rev().map(move |y| &pixels[y * stride..(y + 1) * stride])
}
