use std::io::Write;

use crate::foundation::core::Fps;
use crate::foundation::error::BcrResult;
use crate::style::ansi::{CLEAR_BELOW, CURSOR_RESTORE, CURSOR_SAVE};

/// Configuration provided to a [`FrameSink`] before playback starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Playback rate.
    pub fps: Fps,
    /// Number of frames in the animation (skipped frames included).
    pub frames: usize,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing frame indices. Frames
/// that could not be rendered are never pushed, so indices may have gaps.
pub trait FrameSink {
    /// Called once before any frame is pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BcrResult<()>;
    /// Display one rendered frame.
    fn push_frame(&mut self, idx: usize, text: &str) -> BcrResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> BcrResult<()>;
}

/// Writes frames to a terminal, redrawing each one over the previous.
///
/// The cursor position is saved in `begin`; every frame after the first restores it and
/// clears the screen below before drawing, so the final frame stays visible.
pub struct TerminalSink<W: Write> {
    out: W,
    frames_written: usize,
}

impl TerminalSink<std::io::Stdout> {
    /// Sink drawing on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink drawing on `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
        }
    }

    /// Frames drawn since the last `begin`.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> BcrResult<()> {
        self.frames_written = 0;
        self.out.write_all(CURSOR_SAVE.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn push_frame(&mut self, _idx: usize, text: &str) -> BcrResult<()> {
        if self.frames_written > 0 {
            self.out.write_all(CURSOR_RESTORE.as_bytes())?;
            self.out.write_all(CLEAR_BELOW.as_bytes())?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> BcrResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, String)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames with their indices.
    pub fn frames(&self) -> &[(usize, String)] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BcrResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, text: &str) -> BcrResult<()> {
        self.frames.push((idx, text.to_string()));
        Ok(())
    }

    fn end(&mut self) -> BcrResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sink.rs"]
mod tests;
