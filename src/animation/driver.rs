use crate::animation::sink::{FrameSink, SinkConfig};
use crate::chart::frame::Frame;
use crate::chart::palette::CategoryPalette;
use crate::foundation::core::{BarLimit, Fps};
use crate::foundation::error::{BcrError, BcrResult};
use crate::style::ansi::Color;

/// Playback configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackOpts {
    /// Frames per second; each frame is followed by a `1000 / fps` ms pause.
    pub fps: Fps,
    /// Most bars drawn per chart.
    pub bar_limit: BarLimit,
}

/// Counters reported by [`Animation::play`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames visited.
    pub frames_total: u64,
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Empty frames passed over.
    pub frames_skipped: u64,
}

/// Ordered frames plus the category colors shared by all of them.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Animation {
    frames: Vec<Frame>,
    palette: CategoryPalette,
}

impl Animation {
    /// Empty animation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `frame` to the sequence.
    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Give `category` a color if it has none yet.
    pub fn add_category_color(&mut self, category: &str) -> Color {
        self.palette.add_category(category)
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Category colors.
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Render every frame in order into `sink`, pausing between frames.
    ///
    /// Charts are colored per category when the palette is legible, otherwise in a single
    /// color. Empty frames are skipped with a warning: nothing is pushed and no pause is
    /// taken for them. Slow renders delay the next frame; nothing is dropped to catch up.
    #[tracing::instrument(skip_all, fields(frames = self.frames.len(), fps = opts.fps.get()))]
    pub fn play<S: FrameSink + ?Sized>(
        &mut self,
        opts: &PlaybackOpts,
        sink: &mut S,
    ) -> BcrResult<PlaybackStats> {
        let n_bars = opts.bar_limit.get();
        let interval = opts.fps.frame_interval();
        let categorized = self.palette.is_legible();
        let mut stats = PlaybackStats::default();

        sink.begin(SinkConfig {
            fps: opts.fps,
            frames: self.frames.len(),
        })?;

        for (idx, frame) in self.frames.iter_mut().enumerate() {
            stats.frames_total += 1;
            let rendered = if categorized {
                frame.render_categorized(&self.palette, n_bars)
            } else {
                frame.render(n_bars)
            };

            let text = match rendered {
                Ok(text) => text,
                Err(BcrError::Render(msg)) => {
                    tracing::warn!(frame = idx, "{msg}; skipping frame");
                    stats.frames_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            sink.push_frame(idx, &text)?;
            stats.frames_rendered += 1;
            std::thread::sleep(interval);
        }

        sink.end()?;
        tracing::debug!(
            rendered = stats.frames_rendered,
            skipped = stats.frames_skipped,
            "playback finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
