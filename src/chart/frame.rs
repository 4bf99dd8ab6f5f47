use crate::chart::axis::build_axis;
use crate::chart::bar::Bar;
use crate::chart::palette::{CategoryPalette, FALLBACK_COLOR, MAX_LEGIBLE_CATEGORIES};
use crate::foundation::core::ChartLayout;
use crate::foundation::error::{BcrError, BcrResult};
use crate::style::ansi::{Color, Modifier, apply_format};

/// Chart-wide labels read once from the input file header.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ChartHeader {
    /// Main chart title.
    pub title: String,
    /// Label printed under the x-axis.
    pub x_label: String,
    /// Data source attribution.
    pub source: String,
}

/// One time-slice of the race: its bars plus the chart labels and geometry.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Frame {
    title: String,
    x_label: String,
    source: String,
    timestamp: String,
    bars: Vec<Bar>,
    layout: ChartLayout,
}

impl Frame {
    /// Empty frame carrying the header labels and chart geometry.
    pub fn new(header: &ChartHeader, layout: ChartLayout) -> Self {
        Self {
            title: header.title.clone(),
            x_label: header.x_label.clone(),
            source: header.source.clone(),
            timestamp: String::new(),
            bars: Vec::new(),
            layout,
        }
    }

    /// Timestamp shown in the chart header.
    pub fn set_timestamp(&mut self, timestamp: impl Into<String>) {
        self.timestamp = timestamp.into();
    }

    /// Timestamp of this time-slice.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Main chart title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Label under the x-axis.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Data source attribution.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Chart geometry used when rendering.
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Bars in their current order (insertion order until sorted).
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the frame holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Append `bar`; the frame owns it from now on.
    pub fn add_bar(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Largest value first; ties list categories (then labels) alphabetically.
    pub fn sort_bars(&mut self) {
        self.bars.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Scale every bar to `floor(value * bar_length_max / max)`, clamped to
    /// `[0, bar_length_max]`. A frame whose maximum is not positive gets all-zero lengths.
    ///
    /// Expects [`Frame::sort_bars`] to have run: the maximum is read from the first bar.
    pub fn calc_lengths(&mut self) {
        let Some(max) = self.bars.first().map(Bar::value) else {
            return;
        };
        let limit = self.layout.bar_length_max;

        for bar in &mut self.bars {
            let length = if max <= 0 || bar.value() <= 0 {
                0
            } else {
                let scaled = i128::from(bar.value()) * limit as i128 / i128::from(max);
                scaled.clamp(0, limit as i128) as usize
            };
            bar.set_length(length);
        }
    }

    /// Largest value among the bars, or `None` for an empty frame.
    pub fn max_value(&self) -> Option<i64> {
        self.bars.iter().map(Bar::value).max()
    }

    /// Tick line and value line for this frame's scale.
    pub fn build_x_axis(&self) -> String {
        build_axis(self.max_value().unwrap_or(0), &self.layout)
    }

    /// Render with every bar in the single accent color.
    ///
    /// Fails without producing output when the frame holds no bars.
    pub fn render(&mut self, n_bars: usize) -> BcrResult<String> {
        self.ensure_renderable()?;
        Ok(self.render_body(n_bars, |_| FALLBACK_COLOR))
    }

    /// Render with bars colored by category, followed by a color caption.
    ///
    /// Falls back to [`Frame::render`] when per-category coloring is not legible
    /// (more than fifteen categories or an overflowed palette).
    pub fn render_categorized(
        &mut self,
        palette: &CategoryPalette,
        n_bars: usize,
    ) -> BcrResult<String> {
        self.ensure_renderable()?;
        if palette.is_overflowed() || palette.len() > MAX_LEGIBLE_CATEGORIES {
            return self.render(n_bars);
        }

        let mut out = self.render_body(n_bars, |bar| palette.color_of(bar.category()));
        for (name, color) in palette.iter() {
            out.push_str(&apply_format("   ", color, Modifier::Reverse));
            out.push_str(&apply_format(&format!(": {name}"), color, Modifier::Bold));
            out.push(' ');
        }
        out.push('\n');
        Ok(out)
    }

    fn ensure_renderable(&self) -> BcrResult<()> {
        if self.is_empty() {
            return Err(BcrError::render("cannot render an empty frame"));
        }
        Ok(())
    }

    fn render_body(&mut self, n_bars: usize, color_for: impl Fn(&Bar) -> Color) -> String {
        self.sort_bars();
        self.calc_lengths();

        let mut out = String::new();
        out.push_str("\t\t");
        out.push_str(&apply_format(&self.title, Color::Blue, Modifier::Bold));
        out.push_str("\n\n\t");
        out.push_str(&apply_format(
            &format!("Time Stamp: {}", self.timestamp),
            Color::Blue,
            Modifier::Bold,
        ));
        out.push_str("\n\n");

        for bar in self.bars.iter().take(n_bars) {
            out.push_str(&bar.render(color_for(bar)));
        }

        out.push_str(&self.build_x_axis());

        out.push_str(&apply_format(&self.x_label, Color::Yellow, Modifier::Bold));
        out.push_str("\n\n");
        out.push_str(&apply_format(&self.source, Color::White, Modifier::Bold));
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/frame.rs"]
mod tests;
