use crate::style::ansi::Color;

/// Colors handed out to categories, in assignment order.
///
/// Dark colors come last since they are the hardest to read on dark terminals.
pub const PALETTE: [Color; 16] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
    Color::BrightBlack,
    Color::Black,
];

/// Accent used for every bar when per-category coloring is off.
pub const FALLBACK_COLOR: Color = Color::Cyan;

/// Most categories a chart colors individually; above this the caption stops being readable.
pub const MAX_LEGIBLE_CATEGORIES: usize = 15;

/// Category to color registry shared by a whole animation.
///
/// Colors are assigned in first-seen order and never repeat. Once a category arrives after
/// the palette is exhausted, the registry is marked overflowed and every lookup returns
/// [`FALLBACK_COLOR`] from then on.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct CategoryPalette {
    entries: Vec<(String, Color)>,
    overflowed: bool,
}

impl CategoryPalette {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `category` if unseen and return the color it is drawn with.
    pub fn add_category(&mut self, category: &str) -> Color {
        if self.overflowed {
            return FALLBACK_COLOR;
        }
        if let Some(color) = self.lookup(category) {
            return color;
        }
        if self.entries.len() == PALETTE.len() {
            tracing::warn!(
                category,
                "more than {} categories; coloring all bars with a single color",
                PALETTE.len()
            );
            self.overflowed = true;
            return FALLBACK_COLOR;
        }

        let color = PALETTE[self.entries.len() % PALETTE.len()];
        self.entries.push((category.to_string(), color));
        color
    }

    /// Color for `category`; unknown categories and an overflowed registry use the fallback.
    pub fn color_of(&self, category: &str) -> Color {
        if self.overflowed {
            return FALLBACK_COLOR;
        }
        self.lookup(category).unwrap_or(FALLBACK_COLOR)
    }

    /// Number of categories holding their own color.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether more categories were seen than the palette can hold.
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Whether charts should be colored per category.
    pub fn is_legible(&self) -> bool {
        !self.overflowed && !self.is_empty() && self.len() <= MAX_LEGIBLE_CATEGORIES
    }

    /// Registered categories and their colors, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    fn lookup(&self, category: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/palette.rs"]
mod tests;
