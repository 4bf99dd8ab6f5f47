//! ANSI SGR styling and the cursor/clear sequences used between animation frames.

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Save cursor position (SCO).
pub const CURSOR_SAVE: &str = "\x1b[s";

/// Restore cursor position (SCO).
pub const CURSOR_RESTORE: &str = "\x1b[u";

/// Clear from cursor to end of screen.
pub const CLEAR_BELOW: &str = "\x1b[J";

/// The 16 standard terminal foreground colors.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR foreground code (30-37, 90-97).
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }
}

/// Text attribute applied together with a [`Color`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    #[default]
    Regular,
    Bold,
    Underline,
    Blink,
    Reverse,
}

impl Modifier {
    /// SGR attribute code.
    pub fn code(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Bold => 1,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
        }
    }
}

/// Wrap `msg` in `ESC[<modifier>;<color>m ... ESC[0m`.
pub fn apply_format(msg: &str, color: Color, modifier: Modifier) -> String {
    format!(
        "\x1b[{};{}m{msg}{RESET}",
        modifier.code(),
        color.code()
    )
}

/// [`apply_format`] with [`Modifier::Regular`].
pub fn colored(msg: &str, color: Color) -> String {
    apply_format(msg, color, Modifier::Regular)
}

#[cfg(test)]
#[path = "../../tests/unit/style/ansi.rs"]
mod tests;
