//! barrace renders bar chart races in the terminal.
//!
//! A race is read from a plain-text data file into an [`Animation`] of [`Frame`]s, then played
//! back frame by frame into a [`FrameSink`]:
//!
//! - Parse a data file with [`DataParser`]
//! - Inspect the frames, the category [`CategoryPalette`] and any parse [`Diagnostic`]s
//! - Play the result into a [`TerminalSink`] (or an [`InMemorySink`] for tests)
#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Timed playback of parsed frames.
pub mod animation;
/// Bars, frames, axes and category colors.
pub mod chart;
/// Errors, numeric parsing and configuration values.
pub mod foundation;
/// Data file parsing.
pub mod parse;
/// Terminal styling.
pub mod style;

pub use crate::animation::driver::{Animation, PlaybackOpts, PlaybackStats};
pub use crate::animation::sink::{FrameSink, InMemorySink, SinkConfig, TerminalSink};
pub use crate::chart::axis::{build_axis, format_tick_value};
pub use crate::chart::bar::Bar;
pub use crate::chart::frame::{ChartHeader, Frame};
pub use crate::chart::palette::{CategoryPalette, FALLBACK_COLOR, PALETTE};
pub use crate::foundation::core::{BarLimit, ChartLayout, Fps};
pub use crate::foundation::error::{BcrError, BcrResult, SourceContext};
pub use crate::foundation::number::{NumberError, parse_int};
pub use crate::parse::reader::{DataParser, Diagnostic, ParsedData};
pub use crate::parse::tokenize::tokenize_line;
pub use crate::style::ansi::{Color, Modifier, apply_format};
