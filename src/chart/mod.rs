//! Chart model: bars, frames, the x-axis and category coloring.

/// X-axis tick layout and tick label formatting.
pub mod axis;
/// A single labeled value.
pub mod bar;
/// One chart snapshot and its rendering.
pub mod frame;
/// Category to color assignment.
pub mod palette;
