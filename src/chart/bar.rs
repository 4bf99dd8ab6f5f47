use std::cmp::Ordering;

use crate::style::ansi::{Color, Modifier, apply_format, colored};

/// One labeled value within one frame.
///
/// `length` is a render-time cache: [`crate::Frame::calc_lengths`] rewrites it from the
/// frame's maximum value on every pass, and it is `None` until that has happened.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Bar {
    label: String,
    value: i64,
    category: String,
    #[serde(skip)]
    length: Option<usize>,
}

impl Bar {
    /// Build a bar with no length computed yet.
    pub fn new(label: impl Into<String>, value: i64, category: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            category: category.into(),
            length: None,
        }
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Replace the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Store a scaled length.
    pub fn set_length(&mut self, length: usize) {
        self.length = Some(length);
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Category name, used for coloring.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Scaled length, or `None` before the owning frame measured its bars.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// One chart line: a reverse-video block of `length` cells, then `label [value]`.
    pub fn render(&self, color: Color) -> String {
        let block = " ".repeat(self.length.unwrap_or(0));
        let mut out = apply_format(&block, color, Modifier::Reverse);
        out.push_str(&colored(&self.label, color));
        out.push_str(&colored(" [", color));
        out.push_str(&colored(&self.value.to_string(), color));
        out.push_str(&colored("]", color));
        out.push('\n');
        out
    }
}

// Ascending by value; equal values order by category in reverse, then by label in reverse,
// so a descending sort lists ties alphabetically.
impl Ord for Bar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| other.category.cmp(&self.category))
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for Bar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bar {}

#[cfg(test)]
#[path = "../../tests/unit/chart/bar.rs"]
mod tests;
