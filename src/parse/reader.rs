use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::animation::driver::Animation;
use crate::chart::bar::Bar;
use crate::chart::frame::{ChartHeader, Frame};
use crate::foundation::core::ChartLayout;
use crate::foundation::error::{BcrError, BcrResult, SourceContext};
use crate::foundation::number::{NumberError, parse_int};
use crate::parse::tokenize::tokenize_line;

/// Fields expected on a bar line: timestamp, label, reserved, value, category.
pub const BAR_FIELDS: usize = 5;

/// A recoverable problem found while parsing; the offending line or frame was skipped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Where the problem was found.
    pub context: SourceContext,
    /// What was skipped and why.
    pub message: String,
}

/// Result of a successful parse.
#[derive(Debug, serde::Serialize)]
pub struct ParsedData {
    /// Title, x-axis label and source from the file header.
    pub header: ChartHeader,
    /// Frames in file order, with every accepted category registered.
    pub animation: Animation,
    /// Warnings raised along the way, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Line-oriented reader for bar chart race data files.
///
/// ```text
/// <title>
/// <x-axis label>
/// <source>
/// <N>
/// <timestamp>,<label>,<reserved>,<value>,<category>   (N lines)
/// <N>
/// ...
/// ```
pub struct DataParser<R> {
    name: String,
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    pending: Option<String>,
    layout: ChartLayout,
    diagnostics: Vec<Diagnostic>,
}

impl DataParser<BufReader<File>> {
    /// Open `path` for parsing.
    pub fn from_path(path: impl AsRef<Path>) -> BcrResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BcrError::validation(format!("cannot open input file '{}': {e}", path.display()))
        })?;
        Ok(Self::from_reader(
            path.display().to_string(),
            BufReader::new(f),
        ))
    }
}

impl<R: BufRead> DataParser<R> {
    /// Parse from any buffered reader; `name` labels diagnostics.
    pub fn from_reader(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            buf: Vec::new(),
            line_no: 0,
            pending: None,
            layout: ChartLayout::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Geometry given to every parsed frame.
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Read the whole input.
    ///
    /// Fails on I/O errors, an incomplete header, or an unreadable or non-positive bar
    /// count. Every other problem becomes a [`Diagnostic`] and parsing carries on.
    #[tracing::instrument(skip(self), fields(file = %self.name))]
    pub fn parse(mut self) -> BcrResult<ParsedData> {
        self.layout.validate()?;
        let header = self.read_header()?;
        let mut animation = Animation::new();
        let mut skipping = false;

        while let Some(line) = self.next_line()? {
            if line.trim().is_empty() {
                self.warn("ignoring empty line while looking for the number of bars");
                continue;
            }

            let tokens = tokenize_line(&line);
            if tokens.len() != 1 {
                // Resynchronize on the next single-token line.
                if !skipping {
                    self.warn(format!(
                        "expected only the number of bars of the next frame, found {} fields; skipping frame",
                        tokens.len()
                    ));
                    skipping = true;
                }
                continue;
            }
            skipping = false;

            let n_bars = self.read_count(&tokens[0])?;
            let frame = self.read_frame(&header, n_bars, &mut animation)?;
            tracing::debug!(
                frame = animation.len(),
                bars = frame.len(),
                timestamp = frame.timestamp(),
                "parsed frame"
            );
            animation.add_frame(frame);
        }

        tracing::debug!(
            frames = animation.len(),
            categories = animation.palette().len(),
            warnings = self.diagnostics.len(),
            "parse finished"
        );
        Ok(ParsedData {
            header,
            animation,
            diagnostics: self.diagnostics,
        })
    }

    fn read_header(&mut self) -> BcrResult<ChartHeader> {
        let title = self.read_header_line("title")?;
        let x_label = self.read_header_line("x-axis label")?;
        let source = self.read_header_line("source")?;
        Ok(ChartHeader {
            title,
            x_label,
            source,
        })
    }

    fn read_header_line(&mut self, what: &str) -> BcrResult<String> {
        loop {
            let Some(line) = self.next_line()? else {
                return Err(BcrError::parse(
                    self.context(),
                    format!("input ended before the chart {what} was read"),
                ));
            };
            if line.trim().is_empty() {
                self.warn("ignoring empty line while looking for the chart header");
                continue;
            }
            return Ok(line);
        }
    }

    fn read_count(&self, field: &str) -> BcrResult<usize> {
        let n = match parse_int(field) {
            Ok(n) => n,
            Err(NumberError::OutOfRange) => {
                return Err(BcrError::parse(
                    self.context(),
                    format!("number of bars '{field}' is out of range"),
                ));
            }
            Err(e) => {
                return Err(BcrError::parse(
                    self.context(),
                    format!("number of bars '{field}' is not a number ({e})"),
                ));
            }
        };
        if n <= 0 {
            return Err(BcrError::parse(
                self.context(),
                format!("invalid number of bars: {n}"),
            ));
        }
        usize::try_from(n).map_err(|_| {
            BcrError::parse(
                self.context(),
                format!("number of bars '{field}' is out of range"),
            )
        })
    }

    fn read_frame(
        &mut self,
        header: &ChartHeader,
        n_bars: usize,
        animation: &mut Animation,
    ) -> BcrResult<Frame> {
        let mut frame = Frame::new(header, self.layout);
        let mut consumed = 0usize;

        while consumed < n_bars {
            let Some(line) = self.next_line()? else {
                self.warn(format!(
                    "input ended after {consumed} of {n_bars} bar lines"
                ));
                break;
            };
            if line.trim().is_empty() {
                self.warn("ignoring empty line inside a frame");
                continue;
            }
            consumed += 1;

            let tokens = tokenize_line(&line);
            match tokens.len() {
                1 => {
                    self.warn("only one field on the line; assuming premature end of frame");
                    self.pending = Some(line);
                    break;
                }
                n if n < BAR_FIELDS => {
                    self.warn(format!(
                        "expected {BAR_FIELDS} fields on a bar line, found {n}; ignoring bar"
                    ));
                    continue;
                }
                n if n > BAR_FIELDS => {
                    self.warn(format!(
                        "too many fields on a bar line ({n}); using the first {BAR_FIELDS}"
                    ));
                }
                _ => {}
            }

            let mut fields = tokens.into_iter();
            let mut next = || fields.next().unwrap_or_default();
            let timestamp = next();
            let label = next();
            let _reserved = next();
            let value_field = next();
            let category = next();

            let value = match parse_int(&value_field) {
                Ok(v) => v,
                Err(e) => {
                    self.warn(format!("bar value '{value_field}' is {e}; ignoring bar"));
                    continue;
                }
            };

            animation.add_category_color(&category);
            frame.set_timestamp(timestamp);
            frame.add_bar(Bar::new(label, value, category));
        }

        Ok(frame)
    }

    fn next_line(&mut self) -> BcrResult<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let mut bytes = self.buf.as_slice();
        bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let (line, lossy) = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(line) => (line.to_string(), false),
            Cow::Owned(line) => (line, true),
        };
        if lossy {
            self.warn("line is not valid UTF-8; invalid bytes replaced");
        }
        Ok(Some(line))
    }

    fn context(&self) -> SourceContext {
        SourceContext::new(self.name.clone(), self.line_no)
    }

    fn warn(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            context: self.context(),
            message: message.into(),
        };
        tracing::warn!(at = %diagnostic.context, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/reader.rs"]
mod tests;
