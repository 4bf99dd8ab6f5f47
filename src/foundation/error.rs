use std::fmt;

/// Convenience result type used across barrace.
pub type BcrResult<T> = Result<T, BcrError>;

/// Location inside an input file, attached to parse diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SourceContext {
    /// Input file name as given by the caller.
    pub file: String,
    /// 1-based line number (0 when no line has been read yet).
    pub line: usize,
}

impl SourceContext {
    /// Build a context for `file` at `line`.
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum BcrError {
    /// Invalid configuration or layout values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unrecoverable problem in the input data file.
    #[error("parse error at {context}: {message}")]
    Parse {
        /// Where the problem was found.
        context: SourceContext,
        /// What went wrong.
        message: String,
    },

    /// A frame could not be rendered.
    #[error("render error: {0}")]
    Render(String),

    /// Terminal or file I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BcrError {
    /// Build a [`BcrError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BcrError::Parse`] value.
    pub fn parse(context: SourceContext, msg: impl Into<String>) -> Self {
        Self::Parse {
            context,
            message: msg.into(),
        }
    }

    /// Build a [`BcrError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
