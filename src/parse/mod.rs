/// Data file reader.
pub mod reader;
/// Comma/quote field splitting.
pub mod tokenize;
