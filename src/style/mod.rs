/// Terminal colors, text modifiers and escape sequences.
pub mod ansi;
