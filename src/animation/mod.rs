/// Frame sequence and timed playback.
pub mod driver;
/// Frame consumers (terminal, in-memory).
pub mod sink;
