//! Input handling

pub mod srt;

pub use srt::SrtReader;
