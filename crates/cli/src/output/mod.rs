//! Output formatting for tag and ignore listings.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
