pub mod number;
pub mod style;
pub mod text;

pub use number::{bar_ratio, format_percent};
pub use style::Palette;
pub use text::{capitalize_words, single_line, truncate};
