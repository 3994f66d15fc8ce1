mod countdown_fmt;
mod markdown;

pub use countdown_fmt::two_digits;
pub use markdown::{markdown_to_html, sanitize_html};
