pub mod text;
pub mod time;

pub use text::truncate_with_ellipsis;
pub use time::{format_relative, format_relative_now};
