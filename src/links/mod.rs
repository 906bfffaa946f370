pub mod classifier;
pub mod detector;
pub mod embeds;
pub mod types;

pub use classifier::classify_url;
pub use detector::extract_and_classify_urls;
pub use embeds::{canonical_post_url, embed_url};
pub use types::{LinkMetadata, UrlInfo, UrlKind};
