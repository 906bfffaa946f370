#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! URL extraction and classification for Hive social clients.
//!
//! Finds URLs embedded in free text and classifies each into a closed set of
//! categories so a client can pick a rendering strategy: plain hyperlink,
//! inline media embed, or rich post preview. Classification is pure and
//! total; every input string maps to exactly one [`UrlKind`].

pub mod links;
pub mod utils;

pub use links::{
    canonical_post_url, classify_url, embed_url, extract_and_classify_urls, LinkMetadata, UrlInfo,
    UrlKind,
};
