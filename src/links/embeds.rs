use super::types::{UrlInfo, UrlKind};

/// Embed target for media the client renders inline. `None` for anything
/// that is not embeddable media.
#[must_use]
pub fn embed_url(info: &UrlInfo) -> Option<String> {
    if info.kind != UrlKind::EmbeddedMedia {
        return None;
    }

    let meta = info.metadata.as_ref();
    if let Some(id) = meta.and_then(|m| m.youtube_id.as_deref()) {
        return Some(format!("https://www.youtube.com/embed/{id}"));
    }
    if let Some(id) = meta.and_then(|m| m.three_speak_id.as_deref()) {
        return Some(format!("https://3speak.tv/embed?v={id}"));
    }
    if let Some(hash) = meta.and_then(|m| m.ipfs_hash.as_deref()) {
        return Some(format!("https://ipfs.io/ipfs/{hash}"));
    }

    // Direct video files play from their own URL.
    Some(info.url.clone())
}

/// Front-end-independent form of a Hive post URL.
#[must_use]
pub fn canonical_post_url(info: &UrlInfo) -> Option<String> {
    if info.kind != UrlKind::HivePost {
        return None;
    }
    let meta = info.metadata.as_ref()?;
    let author = meta.hive_author.as_deref()?;
    let permlink = meta.hive_permlink.as_deref()?;
    Some(format!("https://ecency.com/{author}/{permlink}"))
}
