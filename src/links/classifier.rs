use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::types::{LinkMetadata, UrlInfo, UrlKind};
use crate::utils::text::truncate_with_ellipsis;

/// Display truncation applied to plain links.
const MAX_DISPLAY_CHARS: usize = 50;

const HIVE_FRONT_ENDS: [&str; 3] = ["ecency.com", "peakd.com", "hive.blog"];

/// Optional leading path segment, then `@username` (3-16 chars), then permlink.
static HIVE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:[^/@\s]+/)?(@[a-z0-9.-]{3,16})/([a-z0-9-]+)").expect("valid hive path regex")
});

static IPFS_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ipfs/([A-Za-z0-9]+)").expect("valid ipfs regex"));

/// Classify a single URL. Total: every input maps to exactly one kind, with
/// `invalid` as the catch-all for anything that is not a well-formed
/// HTTP/HTTPS URL.
#[must_use]
pub fn classify_url(raw: &str) -> UrlInfo {
    let trimmed = raw.trim();

    let Ok(parsed) = Url::parse(trimmed) else {
        return UrlInfo::invalid(trimmed);
    };

    // The scheme gate is a literal prefix check on the input, so `HTTPS://...`
    // is rejected even though the parser normalizes it.
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return UrlInfo::invalid(trimmed);
    }

    // First matching rule wins; the order is part of the contract.
    let matched = match_hive_post(trimmed, &parsed)
        .or_else(|| match_youtube(trimmed, &parsed))
        .or_else(|| match_three_speak(trimmed, &parsed))
        .or_else(|| match_ipfs(trimmed))
        .or_else(|| match_mp4(trimmed, &parsed));

    if let Some(info) = matched {
        tracing::debug!(url = trimmed, kind = info.kind.as_str(), "classified url");
        return info;
    }

    UrlInfo {
        kind: UrlKind::Normal,
        url: trimmed.to_string(),
        display_text: Some(truncate_with_ellipsis(trimmed, MAX_DISPLAY_CHARS)),
        metadata: None,
    }
}

fn match_hive_post(trimmed: &str, parsed: &Url) -> Option<UrlInfo> {
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if !HIVE_FRONT_ENDS.contains(&host) {
        return None;
    }

    let caps = HIVE_PATH.captures(parsed.path())?;
    Some(UrlInfo {
        kind: UrlKind::HivePost,
        url: trimmed.to_string(),
        display_text: None,
        metadata: Some(LinkMetadata::hive_post(&caps[1], &caps[2])),
    })
}

fn match_youtube(trimmed: &str, parsed: &Url) -> Option<UrlInfo> {
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let id = match host {
        "youtube.com" => {
            if parsed.path() != "/watch" {
                return None;
            }
            let v = parsed
                .query_pairs()
                .find_map(|(k, v)| (k == "v").then_some(v))?;
            leading_id_run(&v)?
        }
        "youtu.be" => {
            let segment = parsed.path_segments()?.next()?;
            leading_id_run(segment)?
        }
        _ => return None,
    };

    Some(UrlInfo::media(trimmed, Some(LinkMetadata::youtube(id))))
}

/// Leading run of video-id characters; `None` if the value starts elsewhere.
fn leading_id_run(s: &str) -> Option<String> {
    let id: String = s
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn match_three_speak(trimmed: &str, parsed: &Url) -> Option<UrlInfo> {
    if parsed.scheme() != "https" || parsed.host_str()? != "3speak.tv" {
        return None;
    }
    if parsed.path() != "/watch" {
        return None;
    }

    let v = parsed
        .query_pairs()
        .find_map(|(k, v)| (k == "v").then_some(v.into_owned()))?;
    let (channel, permlink) = v.split_once('/')?;
    if channel.is_empty() || permlink.is_empty() || permlink.contains('/') {
        return None;
    }
    if channel.chars().any(char::is_whitespace) || permlink.chars().any(char::is_whitespace) {
        return None;
    }

    Some(UrlInfo::media(
        trimmed,
        Some(LinkMetadata::three_speak(channel, permlink)),
    ))
}

// Host-agnostic: any URL carrying an `ipfs/<hash>` segment qualifies.
fn match_ipfs(trimmed: &str) -> Option<UrlInfo> {
    let caps = IPFS_HASH.captures(trimmed)?;
    Some(UrlInfo::media(trimmed, Some(LinkMetadata::ipfs(&caps[1]))))
}

fn match_mp4(trimmed: &str, parsed: &Url) -> Option<UrlInfo> {
    if parsed.path().ends_with(".mp4") {
        Some(UrlInfo::media(trimmed, None))
    } else {
        None
    }
}
