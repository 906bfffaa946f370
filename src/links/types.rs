use serde::{Deserialize, Serialize};

/// How a consuming client should render a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlKind {
    /// Plain clickable hyperlink.
    Normal,
    /// A post on a known Hive front-end, renderable as a rich preview.
    HivePost,
    /// Directly playable or displayable media.
    EmbeddedMedia,
    /// Not a well-formed HTTP/HTTPS URL.
    Invalid,
}

impl UrlKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::HivePost => "hive_post",
            Self::EmbeddedMedia => "embedded_media",
            Self::Invalid => "invalid",
        }
    }
}

/// Identifiers extracted during classification. A field is `Some` only when
/// its pattern actually matched; serialization skips absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    /// Composite `channel/permlink` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_speak_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,
    /// Hive username including the leading `@`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hive_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hive_permlink: Option<String>,
}

impl LinkMetadata {
    #[must_use]
    pub fn youtube(id: impl Into<String>) -> Self {
        Self {
            youtube_id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn three_speak(channel: &str, permlink: &str) -> Self {
        Self {
            three_speak_id: Some(format!("{channel}/{permlink}")),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ipfs(hash: impl Into<String>) -> Self {
        Self {
            ipfs_hash: Some(hash.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hive_post(author: impl Into<String>, permlink: impl Into<String>) -> Self {
        Self {
            hive_author: Some(author.into()),
            hive_permlink: Some(permlink.into()),
            ..Self::default()
        }
    }
}

/// Classification result for a single URL. Immutable; produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInfo {
    pub kind: UrlKind,
    /// The matched substring, trimmed of surrounding whitespace.
    pub url: String,
    /// Present only for `normal` links: the URL truncated for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LinkMetadata>,
}

impl UrlInfo {
    pub(crate) fn invalid(url: &str) -> Self {
        Self {
            kind: UrlKind::Invalid,
            url: url.to_string(),
            display_text: None,
            metadata: None,
        }
    }

    pub(crate) fn media(url: &str, metadata: Option<LinkMetadata>) -> Self {
        Self {
            kind: UrlKind::EmbeddedMedia,
            url: url.to_string(),
            display_text: None,
            metadata,
        }
    }

    /// Render as a plain hyperlink.
    #[must_use]
    pub fn is_clickable_link(&self) -> bool {
        self.kind == UrlKind::Normal
    }

    /// Render as an inline player or viewer.
    #[must_use]
    pub fn is_embeddable_media(&self) -> bool {
        self.kind == UrlKind::EmbeddedMedia
    }

    /// Render as a rich Hive post preview.
    #[must_use]
    pub fn is_hive_preview(&self) -> bool {
        self.kind == UrlKind::HivePost
    }
}
