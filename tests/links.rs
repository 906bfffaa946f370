//! End-to-end checks of the public classification API.

use hivelinks::{
    canonical_post_url, classify_url, embed_url, extract_and_classify_urls, UrlKind,
};

#[test]
fn classification_is_total() {
    // Anything parses to exactly one kind; nothing panics.
    for input in [
        "",
        "   ",
        "not a url",
        "ftp://example.com/file",
        "https://",
        "http://example.com",
        "https://peakd.com/hive-167922/@alice/my-post",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://3speak.tv/watch?v=alice/my-video",
        "https://gateway.io/ipfs/QmHash123",
        "https://cdn.example.com/clip.mp4",
        "https://example.com/just/a/page",
    ] {
        let info = classify_url(input);
        assert!(matches!(
            info.kind,
            UrlKind::Normal | UrlKind::HivePost | UrlKind::EmbeddedMedia | UrlKind::Invalid
        ));
    }
}

#[test]
fn spec_examples_classify_as_documented() {
    assert_eq!(classify_url("not a url").kind, UrlKind::Invalid);
    assert_eq!(classify_url("ftp://example.com/file").kind, UrlKind::Invalid);

    let post = classify_url("https://peakd.com/hive-167922/@alice/my-post");
    assert_eq!(post.kind, UrlKind::HivePost);
    let meta = post.metadata.as_ref().unwrap();
    assert_eq!(meta.hive_author.as_deref(), Some("@alice"));
    assert_eq!(meta.hive_permlink.as_deref(), Some("my-post"));

    let video = classify_url("https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(video.kind, UrlKind::EmbeddedMedia);
    assert_eq!(
        video.metadata.as_ref().unwrap().youtube_id.as_deref(),
        Some("dQw4w9WgXcQ")
    );

    let speak = classify_url("https://3speak.tv/watch?v=alice/my-video");
    assert_eq!(speak.kind, UrlKind::EmbeddedMedia);
    assert_eq!(
        speak.metadata.as_ref().unwrap().three_speak_id.as_deref(),
        Some("alice/my-video")
    );
}

#[test]
fn long_normal_link_gets_fifty_char_display() {
    let url = format!("https://example.com/{}", "a".repeat(60));
    let info = classify_url(&url);
    assert_eq!(info.kind, UrlKind::Normal);
    let display = info.display_text.unwrap();
    assert_eq!(display.chars().count(), 50);
    assert!(display.ends_with("..."));
}

#[test]
fn extraction_preserves_text_order() {
    let infos =
        extract_and_classify_urls("check https://youtu.be/abc123 and https://example.com");
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].url, "https://youtu.be/abc123");
    assert_eq!(infos[0].kind, UrlKind::EmbeddedMedia);
    assert_eq!(infos[1].url, "https://example.com");
    assert_eq!(infos[1].kind, UrlKind::Normal);
}

#[test]
fn reclassifying_output_is_stable() {
    for input in [
        "  https://peakd.com/hive-167922/@alice/my-post ",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://example.com/page",
        "not a url",
    ] {
        let first = classify_url(input);
        let second = classify_url(&first.url);
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.metadata, second.metadata);
    }
}

#[test]
fn json_output_shape() {
    let info = classify_url("https://youtu.be/abc");
    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains("\"kind\":\"embedded_media\""));
    assert!(json.contains("\"youtube_id\":\"abc\""));
    assert!(!json.contains("display_text"));
    assert!(!json.contains("hive_author"));

    let normal = classify_url("https://example.com");
    let json = serde_json::to_string(&normal).unwrap();
    assert!(json.contains("\"kind\":\"normal\""));
    assert!(json.contains("\"display_text\":\"https://example.com\""));
    assert!(!json.contains("metadata"));
}

#[test]
fn embed_targets_from_classification() {
    let video = classify_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(
        embed_url(&video).as_deref(),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );

    let post = classify_url("https://www.hive.blog/travel/@carol/rome-day-one");
    assert_eq!(
        canonical_post_url(&post).as_deref(),
        Some("https://ecency.com/@carol/rome-day-one")
    );
    assert!(embed_url(&post).is_none());
}

#[test]
fn mixed_text_scan() {
    let text = "New post https://ecency.com/@dave/garden-update with footage \
                https://cdn.example.com/garden.mp4 and a song https://youtu.be/xyz_9 \
                plus ftp://old.example.com/archive";
    let infos = extract_and_classify_urls(text);
    // The ftp URL never matches the scan pattern; three https matches remain.
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[0].kind, UrlKind::HivePost);
    assert_eq!(infos[1].kind, UrlKind::EmbeddedMedia);
    assert!(infos[1].metadata.is_none());
    assert_eq!(infos[2].kind, UrlKind::EmbeddedMedia);
    assert_eq!(
        infos[2].metadata.as_ref().unwrap().youtube_id.as_deref(),
        Some("xyz_9")
    );
}
