//! Video embed contract for the hero section.
//!
//! Providers hand out "share" URLs; the iframe needs the "embed" URL. The rule
//! is the same for every supported provider: the first `/share/` path segment
//! becomes `/embed/`. No URL means the renderer shows a static placeholder.

use serde::Serialize;

const SHARE_SEGMENT: &str = "/share/";
const EMBED_SEGMENT: &str = "/embed/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoProvider {
    Sendspark,
    Loom,
}

/// A resolved video reference ready for an iframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEmbed {
    pub provider: VideoProvider,
    pub share_url: String,
    pub embed_url: String,
}

impl VideoEmbed {
    pub fn new(provider: VideoProvider, share_url: &str) -> Self {
        VideoEmbed {
            provider,
            share_url: share_url.to_string(),
            embed_url: embed_url_for(share_url),
        }
    }
}

/// What the hero section shows in its video slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoSlot {
    Embed(VideoEmbed),
    Placeholder,
}

/// Derives an embed URL from a share URL. URLs without a `/share/` segment
/// are returned unchanged.
pub fn embed_url_for(share_url: &str) -> String {
    share_url.replacen(SHARE_SEGMENT, EMBED_SEGMENT, 1)
}

/// Picks the video slot from the canonical video fields. Sendspark wins when both are set.
pub fn resolve_video(sendspark_url: Option<&str>, loom_url: Option<&str>) -> VideoSlot {
    match (sendspark_url, loom_url) {
        (Some(url), _) => VideoSlot::Embed(VideoEmbed::new(VideoProvider::Sendspark, url)),
        (None, Some(url)) => VideoSlot::Embed(VideoEmbed::new(VideoProvider::Loom, url)),
        (None, None) => VideoSlot::Placeholder,
    }
}
