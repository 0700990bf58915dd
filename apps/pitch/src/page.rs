//! Page assembly: one configuration in, one immutable `Page` out.
//!
//! Flow: parse JSON → normalize → resolve style set → resolve video slot.
//! Any renderer consumes the result purely by lookup.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::content::{normalize, resolve_video, VideoSlot};
use crate::errors::PitchError;
use crate::models::{PitchContent, RawPitchConfig};
use crate::theme::{resolve_style_set, StyleSet};

/// A fully resolved pitch page instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub content: PitchContent,
    pub styles: StyleSet,
    pub video: VideoSlot,
}

impl Page {
    /// Builds a page from an already-parsed configuration.
    pub fn build(raw: &RawPitchConfig) -> Result<Self, PitchError> {
        let content = normalize(raw)?;
        let styles = resolve_style_set(&content.theme)?;
        let video = resolve_video(content.sendspark_url.as_deref(), content.loom_url.as_deref());
        if video == VideoSlot::Placeholder {
            debug!("No video reference; hero shows the placeholder panel");
        }

        info!(
            "Built pitch page for {} ({}): {} challenges, {} ICP bullets",
            content.company.name,
            content.company.role,
            content.challenges.len(),
            content.icp.demographics.len()
                + content.icp.message_pillars.len()
                + content.icp.channel_focus.len()
                + content.icp.risk_mitigation.len(),
        );

        Ok(Page {
            content,
            styles,
            video,
        })
    }

    /// Parses and builds a page from a JSON configuration payload.
    pub fn from_json(json: &str) -> Result<Self, PitchError> {
        let raw: RawPitchConfig = serde_json::from_str(json)?;
        Page::build(&raw)
    }

    /// Reads a JSON configuration file and builds the page.
    pub fn load(path: &Path) -> Result<Self, PitchError> {
        debug!("Reading page configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Page::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleToken;
    use std::io::Write;

    const SPLUNK_JSON: &str = r##"{
        "company": {"name": "Splunk", "role": "Leader, Global Platform Specialists"},
        "challenges": [
            {"title": "Developing Long-Term Platform GTM Strategy", "approach": ["Design GTM architecture"]}
        ],
        "skills": ["GTM architecture and playbook design"],
        "trackRecord": ["$431K in early pipeline generated"],
        "icp": {
            "demographics": "Enterprise; Security; IT",
            "messagePillars": ["Risk reduction and compliance"],
            "channelFocus": ";;;"
        },
        "theme": {"primary": "#ED0080", "secondary": "#F16122", "accent": "#F99E1C"},
        "sendsparkUrl": "https://sendspark.com/share/mr0cs3yt1hw20x5khyfbr45p60fyg2vs"
    }"##;

    #[test]
    fn test_from_json_end_to_end() {
        let page = Page::from_json(SPLUNK_JSON).unwrap();
        assert_eq!(page.content.icp.demographics, vec!["Enterprise", "Security", "IT"]);
        assert!(page.content.icp.channel_focus.is_empty());
        assert!(page.content.icp.risk_mitigation.is_empty());
        assert_eq!(page.styles.css(StyleToken::HeroForeground), "#FFFFFF");
        assert_eq!(page.styles.css(StyleToken::AccentForeground), "#000000");
        match &page.video {
            VideoSlot::Embed(embed) => assert_eq!(
                embed.embed_url,
                "https://sendspark.com/embed/mr0cs3yt1hw20x5khyfbr45p60fyg2vs"
            ),
            VideoSlot::Placeholder => panic!("expected an embed"),
        }
    }

    #[test]
    fn test_missing_video_is_placeholder() {
        let json = SPLUNK_JSON.replace("sendsparkUrl", "unusedUrl");
        let page = Page::from_json(&json).unwrap();
        assert_eq!(page.video, VideoSlot::Placeholder);
    }

    #[test]
    fn test_malformed_icp_group_still_builds() {
        let start = SPLUNK_JSON.find("\"icp\"").unwrap();
        let end = start + SPLUNK_JSON[start..].find('}').unwrap() + 1;
        for replacement in [r#""icp": null"#, r#""icp": "A; B""#] {
            let json = format!("{}{}{}", &SPLUNK_JSON[..start], replacement, &SPLUNK_JSON[end..]);
            let page = Page::from_json(&json).unwrap();
            assert_eq!(page.content.icp, crate::models::Icp::default());
        }
    }

    #[test]
    fn test_mixed_icp_array_survives_page_build() {
        let json = SPLUNK_JSON.replace(
            r#""messagePillars": ["Risk reduction and compliance"]"#,
            r#""messagePillars": ["Risk reduction", 3, false, "Compliance"]"#,
        );
        let page = Page::from_json(&json).unwrap();
        assert_eq!(
            page.content.icp.message_pillars,
            vec!["Risk reduction", "3", "Compliance"]
        );
    }

    #[test]
    fn test_malformed_theme_fails_construction() {
        let json = SPLUNK_JSON.replace("#F16122", "#F1612");
        let err = Page::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            PitchError::InvalidColor {
                field: "theme.secondary",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Page::from_json("{ not json").unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SPLUNK_JSON.as_bytes()).unwrap();
        let page = Page::load(file.path()).unwrap();
        assert_eq!(page.content.company.name, "Splunk");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Page::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PitchError::Io(_)));
    }

    #[test]
    fn test_bundled_sample_page_builds() {
        let page = Page::from_json(include_str!("../pages/splunk.json")).unwrap();
        assert_eq!(page.content.challenges.len(), 3);
        assert_eq!(page.content.icp.channel_focus.len(), 2);
        assert_eq!(page.content.icp.demographics.len(), 1);
    }

    #[test]
    fn test_page_serializes_styles_by_token_name() {
        let page = Page::from_json(SPLUNK_JSON).unwrap();
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["styles"]["accent-foreground"], "#000000");
        assert_eq!(value["video"]["kind"], "embed");
        assert_eq!(value["content"]["company"]["name"], "Splunk");
    }
}
