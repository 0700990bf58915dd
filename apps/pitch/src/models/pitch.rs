//! Pitch page data models: the raw configuration as authored, and the
//! canonical content model produced by normalization.
//!
//! Both shapes use camelCase keys so a canonical model serializes back into
//! a valid configuration payload.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

// ────────────────────────────────────────────────────────────────────────────
// Raw configuration (untrusted shape)
// ────────────────────────────────────────────────────────────────────────────

/// A configuration payload exactly as the page author supplied it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPitchConfig {
    pub company: RawCompany,
    pub challenges: Vec<Challenge>,
    pub skills: Vec<String>,
    pub track_record: Vec<String>,
    #[serde(default)]
    pub icp: RawIcp,
    pub theme: ThemeConfig,
    #[serde(default)]
    pub sendspark_url: Option<String>,
    #[serde(default)]
    pub loom_url: Option<String>,
}

/// Identity fields are optional here so a missing name or role surfaces as
/// `PitchError::MissingField` instead of a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompany {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// ICP fields as authored: each may be a delimited string or a list.
///
/// The group itself is as tolerant as its fields: `null`, a string or any
/// other non-object value deserializes as the empty group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawIcpRepr")]
pub struct RawIcp {
    pub demographics: RawList,
    pub message_pillars: RawList,
    pub channel_focus: RawList,
    pub risk_mitigation: RawList,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIcpRepr {
    Fields(Map<String, Value>),
    Other(IgnoredAny),
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawIcpFields {
    demographics: RawList,
    message_pillars: RawList,
    channel_focus: RawList,
    risk_mitigation: RawList,
}

impl From<RawIcpFields> for RawIcp {
    fn from(fields: RawIcpFields) -> Self {
        RawIcp {
            demographics: fields.demographics,
            message_pillars: fields.message_pillars,
            channel_focus: fields.channel_focus,
            risk_mitigation: fields.risk_mitigation,
        }
    }
}

impl From<RawIcpRepr> for RawIcp {
    fn from(repr: RawIcpRepr) -> Self {
        match repr {
            // RawList never fails, so neither does a map of them.
            RawIcpRepr::Fields(map) => serde_json::from_value::<RawIcpFields>(Value::Object(map))
                .map(RawIcp::from)
                .unwrap_or_default(),
            RawIcpRepr::Other(_) => {
                warn!("icp is not an object; treating every ICP list as empty");
                RawIcp::default()
            }
        }
    }
}

/// A list-typed field before normalization.
///
/// Deserialization never fails. Inside an array, numbers are kept as their
/// decimal text and any other non-string element is dropped with a warning.
/// Any other value (numbers, objects, `null`) becomes `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawListRepr")]
pub enum RawList {
    Text(String),
    Items(Vec<String>),
    #[default]
    Absent,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListRepr {
    Text(String),
    Items(Vec<Value>),
    Other(IgnoredAny),
}

fn list_item(index: usize, value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => {
            warn!("Dropping non-text list entry at index {index}: {other}");
            None
        }
    }
}

impl From<RawListRepr> for RawList {
    fn from(repr: RawListRepr) -> Self {
        match repr {
            RawListRepr::Text(s) => RawList::Text(s),
            RawListRepr::Items(items) => RawList::Items(
                items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, v)| list_item(i, v))
                    .collect(),
            ),
            RawListRepr::Other(_) => RawList::Absent,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ────────────────────────────────────────────────────────────────────────────

/// One narrative item in the challenges section. Rendered 1-indexed, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub approach: Vec<String>,
}

/// The three brand colors as authored. Validated by the theme resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    /// Route the hero gradient through the secondary color as a middle stop.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gradient_through_secondary: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Canonical content model
// ────────────────────────────────────────────────────────────────────────────

/// The normalized page copy. Every list field holds only non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchContent {
    pub company: Company,
    pub challenges: Vec<Challenge>,
    pub skills: Vec<String>,
    pub track_record: Vec<String>,
    pub icp: Icp,
    pub theme: ThemeConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sendspark_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loom_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Ideal-customer-profile hypothesis, one bullet list per card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icp {
    pub demographics: Vec<String>,
    pub message_pillars: Vec<String>,
    pub channel_focus: Vec<String>,
    pub risk_mitigation: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_list(value: serde_json::Value) -> RawList {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_raw_list_string_is_text() {
        assert_eq!(raw_list(json!("A; B")), RawList::Text("A; B".to_string()));
    }

    #[test]
    fn test_raw_list_array_is_items() {
        assert_eq!(
            raw_list(json!(["A", "B"])),
            RawList::Items(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_raw_list_unrecognized_shapes_are_absent() {
        assert_eq!(raw_list(json!(null)), RawList::Absent);
        assert_eq!(raw_list(json!(42)), RawList::Absent);
        assert_eq!(raw_list(json!({"a": "b"})), RawList::Absent);
    }

    #[test]
    fn test_raw_list_mixed_array_keeps_text_entries() {
        assert_eq!(
            raw_list(json!(["Enterprise", 3, "SMB"])),
            RawList::Items(vec![
                "Enterprise".to_string(),
                "3".to_string(),
                "SMB".to_string()
            ])
        );
        assert_eq!(
            raw_list(json!([null, "A", {"b": 1}, true, ["C"], "D"])),
            RawList::Items(vec!["A".to_string(), "D".to_string()])
        );
    }

    #[test]
    fn test_raw_icp_non_object_is_empty_group() {
        for value in [json!(null), json!("A; B"), json!(["A", "B"]), json!(5)] {
            let icp: RawIcp = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(icp.demographics, RawList::Absent, "for {value}");
            assert_eq!(icp.message_pillars, RawList::Absent, "for {value}");
            assert_eq!(icp.channel_focus, RawList::Absent, "for {value}");
            assert_eq!(icp.risk_mitigation, RawList::Absent, "for {value}");
        }
    }

    #[test]
    fn test_raw_icp_missing_fields_default_to_absent() {
        let icp: RawIcp = serde_json::from_value(json!({"demographics": "SMB"})).unwrap();
        assert_eq!(icp.demographics, RawList::Text("SMB".to_string()));
        assert_eq!(icp.message_pillars, RawList::Absent);
        assert_eq!(icp.channel_focus, RawList::Absent);
        assert_eq!(icp.risk_mitigation, RawList::Absent);
    }

    #[test]
    fn test_raw_config_ignores_unknown_fields_and_missing_icp() {
        let raw: RawPitchConfig = serde_json::from_value(json!({
            "company": {"name": "Acme", "role": "VP Sales"},
            "challenges": [],
            "skills": [],
            "trackRecord": [],
            "theme": {"primary": "#000000", "secondary": "#111111", "accent": "#222222"},
            "schemaVersion": 7
        }))
        .unwrap();
        assert_eq!(raw.company.name.as_deref(), Some("Acme"));
        assert_eq!(raw.icp.demographics, RawList::Absent);
        assert!(raw.sendspark_url.is_none());
        assert!(!raw.theme.gradient_through_secondary);
    }

    #[test]
    fn test_raw_config_missing_skills_is_parse_error() {
        let result: Result<RawPitchConfig, _> = serde_json::from_value(json!({
            "company": {"name": "Acme", "role": "VP Sales"},
            "challenges": [],
            "trackRecord": [],
            "theme": {"primary": "#000000", "secondary": "#111111", "accent": "#222222"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_config_omits_default_gradient_flag() {
        let theme = ThemeConfig {
            primary: "#ED0080".to_string(),
            secondary: "#F16122".to_string(),
            accent: "#F99E1C".to_string(),
            gradient_through_secondary: false,
        };
        let value = serde_json::to_value(&theme).unwrap();
        assert!(value.get("gradientThroughSecondary").is_none());
    }
}
