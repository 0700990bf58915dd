//! Config Normalizer: raw configuration → canonical content model.
//!
//! Tolerant where the authored shape legitimately varies (ICP lists, optional
//! URLs), strict where the page cannot render without the data (company
//! identity). Pure: no I/O, no clock, no randomness.

use tracing::{debug, warn};

use crate::content::lists::{clean_items, to_list};
use crate::errors::PitchError;
use crate::models::{
    Challenge, Company, Icp, PitchContent, RawCompany, RawIcp, RawList, RawPitchConfig,
};

/// Normalizes a raw configuration into the canonical content model.
///
/// Fails only when `company.name` or `company.role` is missing or blank.
/// Theme colors are carried through as authored; the theme resolver validates them.
pub fn normalize(raw: &RawPitchConfig) -> Result<PitchContent, PitchError> {
    let company = normalize_company(&raw.company)?;
    let icp = normalize_icp(&raw.icp);

    let challenges: Vec<Challenge> = raw
        .challenges
        .iter()
        .map(|c| Challenge {
            title: c.title.clone(),
            approach: clean_items(&c.approach),
        })
        .collect();

    let sendspark_url = non_blank(raw.sendspark_url.as_deref());
    let mut loom_url = non_blank(raw.loom_url.as_deref());
    if sendspark_url.is_some() && loom_url.is_some() {
        warn!(
            "Both sendsparkUrl and loomUrl are set for {}; keeping sendsparkUrl",
            company.name
        );
        loom_url = None;
    }

    Ok(PitchContent {
        company,
        challenges,
        skills: clean_items(&raw.skills),
        track_record: clean_items(&raw.track_record),
        icp,
        theme: raw.theme.clone(),
        sendspark_url,
        loom_url,
    })
}

fn normalize_company(raw: &RawCompany) -> Result<Company, PitchError> {
    let name = non_blank(raw.name.as_deref()).ok_or(PitchError::MissingField("company.name"))?;
    let role = non_blank(raw.role.as_deref()).ok_or(PitchError::MissingField("company.role"))?;
    Ok(Company {
        name,
        role,
        logo_url: non_blank(raw.logo_url.as_deref()),
    })
}

fn normalize_icp(raw: &RawIcp) -> Icp {
    let fields = [
        ("demographics", &raw.demographics),
        ("messagePillars", &raw.message_pillars),
        ("channelFocus", &raw.channel_focus),
        ("riskMitigation", &raw.risk_mitigation),
    ];
    for (name, field) in fields {
        if matches!(field, RawList::Absent) {
            debug!("icp.{name} is absent or not a string/list; using empty list");
        }
    }

    Icp {
        demographics: to_list(&raw.demographics),
        message_pillars: to_list(&raw.message_pillars),
        channel_focus: to_list(&raw.channel_focus),
        risk_mitigation: to_list(&raw.risk_mitigation),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A canonical model is itself a valid configuration; this is what makes
/// `normalize(normalize(x)) == normalize(x)` expressible.
impl From<&PitchContent> for RawPitchConfig {
    fn from(content: &PitchContent) -> Self {
        RawPitchConfig {
            company: RawCompany {
                name: Some(content.company.name.clone()),
                role: Some(content.company.role.clone()),
                logo_url: content.company.logo_url.clone(),
            },
            challenges: content.challenges.clone(),
            skills: content.skills.clone(),
            track_record: content.track_record.clone(),
            icp: RawIcp {
                demographics: RawList::Items(content.icp.demographics.clone()),
                message_pillars: RawList::Items(content.icp.message_pillars.clone()),
                channel_focus: RawList::Items(content.icp.channel_focus.clone()),
                risk_mitigation: RawList::Items(content.icp.risk_mitigation.clone()),
            },
            theme: content.theme.clone(),
            sendspark_url: content.sendspark_url.clone(),
            loom_url: content.loom_url.clone(),
        }
    }
}
