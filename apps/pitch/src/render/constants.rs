//! Page constants: copy and links that are the same on every pitch page.
//!
//! These never come from the per-employer configuration. They are handed to
//! the renderer alongside the `Page` so the content model stays a pure
//! function of its configuration.

use serde::Serialize;

/// LinkedIn brand blue for the profile button.
pub const LINKEDIN_BLUE: &str = "#0077B5";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub title: String,
    pub image_url: String,
    pub linkedin_url: String,
}

/// One stat tile in the career-highlights section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub stat: String,
    pub label: String,
    pub sub: String,
}

/// One column of the 30-60-90 day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanPhase {
    pub days: u16,
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageConstants {
    pub headline: String,
    /// Opened in a new browsing context from both call-to-action buttons.
    pub scheduling_url: String,
    pub profile: ProfileCard,
    pub contact_line: String,
    pub highlights: Vec<Highlight>,
    pub plan: Vec<PlanPhase>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn highlight(stat: &str, label: &str, sub: &str) -> Highlight {
    Highlight {
        stat: stat.to_string(),
        label: label.to_string(),
        sub: sub.to_string(),
    }
}

impl Default for PageConstants {
    fn default() -> Self {
        PageConstants {
            headline: "A GTM leader who ships revenue, not decks.".to_string(),
            scheduling_url: "https://calendly.com/checkaipulse/30min".to_string(),
            profile: ProfileCard {
                name: "Ricardo Oliveira".to_string(),
                title: "GTM Strategy & Revenue Operations Leader".to_string(),
                image_url:
                    "https://raw.githubusercontent.com/ricatroliveira-ai/gtm-landing-page/main/profile_li.png"
                        .to_string(),
                linkedin_url: "https://www.linkedin.com/in/ricatroliveira".to_string(),
            },
            contact_line:
                "Contact: ricatroliveira@gmail.com • linkedin.com/in/ricatroliveira/ • São Paulo"
                    .to_string(),
            highlights: vec![
                highlight("$10M+", "Revenue Impact", "in sales closed"),
                highlight("$1.2M", "Pipeline Growth", "created in Q2 2025 alone"),
                highlight("120%", "Exceed Quota W/ AI", "avg quota attained"),
                highlight("16", "Leadership Experience", "led teams of up to"),
            ],
            plan: vec![
                PlanPhase {
                    days: 30,
                    title: "Foundation".to_string(),
                    steps: strings(&[
                        "Revisit ICP and Identify Buying Triggers",
                        "Create 3 to 5 different playbooks",
                        "Run multichannel campaigns targeting companies with high intent as POC",
                        "Track playbook results on dashboard",
                    ]),
                },
                PlanPhase {
                    days: 60,
                    title: "Scale".to_string(),
                    steps: strings(&[
                        "Scale winning playbook and channel by going fully AI automated",
                        "Improve and automate pipeline and CRM hygiene",
                        "Implement automated scoring and routing",
                    ]),
                },
                PlanPhase {
                    days: 90,
                    title: "Optimize".to_string(),
                    steps: strings(&[
                        "Lock forecast accuracy",
                        "Automate admin work",
                        "Publish GTM SOP V1",
                    ]),
                },
            ],
        }
    }
}
