//! Static HTML renderer built on Maud.
//!
//! Every color comes from the page's `StyleSet` by token; every string is
//! auto-escaped by Maud. No section makes a decision beyond "list is empty"
//! or "video slot is a placeholder".

use maud::{html, Markup, DOCTYPE};
use tracing::info;

use crate::content::VideoSlot;
use crate::errors::PitchError;
use crate::models::Challenge;
use crate::page::Page;
use crate::render::constants::{PageConstants, LINKEDIN_BLUE};
use crate::render::PageRenderer;
use crate::theme::{StyleSet, StyleToken};

/// Challenge titles woven into the "real reason" sentence.
const INTRO_CHALLENGE_COUNT: usize = 3;

const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Renders a complete standalone HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page, constants: &PageConstants) -> Result<String, PitchError> {
        let html = render_document(page, constants).into_string();
        info!(
            "Rendered {} bytes of HTML for {}",
            html.len(),
            page.content.company.name
        );
        Ok(html)
    }
}

/// `style` attribute body from (property, token) pairs.
fn style(styles: &StyleSet, props: &[(&str, StyleToken)]) -> String {
    props
        .iter()
        .map(|(prop, token)| format!("{prop}: {}", styles.css(*token)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn color(styles: &StyleSet, token: StyleToken) -> String {
    style(styles, &[("color", token)])
}

fn render_document(page: &Page, constants: &PageConstants) -> Markup {
    let company = &page.content.company;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (constants.profile.name) " for " (company.name) }
            }
            body style=(style(&page.styles, &[("background", StyleToken::PageBackground)])) {
                (hero(page, constants))
                (highlights(&page.styles, constants))
                (challenges(&page.styles, &page.content.challenges))
                (plan(&page.styles, constants))
                (hypothesis(page))
                (profile(&page.styles, constants))
                (closing(page, constants))
                (footer(&page.styles, constants))
            }
        }
    }
}

fn cta_button(styles: &StyleSet, url: &str, label: &str) -> Markup {
    let button_style = format!(
        "{}; padding: 1rem 2rem; border-radius: 9999px; font-weight: 700",
        style(
            styles,
            &[
                ("background", StyleToken::ButtonBackground),
                ("color", StyleToken::ButtonForeground),
            ],
        )
    );
    html! {
        a.cta href=(url) target="_blank" rel="noopener noreferrer" style=(button_style) {
            (label)
        }
    }
}

fn hero(page: &Page, constants: &PageConstants) -> Markup {
    let styles = &page.styles;
    let company = &page.content.company;
    let hero_style = style(
        styles,
        &[
            ("background", StyleToken::HeroBackground),
            ("color", StyleToken::HeroForeground),
        ],
    );
    html! {
        section #hero style=(hero_style) {
            h1 { (constants.headline) }
            p style=(color(styles, StyleToken::HeroForeground)) {
                "Tailored for " (company.role) " at " (company.name)
                " — here's how I'd move the numbers in 90 days."
            }
            @if let Some(logo) = &company.logo_url {
                img.logo src=(logo) alt={ (company.name) " logo" };
            }
            div.video-frame style=(style(styles, &[("background", StyleToken::OverlayStrong)])) {
                @match &page.video {
                    VideoSlot::Embed(embed) => {
                        iframe src=(embed.embed_url) title="Personal intro video"
                            frameborder="0" allow=(VIDEO_ALLOW) allowfullscreen {}
                    }
                    VideoSlot::Placeholder => {
                        div.video-placeholder style=(style(styles, &[("background", StyleToken::OverlaySoft)])) {
                            p style=(color(styles, StyleToken::HeroForeground)) { "Personal Video Message" }
                        }
                    }
                }
            }
            (cta_button(styles, &constants.scheduling_url, "Let's talk GTM? I'm available"))
        }
    }
}

fn highlights(styles: &StyleSet, constants: &PageConstants) -> Markup {
    html! {
        section #highlights style=(style(styles, &[("background", StyleToken::PageBackground)])) {
            h2 style=(color(styles, StyleToken::TextNearBlack)) { "The Numbers Speak For Themselves" }
            h3 style=(color(styles, StyleToken::AccentText)) { "Some Career Highlights" }
            div.grid {
                @for h in &constants.highlights {
                    div.stat {
                        div.stat-value style=(color(styles, StyleToken::AccentText)) { (h.stat) }
                        div.stat-label style=(color(styles, StyleToken::PrimaryText)) { (h.label) }
                        div.stat-sub style=(color(styles, StyleToken::TextSlate70)) { (h.sub) }
                    }
                }
            }
        }
    }
}

/// Separator placed before item `i` of `n` in an English list: "A, B and C".
fn list_separator(i: usize, n: usize) -> &'static str {
    match i {
        0 => "",
        _ if i + 1 == n => " and ",
        _ => ", ",
    }
}

fn challenges(styles: &StyleSet, challenges: &[Challenge]) -> Markup {
    let intro: Vec<&Challenge> = challenges.iter().take(INTRO_CHALLENGE_COUNT).collect();
    let card_style = format!(
        "border-left: {}; background: {}; border-radius: 0.75rem; padding: 2rem",
        styles.css(StyleToken::CardBorder),
        styles.css(StyleToken::CardBackground)
    );
    let badge_style = style(
        styles,
        &[
            ("background", StyleToken::PrimaryBackground),
            ("color", StyleToken::PrimaryForeground),
        ],
    );
    html! {
        section #challenges {
            h2 style=(color(styles, StyleToken::TextNearBlack)) { "The Real Reason You're Hiring This Role" }
            p style=(color(styles, StyleToken::TextSlate85)) {
                "It's not just about finding a GTM leader. "
                @if !intro.is_empty() {
                    span style=(color(styles, StyleToken::PrimaryText)) { "You need someone who can solve" }
                    " "
                    @for (i, c) in intro.iter().enumerate() {
                        (list_separator(i, intro.len()))
                        strong style=(color(styles, StyleToken::AccentText)) { (c.title) }
                    }
                    " fast."
                }
                span.block { "Here's exactly how I'd approach each." }
            }
            @for (idx, c) in challenges.iter().enumerate() {
                div.challenge style=(card_style) {
                    div.badge style=(badge_style) { (format!("{:02}", idx + 1)) }
                    h3 style=(color(styles, StyleToken::AccentText)) { (c.title) }
                    ul style=(color(styles, StyleToken::TextSlate90)) {
                        @for bullet in &c.approach {
                            li { (bullet) }
                        }
                    }
                }
            }
        }
    }
}

fn plan(styles: &StyleSet, constants: &PageConstants) -> Markup {
    let section_style = style(
        styles,
        &[
            ("background", StyleToken::AccentBackground),
            ("color", StyleToken::AccentForeground),
        ],
    );
    let card_style = format!(
        "{}; border-radius: 0.75rem; padding: 2rem",
        style(
            styles,
            &[
                ("background", StyleToken::CardOnAccentBackground),
                ("color", StyleToken::CardOnAccentForeground),
            ],
        )
    );
    html! {
        section #plan style=(section_style) {
            h2 style=(color(styles, StyleToken::AccentForeground)) { "30-60-90 Day Plan" }
            p style=(color(styles, StyleToken::AccentMutedText)) { "The road to incrementing gains." }
            div.grid {
                @for phase in &constants.plan {
                    div.plan-card style=(card_style) {
                        div.plan-days style=(color(styles, StyleToken::AccentText)) { (phase.days) " days" }
                        h3 style=(color(styles, StyleToken::PrimaryText)) { (phase.title) }
                        @for step in &phase.steps {
                            p { (step) }
                        }
                    }
                }
            }
        }
    }
}

fn icp_card(styles: &StyleSet, title: &str, items: &[String]) -> Markup {
    html! {
        div.icp-card {
            h3 style=(color(styles, StyleToken::AccentText)) { (title) }
            @if items.is_empty() {
                p style=(color(styles, StyleToken::TextSlate70)) { "To be discussed." }
            } @else {
                ul style=(color(styles, StyleToken::TextNearBlack)) {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
        }
    }
}

fn hypothesis(page: &Page) -> Markup {
    let styles = &page.styles;
    let icp = &page.content.icp;
    html! {
        section #hypothesis style=(style(styles, &[("background", StyleToken::PageBackground)])) {
            h2 style=(color(styles, StyleToken::TextNearBlack)) {
                "My GTM Hypothesis"
                span.block { "for " (page.content.company.name) }
            }
            h3 style=(color(styles, StyleToken::TextSlate70)) { "A quick brainstorm on starting points" }
            div.grid {
                (icp_card(styles, "Researched ICP", &icp.demographics))
                (icp_card(styles, "Message Pillars", &icp.message_pillars))
                (icp_card(styles, "Channel Focus", &icp.channel_focus))
                (icp_card(styles, "Risks & Mitigations", &icp.risk_mitigation))
            }
        }
    }
}

fn profile(styles: &StyleSet, constants: &PageConstants) -> Markup {
    let profile = &constants.profile;
    let linkedin_style = format!("background: {LINKEDIN_BLUE}; color: #FFFFFF");
    html! {
        section #profile style=(style(styles, &[("background", StyleToken::PageBackground)])) {
            h2 style=(color(styles, StyleToken::TextNearBlack)) { "Get To Know Me" }
            h3 style=(color(styles, StyleToken::TextSlate85)) { "Here's My LinkedIn" }
            img.avatar src=(profile.image_url) alt={ (profile.name) " LinkedIn Profile" };
            h4 style=(color(styles, StyleToken::TextNearBlack)) { (profile.name) }
            p style=(color(styles, StyleToken::TextSlate85)) { (profile.title) }
            a.linkedin href=(profile.linkedin_url) target="_blank" rel="noopener noreferrer"
                style=(linkedin_style) { "Connect on LinkedIn" }
        }
    }
}

fn closing(page: &Page, constants: &PageConstants) -> Markup {
    let styles = &page.styles;
    let hero_style = style(
        styles,
        &[
            ("background", StyleToken::HeroBackground),
            ("color", StyleToken::HeroForeground),
        ],
    );
    html! {
        section #closing style=(hero_style) {
            h2 {
                "Worth exploring how I could bring these results to "
                (page.content.company.name) "?"
            }
            p { "I'm available to meet" }
            (cta_button(styles, &constants.scheduling_url, "Book Your Strategy Session"))
        }
    }
}

fn footer(styles: &StyleSet, constants: &PageConstants) -> Markup {
    let footer_style = style(
        styles,
        &[
            ("background", StyleToken::SecondaryBackground),
            ("color", StyleToken::SecondaryForeground),
        ],
    );
    html! {
        footer style=(footer_style) {
            p { (constants.contact_line) }
        }
    }
}
