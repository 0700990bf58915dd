//! Theme Resolver: three brand colors → the page's full style set.
//!
//! The style set is a fixed table: every [`StyleToken`] always has a value,
//! so the renderer can look tokens up without handling misses. Brand-driven
//! surfaces pair a background with its [`Rgb::foreground`]; body-text tones
//! are fixed slate shades that stay legible on the white sections whatever
//! the brand palette is.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::errors::PitchError;
use crate::models::ThemeConfig;
use crate::theme::color::{parse_brand_color, Foreground, Rgb};

const HERO_GRADIENT_ANGLE_DEG: u16 = 135;
const CARD_WASH_ANGLE_DEG: u16 = 180;
const CARD_BORDER_PX: u8 = 4;

// ────────────────────────────────────────────────────────────────────────────
// Style values
// ────────────────────────────────────────────────────────────────────────────

/// A single fill: opaque, or translucent with an opacity in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid(Rgb),
    Alpha(Rgb, u8),
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(rgb) => write!(f, "{rgb}"),
            Paint::Alpha(rgb, pct) => {
                write!(f, "rgba({},{},{},{})", rgb.r, rgb.g, rgb.b, opacity(*pct))
            }
        }
    }
}

/// CSS opacity from a percentage: 70 → "0.7", 2 → "0.02", 0 → "0".
fn opacity(pct: u8) -> String {
    match pct.min(100) {
        0 => "0".to_string(),
        100 => "1".to_string(),
        p => format!("0.{p:02}").trim_end_matches('0').to_string(),
    }
}

/// A CSS linear gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub angle_deg: u16,
    pub stops: Vec<Paint>,
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle_deg)?;
        for stop in &self.stops {
            write!(f, ", {stop}")?;
        }
        write!(f, ")")
    }
}

/// The concrete value behind a style token. `Display` yields the CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Paint(Paint),
    Gradient(Gradient),
    Border { width_px: u8, paint: Paint },
}

impl StyleValue {
    fn solid(rgb: Rgb) -> Self {
        StyleValue::Paint(Paint::Solid(rgb))
    }

    fn alpha(rgb: Rgb, pct: u8) -> Self {
        StyleValue::Paint(Paint::Alpha(rgb, pct))
    }

    fn foreground(fg: Foreground) -> Self {
        StyleValue::solid(fg.rgb())
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Paint(paint) => write!(f, "{paint}"),
            StyleValue::Gradient(gradient) => write!(f, "{gradient}"),
            StyleValue::Border { width_px, paint } => write!(f, "{width_px}px solid {paint}"),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

/// Semantic surface names used by every section of the page.
///
/// Variant order is the table order; `ALL` must list them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleToken {
    HeroBackground,
    HeroForeground,
    PrimaryBackground,
    PrimaryForeground,
    PrimaryText,
    SecondaryBackground,
    SecondaryForeground,
    AccentBackground,
    AccentForeground,
    AccentText,
    AccentMutedText,
    PageBackground,
    ButtonBackground,
    ButtonForeground,
    CardBorder,
    CardBackground,
    CardOnAccentBackground,
    CardOnAccentForeground,
    OverlayStrong,
    OverlaySoft,
    TextNearBlack,
    TextSlate70,
    TextSlate85,
    TextSlate90,
}

impl StyleToken {
    pub const COUNT: usize = 24;

    pub const ALL: [StyleToken; StyleToken::COUNT] = [
        StyleToken::HeroBackground,
        StyleToken::HeroForeground,
        StyleToken::PrimaryBackground,
        StyleToken::PrimaryForeground,
        StyleToken::PrimaryText,
        StyleToken::SecondaryBackground,
        StyleToken::SecondaryForeground,
        StyleToken::AccentBackground,
        StyleToken::AccentForeground,
        StyleToken::AccentText,
        StyleToken::AccentMutedText,
        StyleToken::PageBackground,
        StyleToken::ButtonBackground,
        StyleToken::ButtonForeground,
        StyleToken::CardBorder,
        StyleToken::CardBackground,
        StyleToken::CardOnAccentBackground,
        StyleToken::CardOnAccentForeground,
        StyleToken::OverlayStrong,
        StyleToken::OverlaySoft,
        StyleToken::TextNearBlack,
        StyleToken::TextSlate70,
        StyleToken::TextSlate85,
        StyleToken::TextSlate90,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleToken::HeroBackground => "hero-background",
            StyleToken::HeroForeground => "hero-foreground",
            StyleToken::PrimaryBackground => "primary-background",
            StyleToken::PrimaryForeground => "primary-foreground",
            StyleToken::PrimaryText => "primary-text",
            StyleToken::SecondaryBackground => "secondary-background",
            StyleToken::SecondaryForeground => "secondary-foreground",
            StyleToken::AccentBackground => "accent-background",
            StyleToken::AccentForeground => "accent-foreground",
            StyleToken::AccentText => "accent-text",
            StyleToken::AccentMutedText => "accent-muted-text",
            StyleToken::PageBackground => "page-background",
            StyleToken::ButtonBackground => "button-background",
            StyleToken::ButtonForeground => "button-foreground",
            StyleToken::CardBorder => "card-border",
            StyleToken::CardBackground => "card-background",
            StyleToken::CardOnAccentBackground => "card-on-accent-background",
            StyleToken::CardOnAccentForeground => "card-on-accent-foreground",
            StyleToken::OverlayStrong => "overlay-strong",
            StyleToken::OverlaySoft => "overlay-soft",
            StyleToken::TextNearBlack => "text-near-black",
            StyleToken::TextSlate70 => "text-slate-70",
            StyleToken::TextSlate85 => "text-slate-85",
            StyleToken::TextSlate90 => "text-slate-90",
        }
    }

    /// Tokens whose value is a contrast decision (always black or white).
    pub fn is_foreground(self) -> bool {
        self.name().ends_with("-foreground")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Brand palette and style set
// ────────────────────────────────────────────────────────────────────────────

/// The validated brand colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandPalette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
}

impl BrandPalette {
    /// Validates all three colors; the first malformed one fails with its field name.
    pub fn from_theme(theme: &ThemeConfig) -> Result<Self, PitchError> {
        Ok(BrandPalette {
            primary: parse_brand_color("theme.primary", &theme.primary)?,
            secondary: parse_brand_color("theme.secondary", &theme.secondary)?,
            accent: parse_brand_color("theme.accent", &theme.accent)?,
        })
    }
}

/// The resolved style table. Built once per page; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    pub palette: BrandPalette,
    values: [StyleValue; StyleToken::COUNT],
}

impl StyleSet {
    pub fn get(&self, token: StyleToken) -> &StyleValue {
        &self.values[token as usize]
    }

    /// CSS value for `token`, ready for a `style` attribute.
    pub fn css(&self, token: StyleToken) -> String {
        self.get(token).css()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleToken, &StyleValue)> {
        StyleToken::ALL.into_iter().zip(self.values.iter())
    }
}

impl Serialize for StyleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StyleToken::COUNT))?;
        for (token, value) in self.iter() {
            map.serialize_entry(token.name(), value)?;
        }
        map.end()
    }
}

/// Resolves the full style set from the authored theme.
///
/// Fails fast on the first malformed brand color; never substitutes a default.
pub fn resolve_style_set(theme: &ThemeConfig) -> Result<StyleSet, PitchError> {
    let palette = BrandPalette::from_theme(theme)?;
    let set = StyleSet {
        palette,
        values: StyleToken::ALL.map(|token| value_for(token, &palette, theme)),
    };
    debug!(
        "Resolved style set: primary {} on {}, secondary {} on {}, accent {} on {}",
        palette.primary.foreground().as_hex(),
        palette.primary,
        palette.secondary.foreground().as_hex(),
        palette.secondary,
        palette.accent.foreground().as_hex(),
        palette.accent,
    );
    Ok(set)
}

fn value_for(token: StyleToken, palette: &BrandPalette, theme: &ThemeConfig) -> StyleValue {
    let BrandPalette {
        primary,
        secondary,
        accent,
    } = *palette;

    match token {
        StyleToken::HeroBackground => StyleValue::Gradient(hero_gradient(palette, theme)),
        StyleToken::HeroForeground => StyleValue::foreground(primary.foreground()),
        StyleToken::PrimaryBackground => StyleValue::solid(primary),
        StyleToken::PrimaryForeground => StyleValue::foreground(primary.foreground()),
        StyleToken::PrimaryText => StyleValue::solid(primary),
        StyleToken::SecondaryBackground => StyleValue::solid(secondary),
        StyleToken::SecondaryForeground => StyleValue::foreground(secondary.foreground()),
        StyleToken::AccentBackground => StyleValue::solid(accent),
        StyleToken::AccentForeground => StyleValue::foreground(accent.foreground()),
        StyleToken::AccentText => StyleValue::solid(accent),
        StyleToken::AccentMutedText => StyleValue::alpha(accent.foreground().rgb(), 85),
        StyleToken::PageBackground => StyleValue::solid(Rgb::WHITE),
        StyleToken::ButtonBackground => StyleValue::solid(Rgb::WHITE),
        StyleToken::ButtonForeground => StyleValue::foreground(Rgb::WHITE.foreground()),
        StyleToken::CardBorder => StyleValue::Border {
            width_px: CARD_BORDER_PX,
            paint: Paint::Solid(primary),
        },
        StyleToken::CardBackground => StyleValue::Gradient(Gradient {
            angle_deg: CARD_WASH_ANGLE_DEG,
            stops: vec![Paint::Alpha(Rgb::BLACK, 2), Paint::Alpha(Rgb::BLACK, 0)],
        }),
        StyleToken::CardOnAccentBackground => StyleValue::solid(Rgb::WHITE),
        StyleToken::CardOnAccentForeground => StyleValue::foreground(Rgb::WHITE.foreground()),
        StyleToken::OverlayStrong => StyleValue::alpha(Rgb::BLACK, 25),
        StyleToken::OverlaySoft => StyleValue::alpha(Rgb::BLACK, 20),
        StyleToken::TextNearBlack => StyleValue::solid(Rgb::SLATE_900),
        StyleToken::TextSlate70 => StyleValue::alpha(Rgb::SLATE_900, 70),
        StyleToken::TextSlate85 => StyleValue::alpha(Rgb::SLATE_900, 85),
        StyleToken::TextSlate90 => StyleValue::alpha(Rgb::SLATE_900, 90),
    }
}

fn hero_gradient(palette: &BrandPalette, theme: &ThemeConfig) -> Gradient {
    let mut stops = vec![Paint::Solid(palette.primary)];
    if theme.gradient_through_secondary {
        stops.push(Paint::Solid(palette.secondary));
    }
    stops.push(Paint::Solid(palette.accent));
    Gradient {
        angle_deg: HERO_GRADIENT_ANGLE_DEG,
        stops,
    }
}
