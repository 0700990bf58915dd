// Theme Resolver
// Implements: hex color parsing, BT.601 black-or-white contrast, the semantic style-token table.
// Runs once per page on the theme sub-object. Malformed colors fail fast.

pub mod color;
pub mod style;

pub use color::{pick_foreground_color, Foreground, Rgb};
pub use style::{resolve_style_set, BrandPalette, StyleSet, StyleToken, StyleValue};
