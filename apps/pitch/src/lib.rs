//! Personalized GTM pitch page engine.
//!
//! A page author supplies one JSON configuration per target employer. The
//! engine normalizes it into a canonical content model, derives a full style
//! set from three brand colors, and hands both to a renderer.

pub mod config;
pub mod content;
pub mod errors;
pub mod models;
pub mod page;
pub mod render;
pub mod theme;

pub use errors::PitchError;
pub use page::Page;
pub use render::{HtmlRenderer, PageConstants, PageRenderer};
