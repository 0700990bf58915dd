// Config Normalizer
// Implements: string-or-array list resolution, canonical content model, video embed rule.
// Runs once per page, before theme resolution. Pure: no I/O.

pub mod lists;
pub mod normalize;
pub mod video;

pub use normalize::normalize;
pub use video::{resolve_video, VideoEmbed, VideoProvider, VideoSlot};
