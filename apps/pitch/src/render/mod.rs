// Rendering layer
// Implements: the renderer seam, page-wide constants, and the static HTML renderer.
// Renderers only look values up in the Page; they never re-derive content or colors.

pub mod constants;
pub mod html;

pub use constants::PageConstants;
pub use html::HtmlRenderer;

use crate::errors::PitchError;
use crate::page::Page;

/// A renderer turns one resolved `Page` into markup. Implement this to add
/// an output format without touching normalization or theme resolution.
pub trait PageRenderer {
    fn render(&self, page: &Page, constants: &PageConstants) -> Result<String, PitchError>;
}
