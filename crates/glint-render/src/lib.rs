//! # Glint Render
//!
//! Presentation adapters for `glint-syntax` token streams: ANSI styling
//! for terminals and `<span>`-based HTML markup. Both renderers are pure
//! string builders; styling never changes which characters are emitted,
//! only how they are dressed.

pub mod ansi;
pub mod html;
mod theme;

pub use html::CssClasses;
pub use theme::{Style, Theme};
