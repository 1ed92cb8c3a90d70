//! Asset classification module
//!
//! Sorts release assets into per-platform download lists and derives the
//! friendly labels shown next to each download link.

mod links;
mod platform;

pub use links::{AssetLinks, classify};
pub use platform::{Platform, SYMBOLS_MARKER};
