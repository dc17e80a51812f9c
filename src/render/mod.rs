//! Page rasterization and overlay drawing
//!
//! This module contains:
//! - The page renderer trait and the pdftoppm-backed implementation
//! - Overlay compositing using tiny-skia

pub mod overlay;
pub mod page;

pub use page::{PageRenderer, PdftoppmRenderer};
