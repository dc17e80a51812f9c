//! Pure domain types with minimal dependencies
//!
//! Geometry and selection types used throughout the crate. Nothing here
//! touches rendering, I/O, or the network.

pub mod geometry;
pub mod selection;

pub use geometry::*;
pub use selection::*;
