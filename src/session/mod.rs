//! Per-document selection session
//!
//! This module contains:
//! - The gesture state machine (Idle → Dragging → AwaitingLabel)
//! - Session state owning the document handle, page raster, and store

pub mod state;

pub use state::{GestureState, SelectionSession};
