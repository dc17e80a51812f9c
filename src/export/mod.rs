//! Selection export to the extraction backend
//!
//! This module contains:
//! - The wire payload types
//! - The HTTP client that submits selections and saves the returned artifact

pub mod client;
pub mod payload;

pub use client::ExportClient;
pub use payload::{FieldRegion, to_payload};
