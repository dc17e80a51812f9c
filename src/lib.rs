//! Fieldmark: mark labeled field regions on a rendered PDF page and export
//! them to a data-extraction backend.
//!
//! The crate is organized around a [`session::SelectionSession`] that owns
//! one loaded document: its page raster, the drag gesture state machine, and
//! the ordered [`domain::SelectionStore`]. Page rasterization sits behind
//! the [`render::PageRenderer`] trait; [`export::ExportClient`] turns the
//! store into an extraction request and saves the returned spreadsheet.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod export;
pub mod render;
pub mod session;
