//! Loaded document handles
//!
//! A handle owns the validated PDF bytes plus the generation it was loaded
//! under. Generations make render results for a replaced document inert: a
//! render resolved for an old generation is discarded instead of overwriting
//! the current page.

use crate::error::{FieldmarkError, Result};

/// Session-assigned load counter; bumped on every successful document load
pub type Generation = u64;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Opaque reference to a loaded PDF document.
///
/// Lives from a successful load until the next file replaces it; dropping
/// the handle is the only teardown.
#[derive(Clone, Debug)]
pub struct DocumentHandle {
    bytes: Vec<u8>,
    generation: Generation,
}

impl DocumentHandle {
    /// Validate the bytes as a PDF and wrap them. Non-PDF input is rejected
    /// without creating a handle.
    pub fn new(bytes: Vec<u8>, generation: Generation) -> Result<Self> {
        if !is_pdf(&bytes) {
            return Err(FieldmarkError::InvalidFileType);
        }
        Ok(Self { bytes, generation })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// Content check used in place of a browser MIME-type test
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_accepted() {
        assert!(is_pdf(b"%PDF-1.7\nrest"));
        let handle = DocumentHandle::new(b"%PDF-1.4\n".to_vec(), 3).unwrap();
        assert_eq!(handle.generation(), 3);
        assert_eq!(handle.bytes(), b"%PDF-1.4\n");
    }

    #[test]
    fn test_non_pdf_rejected() {
        assert!(!is_pdf(b"<html>"));
        assert!(!is_pdf(b""));
        let err = DocumentHandle::new(b"plain text".to_vec(), 0).unwrap_err();
        assert!(matches!(err, FieldmarkError::InvalidFileType));
    }
}
