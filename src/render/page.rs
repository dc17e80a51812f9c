//! Page rasterization boundary
//!
//! The session treats page rendering as an opaque collaborator behind
//! [`PageRenderer`]. The shipped backend shells out to `pdftoppm` from
//! poppler-utils.

use std::io::Write;
use std::process::Command;

use async_trait::async_trait;
use image::RgbaImage;

use crate::document::DocumentHandle;
use crate::error::{FieldmarkError, Result};

/// PDF pages are laid out at 72 points per inch; the render scale maps onto
/// a raster DPI relative to that.
const BASE_DPI: f32 = 72.0;

/// Rasterizes one page of a loaded document into an RGBA image
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Render the given 1-based page at the given scale factor
    async fn render_page(
        &self,
        document: &DocumentHandle,
        page_number: u32,
        scale: f32,
    ) -> Result<RgbaImage>;
}

/// Page rendering backend using `pdftoppm` (from poppler-utils)
pub struct PdftoppmRenderer;

impl PdftoppmRenderer {
    pub fn new() -> Self {
        PdftoppmRenderer
    }

    /// Check if pdftoppm is available on the system
    pub fn is_available() -> bool {
        Command::new("pdftoppm")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftoppmRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a scale factor to the raster DPI pdftoppm expects
fn scale_to_dpi(scale: f32) -> u32 {
    (BASE_DPI * scale).round().max(1.0) as u32
}

#[async_trait]
impl PageRenderer for PdftoppmRenderer {
    async fn render_page(
        &self,
        document: &DocumentHandle,
        page_number: u32,
        scale: f32,
    ) -> Result<RgbaImage> {
        // pdftoppm reads from a file, so stage the bytes in a temp file that
        // lives until the subprocess is done with it.
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(document.bytes())?;

        let page_arg = page_number.to_string();
        let output = tokio::process::Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(scale_to_dpi(scale).to_string())
            .arg("-f")
            .arg(&page_arg)
            .arg("-l")
            .arg(&page_arg)
            .arg(tmpfile.path())
            // no output prefix: single page goes to stdout
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FieldmarkError::RendererUnavailable
                } else {
                    FieldmarkError::RenderFailure(format!("pdftoppm failed to start: {e}"))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FieldmarkError::RenderFailure(format!(
                "pdftoppm exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let image = image::load_from_memory(&output.stdout)
            .map_err(|e| FieldmarkError::RenderFailure(format!("decoding page raster: {e}")))?;
        let rgba = image.to_rgba8();
        log::debug!(
            "rendered page {} at scale {} ({}x{} px)",
            page_number,
            scale,
            rgba.width(),
            rgba.height()
        );
        Ok(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_dpi() {
        assert_eq!(scale_to_dpi(1.0), 72);
        assert_eq!(scale_to_dpi(1.5), 108);
        assert_eq!(scale_to_dpi(0.0), 1);
    }
}
