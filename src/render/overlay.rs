//! Overlay compositing using tiny-skia
//!
//! Strokes the committed selections and the in-progress candidate over a
//! copy of the page raster. Composing is a pure function of its inputs;
//! the store is never touched.

use image::RgbaImage;
use tiny_skia::{LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::Config;
use crate::domain::{LabeledSelection, Rect};

/// Wrap an RgbaImage in a Pixmap for drawing, copying the pixels back after
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    img.copy_from_slice(pixmap.data());
}

fn build_rect_path(rect: &Rect) -> Option<tiny_skia::Path> {
    let r = rect.normalized();
    let mut pb = PathBuilder::new();
    pb.move_to(r.x, r.y);
    pb.line_to(r.x + r.width, r.y);
    pb.line_to(r.x + r.width, r.y + r.height);
    pb.line_to(r.x, r.y + r.height);
    pb.close();
    pb.finish()
}

/// Stroke a single rectangle outline onto the image
pub fn stroke_rect(img: &mut RgbaImage, rect: &Rect, color: [u8; 4], width: f32) {
    with_pixmap(img, |pixmap| {
        let Some(path) = build_rect_path(rect) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
        paint.anti_alias = false;

        let stroke = Stroke {
            width: width.max(1.0),
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    });
}

/// Compose the full overlay: page raster, then every committed selection,
/// then the candidate rectangle in its distinguishing color.
pub fn compose(
    page: &RgbaImage,
    selections: &[LabeledSelection],
    candidate: Option<Rect>,
    config: &Config,
) -> RgbaImage {
    let mut out = page.clone();
    for selection in selections {
        stroke_rect(
            &mut out,
            &selection.rect,
            config.committed_color.to_rgba_u8(),
            config.stroke_width,
        );
    }
    if let Some(rect) = candidate {
        stroke_rect(
            &mut out,
            &rect,
            config.candidate_color.to_rgba_u8(),
            config.stroke_width,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn white_page(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_compose_strokes_committed_selection() {
        let page = white_page(200, 150);
        let selections = vec![LabeledSelection {
            label: "Total".to_string(),
            rect: Rect::new(10.0, 10.0, 50.0, 20.0),
        }];
        let config = Config::default();

        let overlay = compose(&page, &selections, None, &config);

        // Left edge midpoint is covered by the stroke
        assert_eq!(overlay.get_pixel(10, 20), &Rgba([255, 0, 0, 255]));
        // Top edge midpoint
        assert_eq!(overlay.get_pixel(35, 10), &Rgba([255, 0, 0, 255]));
        // Interior stays page-colored
        assert_eq!(overlay.get_pixel(35, 20), &Rgba([255, 255, 255, 255]));
        // Far corner untouched
        assert_eq!(overlay.get_pixel(190, 140), &Rgba([255, 255, 255, 255]));
        // The input page was not mutated
        assert_eq!(page.get_pixel(10, 20), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_compose_strokes_candidate_in_its_own_color() {
        let page = white_page(200, 150);
        let config = Config::default();

        let overlay = compose(&page, &[], Some(Rect::new(10.0, 10.0, 30.0, 15.0)), &config);

        let candidate = Rgba(config.candidate_color.to_rgba_u8());
        assert_eq!(overlay.get_pixel(10, 17), &candidate);
        assert_eq!(overlay.get_pixel(25, 10), &candidate);
        assert_eq!(overlay.get_pixel(25, 17), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_compose_normalizes_signed_candidate() {
        let page = white_page(100, 100);
        let config = Config::default();

        // Drag up-left from (60, 60): same outline as (20, 20, 40x40)
        let overlay = compose(&page, &[], Some(Rect::new(60.0, 60.0, -40.0, -40.0)), &config);
        let candidate = Rgba(config.candidate_color.to_rgba_u8());
        assert_eq!(overlay.get_pixel(20, 40), &candidate);
        assert_eq!(overlay.get_pixel(60, 40), &candidate);
    }

    #[test]
    fn test_empty_store_and_no_candidate_is_the_bare_page() {
        let page = white_page(50, 50);
        let overlay = compose(&page, &[], None, &Config::default());
        assert_eq!(overlay, page);
    }
}
