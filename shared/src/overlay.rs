//! Geometry for the detection overlay drawn over the cropped face.

use crate::analysis::{format_percent, DetectionBox};
use derive_more::Constructor;

pub const FRAME_STROKE: &str = "#A8D5BA";
pub const BADGE_FILL: &str = "rgba(168, 213, 186, 0.9)";
pub const CAPTION_FILL: &str = "#ffffff";
pub const CAPTION_FONT: &str = "bold 14px 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto";
pub const FRAME_LINE_WIDTH: f64 = 3.0;

const BADGE_HEIGHT: f64 = 25.0;
const BADGE_CHAR_WIDTH: f64 = 8.0;
// Room for the confidence suffix.
const BADGE_EXTRA_CHARS: usize = 10;
const CAPTION_INSET_X: f64 = 5.0;
const CAPTION_BASELINE_Y: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to paint one detection.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGlyph {
    pub frame: Rect,
    pub badge: Rect,
    pub caption: String,
    pub caption_at: (f64, f64),
}

impl BoxGlyph {
    pub fn new(detection: &DetectionBox) -> Self {
        let [x1, y1, x2, y2] = detection.bbox;
        // Badge width tracks the label's length in UTF-16 units.
        let label_len = detection.label.encode_utf16().count() + BADGE_EXTRA_CHARS;

        Self {
            frame: Rect::new(x1, y1, x2 - x1, y2 - y1),
            badge: Rect::new(
                x1,
                y1 - BADGE_HEIGHT,
                label_len as f64 * BADGE_CHAR_WIDTH,
                BADGE_HEIGHT,
            ),
            caption: format!("{} {}", detection.label, format_percent(detection.confidence)),
            caption_at: (x1 + CAPTION_INSET_X, y1 - CAPTION_BASELINE_Y),
        }
    }
}

/// Glyphs in paint order; later boxes cover earlier ones.
pub fn layout(boxes: &[DetectionBox]) -> Vec<BoxGlyph> {
    boxes.iter().map(BoxGlyph::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(label: &str, bbox: [f64; 4], confidence: f64) -> DetectionBox {
        DetectionBox {
            bbox,
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn glyph_geometry() {
        let glyph = BoxGlyph::new(&detection("papule", [20.0, 50.0, 80.0, 110.0], 0.873));
        assert_eq!(glyph.frame, Rect::new(20.0, 50.0, 60.0, 60.0));
        assert_eq!(glyph.badge, Rect::new(20.0, 25.0, 128.0, 25.0));
        assert_eq!(glyph.caption, "papule 87.3%");
        assert_eq!(glyph.caption_at, (25.0, 42.0));
    }

    #[test]
    fn badge_counts_utf16_units() {
        let glyph = BoxGlyph::new(&detection("é", [0.0, 30.0, 1.0, 31.0], 1.0));
        assert_eq!(glyph.badge.width, 88.0);
        assert_eq!(glyph.caption, "é 100.0%");
    }

    #[test]
    fn layout_keeps_sequence_order() {
        let boxes = vec![
            detection("whitehead", [0.0, 0.0, 10.0, 10.0], 0.5),
            detection("blackhead", [0.0, 0.0, 10.0, 10.0], 0.6),
        ];
        let glyphs = layout(&boxes);
        assert_eq!(glyphs.len(), 2);
        assert!(glyphs[0].caption.starts_with("whitehead"));
        assert!(glyphs[1].caption.starts_with("blackhead"));
    }
}
