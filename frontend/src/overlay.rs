use crate::error::ClientError;
use gloo_events::EventListener;
use shared::DetectionBox;
use shared::overlay::{
    self, BADGE_FILL, CAPTION_FILL, CAPTION_FONT, FRAME_LINE_WIDTH, FRAME_STROKE,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Detection boxes painted over the cropped face once the image has decoded.
///
/// The paint happens in the image's `load` handler; dropping this before the
/// image loads cancels it.
pub struct DetectionOverlay {
    _image: HtmlImageElement,
    _on_load: EventListener,
}

impl DetectionOverlay {
    pub fn start(
        canvas: HtmlCanvasElement,
        source: &str,
        boxes: Vec<DetectionBox>,
    ) -> Result<Self, ClientError> {
        let image = HtmlImageElement::new()?;

        let on_load = EventListener::once(&image, "load", {
            let image = image.clone();
            move |_| {
                if let Err(e) = paint(&canvas, &image, &boxes) {
                    log::error!("Failed to draw detections: {}", e);
                }
            }
        });

        image.set_cross_origin(Some("anonymous"));
        image.set_src(source);

        Ok(Self {
            _image: image,
            _on_load: on_load,
        })
    }
}

fn paint(
    canvas: &HtmlCanvasElement,
    image: &HtmlImageElement,
    boxes: &[DetectionBox],
) -> Result<(), ClientError> {
    canvas.set_width(image.natural_width());
    canvas.set_height(image.natural_height());

    let ctx = canvas
        .get_context("2d")?
        .ok_or(ClientError::Unsupported("Canvas 2D"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)?;

    for glyph in overlay::layout(boxes) {
        let frame = glyph.frame;
        ctx.set_stroke_style_str(FRAME_STROKE);
        ctx.set_line_width(FRAME_LINE_WIDTH);
        ctx.stroke_rect(frame.x, frame.y, frame.width, frame.height);

        let badge = glyph.badge;
        ctx.set_fill_style_str(BADGE_FILL);
        ctx.fill_rect(badge.x, badge.y, badge.width, badge.height);

        let (x, y) = glyph.caption_at;
        ctx.set_fill_style_str(CAPTION_FILL);
        ctx.set_font(CAPTION_FONT);
        ctx.fill_text(&glyph.caption, x, y)?;
    }

    log::debug!("Painted {} detections", boxes.len());
    Ok(())
}
