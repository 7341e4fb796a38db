//! Canvas Surface
//!
//! `RenderSurface` backed by the overlay canvas and the live DOM. Every
//! measurement is a fresh `getBoundingClientRect`.

use leptos_dragdrop::{ITEM_ATTR, TARGET_ATTR};
use match_engine::{ElementRef, LineStyle, Point, Rect, RenderSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement};

pub struct DomSurface {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl DomSurface {
    pub fn new(container: HtmlElement, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { container, canvas, ctx })
    }

    fn find(&self, element: ElementRef<'_>) -> Option<Element> {
        let selector = match element {
            ElementRef::Item(name) => attr_selector(ITEM_ATTR, name),
            ElementRef::Slot(name) => attr_selector(TARGET_ATTR, name),
        };
        self.container.query_selector(&selector).ok().flatten()
    }
}

fn to_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// `[attr="name"]` with quotes and backslashes escaped
fn attr_selector(attr: &str, name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{}=\"{}\"]", attr, escaped)
}

impl RenderSurface for DomSurface {
    fn container_rect(&self) -> Option<Rect> {
        Some(to_rect(&self.container))
    }

    fn element_rect(&self, element: ElementRef<'_>) -> Option<Rect> {
        self.find(element).map(|el| to_rect(&el))
    }

    fn resize(&mut self, width: f64, height: f64) {
        // Assigning either dimension resets the bitmap
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style(&JsValue::from_str(&style.color));
        self.ctx.set_line_width(style.width);
        self.ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_selector() {
        assert_eq!(attr_selector("data-item", "verde"), "[data-item=\"verde\"]");
        assert_eq!(attr_selector("data-target", "a\"b"), "[data-target=\"a\\\"b\"]");
    }
}
