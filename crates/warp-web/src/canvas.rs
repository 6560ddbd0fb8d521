//! Canvas2D implementation of the engine drawing surface.

use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use warp_engine::glam::Vec2;
use warp_engine::{Color, StarfieldConfig, Surface};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Attribute on the canvas element holding optional starfield JSON config.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Look up a canvas by element id.
pub fn acquire(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", id)))
}

/// Starfield config from the canvas `data-config` attribute.
/// A missing attribute gives the defaults; malformed JSON is logged and ignored.
pub fn read_config(canvas: &HtmlCanvasElement) -> StarfieldConfig {
    let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return StarfieldConfig::default();
    };
    match StarfieldConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}: ignoring invalid config ({}), using defaults", CONFIG_ATTRIBUTE, err);
            StarfieldConfig::default()
        }
    }
}

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    fill: Option<Color>,
    stroke: Option<Color>,
}

impl CanvasSurface {
    /// Size the canvas to `width` x `height` and take its 2D context.
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            fill: None,
            stroke: None,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.stroke != Some(color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.stroke = Some(color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.begin_path();
        // arc only fails for negative radii, excluded above
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
