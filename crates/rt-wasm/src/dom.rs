//! `web-sys` implementations of the surface capabilities.

use rt_core::{BridgeError, RenderContext, Result, Surface, SurfaceId, SurfaceProvider};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Canvas lookup over a DOM document.
pub struct DomSurfaces {
    document: Document,
}

impl DomSurfaces {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Use the ambient `window.document`.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| BridgeError::host("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| BridgeError::host("window has no document"))?;
        Ok(Self::new(document))
    }
}

impl SurfaceProvider for DomSurfaces {
    type Surface = CanvasSurface;

    fn surface_by_id(&self, id: &SurfaceId) -> Result<Option<CanvasSurface>> {
        let Some(element) = self.document.get_element_by_id(id.as_str()) else {
            return Ok(None);
        };
        element
            .dyn_into::<HtmlCanvasElement>()
            .map(|canvas| Some(CanvasSurface(canvas)))
            .map_err(|_| BridgeError::NotASurface(id.clone()))
    }
}

pub struct CanvasSurface(HtmlCanvasElement);

impl CanvasSurface {
    pub fn into_inner(self) -> HtmlCanvasElement {
        self.0
    }
}

impl Surface for CanvasSurface {
    type Context = CanvasContext;

    fn set_display(&self, display: &str) -> Result<()> {
        self.0
            .style()
            .set_property("display", display)
            .map_err(|e| host_error(&e))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.0.set_attribute(name, value).map_err(|e| host_error(&e))
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.0.width(), self.0.height())
    }

    fn context_2d(&self) -> Result<Option<CanvasContext>> {
        let Some(object) = self.0.get_context("2d").map_err(|e| host_error(&e))? else {
            return Ok(None);
        };
        Ok(object
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
            .map(CanvasContext))
    }
}

pub struct CanvasContext(CanvasRenderingContext2d);

impl RenderContext for CanvasContext {
    fn set_fill_style(&self, css: &str) {
        self.0.set_fill_style_str(css);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.0.fill_rect(x, y, width, height);
    }
}

pub(crate) fn host_error(value: &JsValue) -> BridgeError {
    BridgeError::Host(describe_js(value))
}

/// Best-effort message for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
