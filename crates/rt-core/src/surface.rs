//! Capabilities the bridge needs from its host.
//!
//! The web binding implements these over `web-sys`; tests implement them
//! with recording fakes.

use crate::error::Result;
use crate::id::SurfaceId;

/// Looks up drawing surfaces by identifier.
pub trait SurfaceProvider {
    type Surface: Surface;

    /// `Ok(None)` when nothing carries `id`; `Err` when something does but
    /// it is not a drawing surface.
    fn surface_by_id(&self, id: &SurfaceId) -> Result<Option<Self::Surface>>;
}

/// A canvas-like element with a backing pixel buffer.
pub trait Surface {
    type Context: RenderContext;

    /// Set the CSS `display` property.
    fn set_display(&self, display: &str) -> Result<()>;

    /// Set a DOM attribute to a literal string value.
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    /// Backing buffer size as the host currently reports it.
    fn backing_size(&self) -> (u32, u32);

    /// Request the `"2d"` context. `Ok(None)` if the surface has none.
    fn context_2d(&self) -> Result<Option<Self::Context>>;

    /// Set the backing resolution through the `width`/`height` attributes.
    fn set_resolution(&self, width: u32, height: u32) -> Result<()> {
        self.set_attribute("width", &width.to_string())?;
        self.set_attribute("height", &height.to_string())
    }
}

/// The subset of a 2D context used for the diagnostic paint.
pub trait RenderContext {
    fn set_fill_style(&self, css: &str);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
}
