//! The launch sequence: locate, configure, paint, hand off.
//!
//! Runs once, synchronously, in a fixed order. Resolution is set before the
//! paint so the fill covers the configured backing buffer. Any failure stops
//! the sequence with a named [`BridgeError`]; a missing surface or context
//! means the engine is never called.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::surface::{RenderContext, Surface, SurfaceProvider};
use std::fmt;

/// What the bridge observed while preparing the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    pub surface_found: bool,
    pub context_found: bool,
    /// Backing size read back after configuration.
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "canvas is loaded: surface={} context={} ({}x{})",
            self.surface_found, self.context_found, self.width, self.height
        )
    }
}

pub struct SurfaceBridge<P> {
    provider: P,
    config: BridgeConfig,
}

impl<P: SurfaceProvider> SurfaceBridge<P> {
    pub fn new(provider: P, config: BridgeConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Prepare the surface and pass it to `engine`, which is called at most
    /// once. The engine's output is discarded; its error is returned.
    pub fn launch<F, T>(self, engine: F) -> Result<Diagnostics>
    where
        F: FnOnce(P::Surface) -> Result<T>,
    {
        self.config.validate()?;
        let config = &self.config;

        let surface = self
            .provider
            .surface_by_id(&config.surface_id)?
            .ok_or_else(|| BridgeError::SurfaceNotFound(config.surface_id.clone()))?;
        log::debug!("resolved surface {}", config.surface_id);

        surface.set_display(&config.display)?;
        surface.set_resolution(config.width, config.height)?;

        let (width, height) = surface.backing_size();
        let mut diagnostics = Diagnostics {
            surface_found: true,
            context_found: false,
            width,
            height,
        };

        let Some(ctx) = surface.context_2d()? else {
            log::warn!("{diagnostics}");
            return Err(BridgeError::ContextUnavailable(config.surface_id.clone()));
        };
        diagnostics.context_found = true;

        self.paint(&ctx);
        log::info!("{diagnostics}");
        if (width, height) != (config.width, config.height) {
            log::warn!(
                "surface reports {width}x{height}, configured {}x{}",
                config.width,
                config.height
            );
        }

        // The context only lives for the diagnostic paint.
        drop(ctx);

        log::debug!("handing {} to `{}`", config.surface_id, config.entry_point);
        engine(surface)?;
        Ok(diagnostics)
    }

    fn paint<C: RenderContext>(&self, ctx: &C) {
        let fill = self.config.fill.to_css();
        ctx.set_fill_style(&fill);
        ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.config.width),
            f64::from(self.config.height),
        );
    }
}

/// Run the bridge against `provider` with the default configuration.
pub fn launch<P, F, T>(provider: P, engine: F) -> Result<Diagnostics>
where
    P: SurfaceProvider,
    F: FnOnce(P::Surface) -> Result<T>,
{
    SurfaceBridge::new(provider, BridgeConfig::default()).launch(engine)
}
