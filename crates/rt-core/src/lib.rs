//! Surface bridge between a host page and the retris game engine.
//!
//! Resolves the drawing surface, forces it visible, fixes its backing
//! resolution, paints a diagnostic fill, and hands the surface to the
//! engine's single entry point. Host access goes through the capability
//! traits in [`surface`] so the whole sequence runs against fakes in tests.

pub mod bridge;
pub mod color;
pub mod config;
pub mod error;
pub mod id;
pub mod surface;

pub use bridge::{Diagnostics, SurfaceBridge, launch};
pub use color::{BaseColor, Color};
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use id::SurfaceId;
pub use surface::{RenderContext, Surface, SurfaceProvider};
