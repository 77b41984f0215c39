//! WASM bridge for retris — hands the page's canvas to the game engine.
//!
//! Compiled via `wasm-pack build --target web`. The page imports the engine
//! module and this bridge, then calls one of the `launch*` exports:
//!
//! ```js
//! import init, { launch } from "./pkg/rt_wasm.js";
//! import { Cursive } from "retris";
//! await init();
//! launch(Cursive);
//! ```

mod dom;
mod engine;
mod logging;

pub use dom::{CanvasContext, CanvasSurface, DomSurfaces};
pub use engine::EngineModule;

use rt_core::{BridgeConfig, Diagnostics, SurfaceBridge};
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Launch with the stock configuration against `window.document`.
///
/// `engine` is the engine module (or class) exporting
/// `retris_with_canvas`, or that function itself.
#[wasm_bindgen]
pub fn launch(engine: JsValue) -> Result<(), JsError> {
    let surfaces = DomSurfaces::from_window()?;
    run(surfaces, &engine, BridgeConfig::default())?;
    Ok(())
}

/// Launch against `window.document` with a JSON config; omitted fields
/// keep their defaults.
#[wasm_bindgen]
pub fn launch_with_config(engine: JsValue, config_json: &str) -> Result<(), JsError> {
    let config = BridgeConfig::from_json(config_json)?;
    let surfaces = DomSurfaces::from_window()?;
    run(surfaces, &engine, config)?;
    Ok(())
}

/// Launch against an explicit document.
#[wasm_bindgen]
pub fn launch_in(
    document: Document,
    engine: JsValue,
    config_json: Option<String>,
) -> Result<(), JsError> {
    let config = match config_json {
        Some(json) => BridgeConfig::from_json(&json)?,
        None => BridgeConfig::default(),
    };
    run(DomSurfaces::new(document), &engine, config)?;
    Ok(())
}

/// Install the console logger at `level` (`off` … `trace`).
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    logging::init(logging::parse_level(level)?);
    Ok(())
}

/// The stock configuration as JSON.
#[wasm_bindgen]
pub fn default_config() -> String {
    BridgeConfig::default()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}

fn run(surfaces: DomSurfaces, engine: &JsValue, config: BridgeConfig) -> rt_core::Result<Diagnostics> {
    console_error_panic_hook_setup();
    logging::init_default();

    let engine = EngineModule::resolve(engine, &config.entry_point)?;
    SurfaceBridge::new(surfaces, config).launch(|surface| engine.enter(surface.into_inner()))
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("retris bridge panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
