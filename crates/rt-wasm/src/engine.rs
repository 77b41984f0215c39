//! The game engine as seen from the bridge: one callable export.

use crate::dom::describe_js;
use js_sys::{Function, Reflect};
use rt_core::{BridgeError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Where the entry point was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntrySource {
    /// A callable property named after the entry point.
    Export,
    /// The value passed in is itself the entry function.
    Module,
    Missing,
}

/// A wasm-bindgen class is itself callable, so the named export wins over
/// calling the module.
fn entry_source(export_callable: bool, module_callable: bool) -> EntrySource {
    if export_callable {
        EntrySource::Export
    } else if module_callable {
        EntrySource::Module
    } else {
        EntrySource::Missing
    }
}

pub struct EngineModule {
    this: JsValue,
    entry: Function,
}

impl EngineModule {
    /// Accept a module, class, or object exporting `entry_point`, or the
    /// entry function itself.
    pub fn resolve(module: &JsValue, entry_point: &str) -> Result<Self> {
        let export = if module.is_object() || module.is_function() {
            Reflect::get(module, &JsValue::from_str(entry_point))
                .map_err(|e| BridgeError::Host(describe_js(&e)))?
        } else {
            JsValue::UNDEFINED
        };

        match entry_source(export.is_function(), module.is_function()) {
            EntrySource::Export => Ok(Self {
                this: module.clone(),
                entry: export.unchecked_into(),
            }),
            EntrySource::Module => Ok(Self {
                this: JsValue::NULL,
                entry: module.clone().unchecked_into(),
            }),
            EntrySource::Missing => Err(BridgeError::EntryPointMissing(entry_point.to_string())),
        }
    }

    /// Call the entry point once with the canvas. Whatever it returns,
    /// including a pending Promise, is handed back untouched.
    pub fn enter(self, canvas: HtmlCanvasElement) -> Result<JsValue> {
        self.entry
            .call1(&self.this, &canvas.into())
            .map_err(|e| BridgeError::Engine(describe_js(&e)))
    }
}
