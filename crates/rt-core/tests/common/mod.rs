//! Recording fakes for the host document, canvas, and 2D context.

#![allow(dead_code)]

use rt_core::{BridgeError, RenderContext, Result, Surface, SurfaceId, SurfaceProvider};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;

/// Everything the bridge did, in order, across all fakes of one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Display(String),
    Attr(String, String),
    Context,
    FillStyle(String),
    FillRect(f64, f64, f64, f64),
    Handoff(String),
}

type OpLog = Rc<RefCell<Vec<Op>>>;

struct CanvasState {
    id: String,
    display: RefCell<String>,
    attrs: RefCell<HashMap<String, String>>,
    has_2d: bool,
    ops: OpLog,
}

/// Cheap handle; clones share one underlying element.
#[derive(Clone)]
pub struct FakeCanvas(Rc<CanvasState>);

impl FakeCanvas {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn display(&self) -> String {
        self.0.display.borrow().clone()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.attrs.borrow().get(name).cloned()
    }

    pub fn same_element(&self, other: &FakeCanvas) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Surface for FakeCanvas {
    type Context = FakeContext;

    fn set_display(&self, display: &str) -> Result<()> {
        self.0.ops.borrow_mut().push(Op::Display(display.into()));
        *self.0.display.borrow_mut() = display.to_string();
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.0
            .ops
            .borrow_mut()
            .push(Op::Attr(name.into(), value.into()));
        self.0
            .attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn backing_size(&self) -> (u32, u32) {
        // HTML canvas defaults when the attributes are absent or invalid.
        let read = |name: &str, fallback: u32| -> u32 {
            self.attr(name)
                .and_then(|v| v.parse().ok())
                .unwrap_or(fallback)
        };
        (read("width", 300), read("height", 150))
    }

    fn context_2d(&self) -> Result<Option<FakeContext>> {
        self.0.ops.borrow_mut().push(Op::Context);
        Ok(self.0.has_2d.then(|| FakeContext {
            ops: self.0.ops.clone(),
        }))
    }
}

pub struct FakeContext {
    ops: OpLog,
}

impl RenderContext for FakeContext {
    fn set_fill_style(&self, css: &str) {
        self.ops.borrow_mut().push(Op::FillStyle(css.into()));
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.borrow_mut().push(Op::FillRect(x, y, width, height));
    }
}

#[derive(Default)]
pub struct FakeDocument {
    canvases: HashMap<String, FakeCanvas>,
    /// Ids carried by elements that are not canvases.
    others: Vec<String>,
    ops: OpLog,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hidden canvas, as the stock page's stylesheet leaves it.
    pub fn with_canvas(mut self, id: &str) -> Self {
        self.insert_canvas(id, true);
        self
    }

    /// Add a canvas whose 2D context is unavailable.
    pub fn with_contextless_canvas(mut self, id: &str) -> Self {
        self.insert_canvas(id, false);
        self
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.others.push(id.to_string());
        self
    }

    fn insert_canvas(&mut self, id: &str, has_2d: bool) {
        let canvas = FakeCanvas(Rc::new(CanvasState {
            id: id.to_string(),
            display: RefCell::new("none".to_string()),
            attrs: RefCell::new(HashMap::new()),
            has_2d,
            ops: self.ops.clone(),
        }));
        self.canvases.insert(id.to_string(), canvas);
    }

    pub fn canvas(&self, id: &str) -> FakeCanvas {
        self.canvases[id].clone()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    pub fn record_handoff(&self, canvas: &FakeCanvas) {
        self.ops
            .borrow_mut()
            .push(Op::Handoff(canvas.id().to_string()));
    }
}

impl SurfaceProvider for &FakeDocument {
    type Surface = FakeCanvas;

    fn surface_by_id(&self, id: &SurfaceId) -> Result<Option<FakeCanvas>> {
        if self.others.iter().any(|other| other == id.as_str()) {
            return Err(BridgeError::NotASurface(id.clone()));
        }
        Ok(self.canvases.get(id.as_str()).cloned())
    }
}

// ─── Log capture ─────────────────────────────────────────────────────────

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Collects records on the calling thread, so parallel tests stay apart.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return what it logged at `level`.
pub fn logged_at<R>(level: log::Level, f: impl FnOnce() -> R) -> (R, Vec<String>) {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("capture logger installed twice");
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let lines = RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    });
    (out, lines)
}
