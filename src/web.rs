//! Browser binding: `<img>` surfaces and DOM event wiring.
//!
//! [`WebViewer::mount`] fills a container element with one absolutely
//! positioned image per frame and forwards mouse and touch events to a
//! [`SpinViewer`]. Press events are taken from the container; move, release
//! and cancel events are taken from the whole document so a drag keeps
//! working after the pointer leaves the image.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlImageElement,
    MouseEvent, TouchEvent,
};

use crate::error::SpinError;
use crate::input::{PointerEvent, PointerSource};
use crate::options::{FrameSourceOptions, Options};
use crate::ring::FetchPriority;
use crate::surface::{FrameSurface, SurfaceTable};
use crate::viewer::{SpinCommand, SpinViewer};

/// One frame rendered as an `<img>` element.
///
/// Hidden frames are stacked underneath (`z-index: -1`) and transparent,
/// so every image stays in the document and keeps loading.
#[derive(Debug)]
pub struct DomFrameSurface {
    image: HtmlImageElement,
}

impl DomFrameSurface {
    /// Create the image for 1-based frame `index`, hidden.
    pub fn create(
        document: &Document,
        index: usize,
        source: &FrameSourceOptions,
    ) -> Result<Self, JsValue> {
        let image: HtmlImageElement =
            document.create_element("img")?.dyn_into()?;
        image.set_alt(&format!("Frame {index}"));
        image.set_src(&source.path_for(index));
        image.set_draggable(false);

        let style = image.style();
        style.set_property("position", "absolute")?;
        style.set_property("display", "block")?;

        let mut surface = Self { image };
        surface.hide();
        surface.set_fetch_priority(FetchPriority::Low);
        Ok(surface)
    }

    /// The underlying element.
    #[must_use]
    pub fn element(&self) -> &HtmlImageElement {
        &self.image
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.image.style().set_property(property, value) {
            log::warn!("failed to set {property}={value}: {e:?}");
        }
    }

    fn clear_style(&self, property: &str) {
        if let Err(e) = self.image.style().remove_property(property) {
            log::warn!("failed to clear {property}: {e:?}");
        }
    }
}

impl FrameSurface for DomFrameSurface {
    fn show(&mut self) {
        self.clear_style("z-index");
        self.clear_style("opacity");
    }

    fn hide(&mut self) {
        self.set_style("z-index", "-1");
        self.set_style("opacity", "0");
    }

    fn set_fetch_priority(&mut self, priority: FetchPriority) {
        if let Err(e) =
            self.image.set_attribute("fetchpriority", priority.as_str())
        {
            log::warn!("failed to set fetchpriority: {e:?}");
        }
    }
}

type SharedViewer = Rc<RefCell<SpinViewer<DomFrameSurface>>>;

/// A registered DOM listener, detached again on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Spin viewer mounted in a DOM container.
#[wasm_bindgen]
pub struct WebViewer {
    viewer: SharedViewer,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl WebViewer {
    /// Fill the element with id `container_id` with frame images and start
    /// listening for drags.
    ///
    /// `options_toml` overrides the default options; partial documents are
    /// fine.
    pub fn mount(
        container_id: &str,
        options_toml: Option<String>,
    ) -> Result<WebViewer, JsValue> {
        init_logging();

        let options = match options_toml {
            Some(text) => {
                Options::from_toml_str(&text).map_err(|e| js_error(&e))?
            }
            None => Options::default(),
        };

        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container =
            document.get_element_by_id(container_id).ok_or_else(|| {
                JsValue::from_str(&format!("no element with id '{container_id}'"))
            })?;

        let source = options.frames.source.clone();
        let surfaces = SurfaceTable::try_from_factory(
            options.frames.total_frames,
            |index| {
                let surface = DomFrameSurface::create(&document, index, &source)?;
                let _ = container.append_child(surface.element())?;
                Ok::<_, JsValue>(surface)
            },
        )?;
        let viewer: SharedViewer = Rc::new(RefCell::new(
            SpinViewer::with_surfaces(options, surfaces)
                .map_err(|e| js_error(&e))?,
        ));

        let container: &EventTarget = container.as_ref();
        let document: &EventTarget = document.as_ref();
        let listeners = vec![
            listen(container, "mousedown", &viewer)?,
            listen(document, "mousemove", &viewer)?,
            listen(document, "mouseup", &viewer)?,
            listen(document, "mouseleave", &viewer)?,
            listen(container, "touchstart", &viewer)?,
            listen(document, "touchmove", &viewer)?,
            listen(document, "touchend", &viewer)?,
            listen(document, "touchcancel", &viewer)?,
        ];

        Ok(Self {
            viewer,
            _listeners: listeners,
        })
    }

    /// 1-based index of the frame on screen.
    #[wasm_bindgen(js_name = currentIndex)]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.viewer.borrow().current_index()
    }

    /// Number of frames in the sequence.
    #[wasm_bindgen(js_name = totalFrames)]
    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.viewer.borrow().total_frames()
    }

    /// Show frame `index` directly.
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&self, index: usize) -> Result<(), JsValue> {
        let _ = self
            .viewer
            .borrow_mut()
            .execute(SpinCommand::JumpTo { index })
            .map_err(|e| js_error(&e))?;
        Ok(())
    }
}

fn listen(
    target: &EventTarget,
    kind: &'static str,
    viewer: &SharedViewer,
) -> Result<Listener, JsValue> {
    let viewer = Rc::clone(viewer);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(pointer) = translate(kind, &event) else {
            return;
        };
        if matches!(kind, "touchstart" | "touchmove") {
            event.prevent_default();
        }
        let Ok(mut viewer) = viewer.try_borrow_mut() else {
            return;
        };
        if let Err(e) = viewer.handle_event(pointer) {
            log::error!("{kind}: {e}");
        }
    });

    let options = AddEventListenerOptions::new();
    // Touch handlers call preventDefault, which passive listeners ignore
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;

    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Map a DOM event to a pointer event; touch events read the first contact.
fn translate(kind: &str, event: &Event) -> Option<PointerEvent> {
    let mouse_x = || {
        event
            .dyn_ref::<MouseEvent>()
            .map(|e| e.client_x() as f32)
    };
    let touch_x = || {
        event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.touches().get(0))
            .map(|touch| touch.client_x() as f32)
    };

    let mouse = PointerSource::Mouse;
    let touch = PointerSource::Touch;
    match kind {
        "mousedown" => mouse_x().map(|x| PointerEvent::Down { source: mouse, x }),
        "mousemove" => mouse_x().map(|x| PointerEvent::Move { source: mouse, x }),
        "mouseup" => Some(PointerEvent::Up { source: mouse }),
        "mouseleave" => Some(PointerEvent::Leave { source: mouse }),
        "touchstart" => touch_x().map(|x| PointerEvent::Down { source: touch, x }),
        "touchmove" => touch_x().map(|x| PointerEvent::Move { source: touch, x }),
        "touchend" => Some(PointerEvent::Up { source: touch }),
        "touchcancel" => Some(PointerEvent::Cancel { source: touch }),
        _ => None,
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn js_error(e: &SpinError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
