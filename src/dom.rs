use crate::constants::{CONTEXT_2D, REDUCED_MOTION_QUERY};
use portfolio_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", id))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context(CONTEXT_2D)
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected context type"))
}

/// Keep the background out of hit-testing and the accessibility tree.
pub fn make_decorative(canvas: &web::HtmlCanvasElement) {
    _ = canvas.style().set_property("pointer-events", "none");
    _ = canvas.set_attribute("aria-hidden", "true");
}

/// The canvas's CSS box plus the window's device pixel ratio.
pub fn canvas_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        window.device_pixel_ratio(),
    )
}

/// Unsupported media queries read as "no preference".
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// An event listener that is removed again when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl ListenerGuard {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, &options,
            )
            .map_err(|e| log::warn!("[dom] addEventListener({}) failed: {:?}", event, e))
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
