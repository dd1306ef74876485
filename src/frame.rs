use crate::canvas::CanvasSurface;
use crate::constants::{MAX_DPR_ATTR, PARTICLE_COUNT_ATTR, RESIZE_EVENT, SCROLL_EVENT};
use crate::dom::{self, ListenerGuard};
use crate::overrides;
use portfolio_core::{AmbientBackground, BackgroundConfig, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type Background = AmbientBackground<CanvasSurface, RafScheduler>;

/// [`FrameScheduler`] over `requestAnimationFrame`. Every request reuses the
/// one tick closure held in the shared cell; once the cell is emptied no
/// further frames can be requested.
pub struct RafScheduler {
    window: web::Window,
    tick: TickCell,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// A running background plus the browser resources keeping it alive.
pub struct MountedBackground {
    background: Rc<RefCell<Background>>,
    tick: TickCell,
    listeners: Vec<ListenerGuard>,
    /// Set when teardown finds a frame in progress; that frame finishes it.
    closing: Rc<Cell<bool>>,
}

impl MountedBackground {
    pub fn mount(window: &web::Window, canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        dom::make_decorative(&canvas);
        let cfg = overrides::apply_canvas_overrides(
            BackgroundConfig::default(),
            canvas.get_attribute(PARTICLE_COUNT_ATTR).as_deref(),
            canvas.get_attribute(MAX_DPR_ATTR).as_deref(),
        );

        let tick: TickCell = Rc::new(RefCell::new(None));
        let viewport = dom::canvas_viewport(window, &canvas);
        let background = Rc::new(RefCell::new(AmbientBackground::mount(
            cfg,
            viewport,
            dom::prefers_reduced_motion(window),
            CanvasSurface::new(canvas.clone(), ctx),
            RafScheduler {
                window: window.clone(),
                tick: tick.clone(),
            },
        )));
        background.borrow_mut().on_scroll(dom::scroll_y(window));

        let weak = Rc::downgrade(&background);
        let closing = Rc::new(Cell::new(false));
        let frame_closing = closing.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(bg) = weak.upgrade() {
                let mut bg = bg.borrow_mut();
                bg.on_frame(timestamp_ms);
                if frame_closing.get() {
                    bg.teardown();
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let listeners = wire_listeners(window, &canvas, Rc::downgrade(&background));
        background.borrow_mut().start();
        log::info!(
            "[background] mounted {}x{} particles={}",
            viewport.width,
            viewport.height,
            background.borrow().particles().len()
        );

        Ok(Self {
            background,
            tick,
            listeners,
            closing,
        })
    }

    /// Remove listeners, cancel the pending frame and release the tick
    /// closure. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        match self.background.try_borrow_mut() {
            Ok(mut bg) => bg.teardown(),
            Err(_) => {
                // the running frame still owns the tick and cancels its own reschedule
                log::warn!("[background] teardown during a frame; deferring to the frame");
                self.closing.set(true);
                return;
            }
        }
        if let Ok(mut tick) = self.tick.try_borrow_mut() {
            tick.take();
        }
    }
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn wire_listeners(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    background: Weak<RefCell<Background>>,
) -> Vec<ListenerGuard> {
    let target: &web::EventTarget = window;

    let window_scroll = window.clone();
    let bg_scroll = background.clone();
    let scroll = ListenerGuard::add(target, SCROLL_EVENT, true, move || {
        if let Some(bg) = bg_scroll.upgrade() {
            if let Ok(mut bg) = bg.try_borrow_mut() {
                bg.on_scroll(dom::scroll_y(&window_scroll));
            }
        }
    });

    let window_resize = window.clone();
    let canvas_resize = canvas.clone();
    let resize = ListenerGuard::add(target, RESIZE_EVENT, false, move || {
        if let Some(bg) = background.upgrade() {
            if let Ok(mut bg) = bg.try_borrow_mut() {
                bg.on_resize(
                    dom::canvas_viewport(&window_resize, &canvas_resize),
                    dom::prefers_reduced_motion(&window_resize),
                );
            }
        }
    });

    scroll.into_iter().chain(resize).collect()
}
