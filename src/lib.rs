#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod frame;
mod overrides;
mod portfolio;

pub use portfolio::Portfolio;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    Ok(())
}

/// Owns a mounted ambient background. Dropping it (or calling
/// [`BackgroundHandle::unmount`]) stops the animation and detaches the
/// window listeners.
#[wasm_bindgen]
pub struct BackgroundHandle {
    inner: frame::MountedBackground,
}

#[wasm_bindgen]
impl BackgroundHandle {
    pub fn unmount(mut self) {
        self.inner.teardown();
    }
}

/// Start the ambient background on the canvas with id `canvas_id`, or on
/// `#ambient-background` when none is given. A missing canvas or 2-D
/// context leaves the page untouched and returns `undefined`.
#[wasm_bindgen]
pub fn mount_background(canvas_id: Option<String>) -> Option<BackgroundHandle> {
    match init_background(canvas_id.as_deref().unwrap_or(constants::BACKGROUND_CANVAS_ID)) {
        Ok(inner) => Some(BackgroundHandle { inner }),
        Err(e) => {
            log::error!("background init error: {:?}", e);
            None
        }
    }
}

fn init_background(canvas_id: &str) -> anyhow::Result<frame::MountedBackground> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    frame::MountedBackground::mount(&window, canvas)
}
