//! WebAssembly FFI bindings for the Crux Core
//!
//! The page script forwards DOM events (load, form submit, clear click) through
//! `process_event`, executes the returned effects (fetch, setTimeout, modal,
//! repaint) and feeds their results back through `handle_response`.
//!
//! Nothing that crosses this boundary may take the page down: a message the
//! bridge cannot handle is logged to the console and answered with no effects.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref PORTAL: Bridge<App> = Bridge::new(Core::new());
}

/// Install the browser console logger.
///
/// Runs automatically when the WASM module is loaded. Status poll failures
/// only ever show up here.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // Fails only if a logger is already installed, e.g. after a hot reload
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Logger setup skipped: {e}");
    }
}

/// Dispatch a serialized `Event` (page load, form submit, clear click).
///
/// Returns the serialized effect requests for the shell to run.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut requests = Vec::new();
    if let Err(e) = PORTAL.update(event_bytes, &mut requests) {
        log::error!("Dropping undecodable event ({} bytes): {e:?}", event_bytes.len());
        requests.clear();
    }
    requests
}

/// Serialized view: status fields, notifications, loading flag.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = PORTAL.view(&mut view) {
        log::error!("View could not be serialized: {e:?}");
        view.clear();
    }
    view
}

/// Feed back the outcome of effect `id`: fetch result, elapsed timer or
/// dialog answer. Returns any follow-up effect requests.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut requests = Vec::new();
    if let Err(e) = PORTAL.resolve(EffectId(id), response_bytes, &mut requests) {
        log::error!("Effect {id} could not be resolved: {e:?}");
        requests.clear();
    }
    requests
}
