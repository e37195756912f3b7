#![cfg(target_arch = "wasm32")]
//! DOM glue for the playerbox modal lightbox.
//!
//! The host loads this module, calls [`Playerbox::init`] once, and forwards
//! the external player SDK's global readiness callback to
//! [`Playerbox::ready`] exactly once. Everything in between is event-driven:
//! the trigger click, the close control, the Escape key and the player's own
//! state changes all funnel through the core state machine.

pub mod animate;
pub mod controller;
pub mod dom;
pub mod player;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use controller::Controller;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Host-facing handle to the single modal instance on the page.
#[wasm_bindgen]
pub struct Playerbox {
    controller: Rc<RefCell<Controller>>,
}

#[wasm_bindgen]
impl Playerbox {
    /// Builds the overlay and loading-indicator nodes and appends them to the
    /// document body. The player box is built too but stays detached until
    /// [`Playerbox::ready`]. No events are bound yet.
    ///
    /// Must be called once, before the player SDK signals readiness. A
    /// trigger selector that matches nothing is a configuration error.
    pub fn init(
        trigger_selector: &str,
        video_id: &str,
        loading_img_src: Option<String>,
    ) -> Result<Playerbox, JsValue> {
        let controller =
            Controller::init(trigger_selector, video_id, loading_img_src.as_deref())
                .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        Ok(Playerbox {
            controller: Rc::new(RefCell::new(controller)),
        })
    }

    /// Appends the player box, constructs the embedded player inside it and
    /// binds all user events. The host must call this exactly once, from the
    /// player SDK's global readiness callback.
    pub fn ready(&self) -> Result<(), JsValue> {
        Controller::ready(&self.controller).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }
}
