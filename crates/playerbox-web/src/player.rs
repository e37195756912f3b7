//! Bindings to the external IFrame player and its construction options.
//!
//! The SDK script itself is the host's responsibility; by the time
//! [`attach`] runs, the `YT` namespace is guaranteed to exist.

use anyhow::{anyhow, Result};
use js_sys::Object;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Remote-control handle to the embedded player (`YT.Player`).
    #[wasm_bindgen(js_namespace = YT)]
    pub type Player;

    #[wasm_bindgen(constructor, js_namespace = YT)]
    fn new(mount: &web::Element, options: &JsValue) -> Player;

    #[wasm_bindgen(method, js_name = playVideo)]
    pub fn play_video(this: &Player);

    #[wasm_bindgen(method, js_name = stopVideo)]
    pub fn stop_video(this: &Player);

    #[wasm_bindgen(method, js_name = seekTo)]
    pub fn seek_to(this: &Player, seconds: f64, allow_seek_ahead: bool);
}

/// Constructs the player inside `mount` with autoplay disabled.
///
/// `on_ready` fires once when the player finishes constructing;
/// `on_state_change` fires with the numeric state code on every playback
/// state transition. Both callbacks are retained for the life of the page.
pub fn attach(
    mount: &web::Element,
    video_id: &str,
    mut on_ready: impl FnMut() + 'static,
    mut on_state_change: impl FnMut(i32) + 'static,
) -> Result<Player> {
    let options = Object::new();
    set(&options, "videoId", &JsValue::from_str(video_id))?;

    let player_vars = Object::new();
    set(&player_vars, "autoplay", &JsValue::from_f64(0.0))?;
    set(&options, "playerVars", &player_vars)?;

    let ready = Closure::wrap(Box::new(move |_event: JsValue| on_ready()) as Box<dyn FnMut(JsValue)>);
    let state_change = Closure::wrap(Box::new(move |event: JsValue| {
        let code = js_sys::Reflect::get(&event, &JsValue::from_str("data"))
            .ok()
            .and_then(|v| v.as_f64());
        if let Some(code) = code {
            on_state_change(code as i32);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let events = Object::new();
    set(&events, "onReady", ready.as_ref())?;
    set(&events, "onStateChange", state_change.as_ref())?;
    set(&options, "events", &events)?;
    ready.forget();
    state_change.forget();

    Ok(Player::new(mount, &options))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow!("setting player option {key}: {e:?}"))?;
    Ok(())
}
