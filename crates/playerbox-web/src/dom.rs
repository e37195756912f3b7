//! Element construction and event-listener helpers.

use anyhow::{anyhow, Result};
use playerbox_core::template;
use playerbox_core::{PlayerboxError, DEFAULT_LOADING_IMG};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The five nodes the modal owns for the life of the page, plus the empty
/// mount slot the player is constructed into. Built once, never rebuilt.
pub struct ElementSet {
    pub trigger: web::Element,
    pub overlay: web::HtmlElement,
    pub playerbox: web::HtmlElement,
    pub close: web::Element,
    pub loading: web::HtmlElement,
    pub video_slot: web::Element,
}

#[inline]
pub fn window_document() -> Result<web::Document> {
    web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))
}

/// Instantiates the three markup fragments and resolves the trigger.
///
/// The player mount slot and the close control are located by position
/// inside the content wrapper (first and second child), not by class: the
/// mount slot has no class of its own. All three fragments start hidden.
pub fn build_elements(
    document: &web::Document,
    trigger_selector: &str,
    loading_img_src: Option<&str>,
) -> Result<ElementSet> {
    let trigger = document
        .query_selector(trigger_selector)
        .ok()
        .flatten()
        .ok_or_else(|| PlayerboxError::TriggerNotFound(trigger_selector.to_string()))?;

    let scratch = document
        .create_element("div")
        .map_err(|e| anyhow!("create_element: {e:?}"))?;
    scratch.set_inner_html(&format!(
        "{}{}{}",
        template::render_overlay(),
        template::render_playerbox(),
        template::render_loading(loading_img_src.unwrap_or(DEFAULT_LOADING_IMG)),
    ));

    let children = scratch.children();
    let overlay = html_child(&children, 0, "overlay")?;
    let playerbox = html_child(&children, 1, "playerbox")?;
    let loading = html_child(&children, 2, "loading")?;

    // Structural contract of the playerbox fragment: content wrapper first,
    // then inside it the mount slot followed by the close control.
    let content = playerbox
        .first_element_child()
        .ok_or_else(|| anyhow!("playerbox has no content wrapper"))?;
    let video_slot = content
        .first_element_child()
        .ok_or_else(|| anyhow!("content wrapper has no mount slot"))?;
    let close = video_slot
        .next_element_sibling()
        .ok_or_else(|| anyhow!("content wrapper has no close control"))?;

    Ok(ElementSet {
        trigger,
        overlay,
        playerbox,
        close,
        loading,
        video_slot,
    })
}

fn html_child(children: &web::HtmlCollection, index: u32, name: &str) -> Result<web::HtmlElement> {
    children
        .item(index)
        .ok_or_else(|| anyhow!("missing {name} fragment"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{name} fragment is not an html element"))
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_keyup_listener(
    document: &web::Document,
    mut handler: impl FnMut(web::KeyboardEvent) + 'static,
) {
    let closure = Closure::wrap(
        Box::new(move |ev: web::KeyboardEvent| handler(ev)) as Box<dyn FnMut(web::KeyboardEvent)>
    );
    let _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
    closure.forget();
}
