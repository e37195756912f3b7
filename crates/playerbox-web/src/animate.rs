//! Opacity fades driven by `requestAnimationFrame`.
//!
//! Each fade advances one step of a core stepper per frame, rescheduling
//! itself until the stepper runs out. Starting a new fade on an element bumps
//! its generation counter; a tick that wakes up with a stale generation stops
//! without touching the element, so two fades can never interleave writes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use playerbox_core::fade::{FadeIn, FadeOut};
use playerbox_core::{DEFAULT_FADE_DISPLAY, HIDE_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-element fade generation. One counter per animated element.
pub type FadeGeneration = Rc<Cell<u64>>;

/// Unhides `element` and fades it in over a few frames.
///
/// The terminal opacity is whatever the last step yields (0.8 with the
/// default step), matching the stepper arithmetic exactly.
pub fn fade_in(element: &web::HtmlElement, display: Option<&str>, generation: &FadeGeneration) {
    let my_gen = generation.get() + 1;
    generation.set(my_gen);

    if element.class_list().contains(HIDE_CLASS) {
        let _ = element.class_list().remove_1(HIDE_CLASS);
    }
    set_opacity(element, 0.0);
    let _ = element
        .style()
        .set_property("display", display.unwrap_or(DEFAULT_FADE_DISPLAY));

    let element = element.clone();
    let generation = generation.clone();
    let steps = Rc::new(RefCell::new(FadeIn::new()));
    schedule(move || {
        if generation.get() != my_gen {
            return false;
        }
        match steps.borrow_mut().next() {
            Some(value) => {
                set_opacity(&element, value);
                true
            }
            None => false,
        }
    });
}

/// Fades `element` out from full opacity; once the steps are exhausted the
/// element gets `display:none` and the hidden marker class back.
pub fn fade_out(element: &web::HtmlElement, generation: &FadeGeneration) {
    let my_gen = generation.get() + 1;
    generation.set(my_gen);

    set_opacity(element, 1.0);

    let element = element.clone();
    let generation = generation.clone();
    let steps = Rc::new(RefCell::new(FadeOut::new()));
    schedule(move || {
        if generation.get() != my_gen {
            return false;
        }
        match steps.borrow_mut().next() {
            Some(value) => {
                set_opacity(&element, value);
                true
            }
            None => {
                let _ = element.style().set_property("display", "none");
                let _ = element.class_list().add_1(HIDE_CLASS);
                false
            }
        }
    });
}

#[inline]
fn set_opacity(element: &web::HtmlElement, value: f64) {
    let _ = element.style().set_property("opacity", &value.to_string());
}

/// Runs `step` once per animation frame until it returns false.
fn schedule(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            // The closure holds the only other Rc to its own storage; take
            // it out so the cycle breaks and the stepper is freed once this
            // invocation returns.
            drop(tick_clone.borrow_mut().take());
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
