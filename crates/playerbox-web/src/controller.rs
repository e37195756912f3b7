//! Owns the modal state, the element set and the player handle, and applies
//! the effects the core state machine emits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{anyhow, Result};
use playerbox_core::{Effect, Modal, PlaybackState, ESCAPE_KEY_CODE, HIDE_CLASS};
use web_sys as web;

use crate::animate::{self, FadeGeneration};
use crate::dom::{self, ElementSet};
use crate::player::{self, Player};

pub struct Controller {
    modal: Modal,
    elements: ElementSet,
    player: Option<Player>,
    video_id: String,
    overlay_fade: FadeGeneration,
}

impl Controller {
    /// Builds the element set and appends the overlay and loading indicator
    /// to the body. The player box stays detached until [`Controller::ready`].
    pub fn init(
        trigger_selector: &str,
        video_id: &str,
        loading_img_src: Option<&str>,
    ) -> Result<Self> {
        let document = dom::window_document()?;
        let elements = dom::build_elements(&document, trigger_selector, loading_img_src)?;

        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        body.append_child(&elements.overlay)
            .map_err(|e| anyhow!("appending overlay: {e:?}"))?;
        body.append_child(&elements.loading)
            .map_err(|e| anyhow!("appending loading indicator: {e:?}"))?;

        log::info!("playerbox initialized for trigger {trigger_selector}");
        Ok(Self {
            modal: Modal::new(),
            elements,
            player: None,
            video_id: video_id.to_string(),
            overlay_fade: Rc::new(Cell::new(0)),
        })
    }

    /// Appends the player box, constructs the player in its mount slot and
    /// binds the user events. Until this runs, clicks have no effect.
    pub fn ready(controller: &Rc<RefCell<Controller>>) -> Result<()> {
        if controller.borrow().player.is_some() {
            log::warn!("ready called more than once; ignoring");
            return Ok(());
        }

        let document = dom::window_document()?;
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;

        let (mount, video_id) = {
            let c = controller.borrow();
            body.append_child(&c.elements.playerbox)
                .map_err(|e| anyhow!("appending playerbox: {e:?}"))?;
            (c.elements.video_slot.clone(), c.video_id.clone())
        };

        let ready_ctrl = controller.clone();
        let state_ctrl = controller.clone();
        let player = player::attach(
            &mount,
            &video_id,
            move || {
                let effects = ready_ctrl.borrow_mut().modal.player_became_ready();
                Controller::apply(&ready_ctrl, &effects);
            },
            move |code| {
                if let Some(state) = PlaybackState::from_code(code) {
                    let effects = state_ctrl.borrow_mut().modal.playback_state_changed(state);
                    Controller::apply(&state_ctrl, &effects);
                }
            },
        )?;
        // The SDK fires onReady asynchronously after construction, so the
        // handle is stored before any Play effect can need it.
        controller.borrow_mut().player = Some(player);

        Controller::bind_events(controller, &document);
        log::info!("playerbox ready, events bound");
        Ok(())
    }

    fn bind_events(controller: &Rc<RefCell<Controller>>, document: &web::Document) {
        let c = controller.borrow();

        let ctrl = controller.clone();
        dom::add_click_listener(&c.elements.trigger, move || {
            let effects = ctrl.borrow_mut().modal.open();
            Controller::apply(&ctrl, &effects);
        });

        let ctrl = controller.clone();
        dom::add_click_listener(&c.elements.close, move || {
            let effects = ctrl.borrow_mut().modal.close();
            Controller::apply(&ctrl, &effects);
        });

        let ctrl = controller.clone();
        dom::add_keyup_listener(document, move |ev| {
            if ev.key_code() == ESCAPE_KEY_CODE {
                let effects = ctrl.borrow_mut().modal.escape_pressed();
                Controller::apply(&ctrl, &effects);
            }
        });
    }

    fn apply(controller: &Rc<RefCell<Controller>>, effects: &[Effect]) {
        let c = controller.borrow();
        for effect in effects {
            match effect {
                Effect::FadeInOverlay => {
                    animate::fade_in(&c.elements.overlay, None, &c.overlay_fade);
                }
                Effect::FadeOutOverlay => {
                    animate::fade_out(&c.elements.overlay, &c.overlay_fade);
                }
                Effect::RevealPanels => {
                    let _ = c.elements.playerbox.class_list().remove_1(HIDE_CLASS);
                    let _ = c.elements.loading.class_list().remove_1(HIDE_CLASS);
                }
                Effect::ConcealPanels => {
                    let _ = c.elements.playerbox.class_list().add_1(HIDE_CLASS);
                    let _ = c.elements.loading.class_list().add_1(HIDE_CLASS);
                }
                Effect::RemoveLoading => {
                    c.elements.loading.remove();
                }
                Effect::Play => {
                    if let Some(p) = &c.player {
                        p.play_video();
                    }
                }
                Effect::StopAndRewind => {
                    if let Some(p) = &c.player {
                        p.stop_video();
                        p.seek_to(0.0, true);
                    }
                }
            }
        }
    }
}
