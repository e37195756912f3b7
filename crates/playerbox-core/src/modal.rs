//! The visibility/lifecycle state machine.
//!
//! `Modal` holds the only two pieces of shared state, the open flag and the
//! player-ready flag, and turns incoming events into a short list of effects
//! for the platform layer to apply.
//!
//! The invariants it enforces:
//! - `Play` is only emitted when the modal is open AND the player is ready;
//!   an open that arrives early is satisfied later by `player_became_ready`.
//! - `StopAndRewind` is only emitted on close when the player is ready; a
//!   player that was never constructed is never called into.

use smallvec::SmallVec;

/// Instructions for the platform layer, in application order.
pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fade the backdrop overlay in.
    FadeInOverlay,
    /// Fade the backdrop overlay out.
    FadeOutOverlay,
    /// Unhide the player box and the loading indicator.
    RevealPanels,
    /// Re-hide the player box and the loading indicator.
    ConcealPanels,
    /// Remove the loading indicator from the document for good.
    RemoveLoading,
    /// Start playback.
    Play,
    /// Stop playback and seek back to the start with exact seek enabled.
    StopAndRewind,
}

/// Playback states reported by the embedded player.
///
/// The discriminants follow the IFrame player API, where `Ended` is 0 and
/// `Unstarted` is -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackState {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }
}

/// The modal lifecycle state. One instance per page.
#[derive(Debug, Default)]
pub struct Modal {
    is_open: bool,
    player_ready: bool,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[inline]
    pub fn player_ready(&self) -> bool {
        self.player_ready
    }

    /// Trigger clicked. Re-running while already open repeats the open
    /// effects; that is harmless and intentionally not guarded.
    pub fn open(&mut self) -> Effects {
        self.is_open = true;
        log::debug!("modal open (player_ready={})", self.player_ready);
        let mut effects: Effects = SmallVec::new();
        effects.push(Effect::FadeInOverlay);
        effects.push(Effect::RevealPanels);
        if self.player_ready {
            effects.push(Effect::Play);
        }
        effects
    }

    /// Close requested, either by the close control or by the player
    /// reporting that the video ended.
    pub fn close(&mut self) -> Effects {
        self.is_open = false;
        log::debug!("modal close (player_ready={})", self.player_ready);
        let mut effects: Effects = SmallVec::new();
        effects.push(Effect::FadeOutOverlay);
        effects.push(Effect::ConcealPanels);
        if self.player_ready {
            effects.push(Effect::StopAndRewind);
        }
        effects
    }

    /// Escape key released. Only acts while the modal is open.
    pub fn escape_pressed(&mut self) -> Effects {
        if self.is_open {
            self.close()
        } else {
            SmallVec::new()
        }
    }

    /// The player finished constructing. Readiness is permanent; a second
    /// call is ignored. If the user opened the modal while the player was
    /// still loading, playback starts now.
    pub fn player_became_ready(&mut self) -> Effects {
        if self.player_ready {
            return SmallVec::new();
        }
        self.player_ready = true;
        log::debug!("player ready (is_open={})", self.is_open);
        let mut effects: Effects = SmallVec::new();
        effects.push(Effect::RemoveLoading);
        if self.is_open {
            effects.push(Effect::Play);
        }
        effects
    }

    /// The player reported a playback state transition. Reaching the end of
    /// the video dismisses the modal; the stop half of `StopAndRewind` is a
    /// no-op then, but the rewind prepares the video for replay.
    pub fn playback_state_changed(&mut self, state: PlaybackState) -> Effects {
        match state {
            PlaybackState::Ended => self.close(),
            _ => SmallVec::new(),
        }
    }
}
