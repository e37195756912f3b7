// Lifecycle tests for the modal state machine: every play/stop decision is
// observable as an effect, so the open/ready race and the close teardown can
// be exercised without a DOM or a player.

use playerbox_core::{Effect, Modal, PlaybackState};

#[test]
fn open_before_ready_defers_playback() {
    let mut modal = Modal::new();

    let effects = modal.open();
    assert_eq!(
        effects.as_slice(),
        &[Effect::FadeInOverlay, Effect::RevealPanels]
    );
    assert!(modal.is_open());
    assert!(!modal.player_ready());

    // Readiness arrives while the modal is still open: playback starts now.
    let effects = modal.player_became_ready();
    assert_eq!(effects.as_slice(), &[Effect::RemoveLoading, Effect::Play]);
}

#[test]
fn open_after_ready_plays_immediately() {
    let mut modal = Modal::new();
    modal.player_became_ready();

    let effects = modal.open();
    assert_eq!(
        effects.as_slice(),
        &[Effect::FadeInOverlay, Effect::RevealPanels, Effect::Play]
    );
}

#[test]
fn readiness_while_closed_only_removes_loading() {
    let mut modal = Modal::new();

    let effects = modal.player_became_ready();
    assert_eq!(effects.as_slice(), &[Effect::RemoveLoading]);
    assert!(!modal.is_open());
}

#[test]
fn readiness_is_one_shot() {
    let mut modal = Modal::new();
    modal.player_became_ready();

    assert!(modal.player_became_ready().is_empty());
    assert!(modal.player_ready());
}

#[test]
fn close_when_ready_stops_and_rewinds() {
    let mut modal = Modal::new();
    modal.player_became_ready();
    modal.open();

    let effects = modal.close();
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::FadeOutOverlay,
            Effect::ConcealPanels,
            Effect::StopAndRewind
        ]
    );
    assert!(!modal.is_open());
}

#[test]
fn close_before_ready_never_touches_player() {
    let mut modal = Modal::new();
    modal.open();

    // There is no player yet, so closing must not emit a player call.
    let effects = modal.close();
    assert_eq!(
        effects.as_slice(),
        &[Effect::FadeOutOverlay, Effect::ConcealPanels]
    );
}

#[test]
fn stop_is_issued_iff_ready_at_close_time() {
    // Property over an open/close sequence spanning the readiness flip.
    let mut modal = Modal::new();

    modal.open();
    assert!(!modal.close().contains(&Effect::StopAndRewind));

    modal.player_became_ready();

    modal.open();
    assert!(modal.close().contains(&Effect::StopAndRewind));
}

#[test]
fn escape_while_closed_is_ignored() {
    let mut modal = Modal::new();
    modal.player_became_ready();

    let effects = modal.escape_pressed();
    assert!(effects.is_empty());
    assert!(!modal.is_open());
}

#[test]
fn escape_while_open_closes() {
    let mut modal = Modal::new();
    modal.player_became_ready();
    modal.open();

    let effects = modal.escape_pressed();
    assert!(effects.contains(&Effect::FadeOutOverlay));
    assert!(effects.contains(&Effect::StopAndRewind));
    assert!(!modal.is_open());
}

#[test]
fn reopening_while_open_reruns_open_effects() {
    let mut modal = Modal::new();
    modal.player_became_ready();
    modal.open();

    // Not reentrant-guarded: a second trigger click repeats the effects.
    let effects = modal.open();
    assert_eq!(
        effects.as_slice(),
        &[Effect::FadeInOverlay, Effect::RevealPanels, Effect::Play]
    );
}

#[test]
fn ended_state_dismisses_the_modal() {
    let mut modal = Modal::new();
    modal.player_became_ready();
    modal.open();

    let effects = modal.playback_state_changed(PlaybackState::Ended);
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::FadeOutOverlay,
            Effect::ConcealPanels,
            Effect::StopAndRewind
        ]
    );
    assert!(!modal.is_open());
}

#[test]
fn non_terminal_states_are_ignored() {
    let mut modal = Modal::new();
    modal.player_became_ready();
    modal.open();

    for state in [
        PlaybackState::Unstarted,
        PlaybackState::Playing,
        PlaybackState::Paused,
        PlaybackState::Buffering,
        PlaybackState::Cued,
    ] {
        assert!(modal.playback_state_changed(state).is_empty());
        assert!(modal.is_open());
    }
}

#[test]
fn playback_state_codes_follow_the_iframe_api() {
    assert_eq!(PlaybackState::from_code(-1), Some(PlaybackState::Unstarted));
    assert_eq!(PlaybackState::from_code(0), Some(PlaybackState::Ended));
    assert_eq!(PlaybackState::from_code(1), Some(PlaybackState::Playing));
    assert_eq!(PlaybackState::from_code(2), Some(PlaybackState::Paused));
    assert_eq!(PlaybackState::from_code(3), Some(PlaybackState::Buffering));
    assert_eq!(PlaybackState::from_code(5), Some(PlaybackState::Cued));
    assert_eq!(PlaybackState::from_code(4), None);
    assert_eq!(PlaybackState::from_code(42), None);
}

#[test]
fn end_to_end_open_then_ended() {
    // init -> readiness -> trigger click -> video plays -> video ends.
    let mut modal = Modal::new();

    let effects = modal.player_became_ready();
    assert_eq!(effects.as_slice(), &[Effect::RemoveLoading]);

    let effects = modal.open();
    assert!(effects.contains(&Effect::Play));

    let effects = modal.playback_state_changed(PlaybackState::Ended);
    assert!(effects.contains(&Effect::ConcealPanels));
    assert!(effects.contains(&Effect::StopAndRewind));
    assert!(!modal.is_open());
}

#[test]
fn deferred_play_fires_exactly_once() {
    let mut modal = Modal::new();
    modal.open();

    let play_count = modal
        .player_became_ready()
        .iter()
        .filter(|e| **e == Effect::Play)
        .count();
    assert_eq!(play_count, 1);

    // A duplicate readiness signal must not replay.
    assert!(modal.player_became_ready().is_empty());
}
