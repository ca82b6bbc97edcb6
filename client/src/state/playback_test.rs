use super::*;

fn playing(id: i64, position: f64, duration: f64) -> PlaybackState {
    let mut state = PlaybackState::default();
    state.select(id);
    state.play_resolved(id);
    state.metadata_loaded(id, duration);
    state.position_sampled(id, position);
    state
}

// =============================================================
// select
// =============================================================

#[test]
fn select_from_idle_starts_loading_without_stop() {
    let mut state = PlaybackState::default();
    assert_eq!(state.select(1), PlaybackCommand::Start { id: 1, stop: None });
    assert_eq!(state.active, Some(1));
    assert_eq!(state.status, PlaybackStatus::Loading);
}

#[test]
fn select_other_item_stops_previous_and_resets_position() {
    let mut state = playing(1, 42.0, 100.0);
    assert_eq!(state.select(2), PlaybackCommand::Start { id: 2, stop: Some(1) });
    assert_eq!(state.active, Some(2));
    assert_eq!(state.status, PlaybackStatus::Loading);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.duration, 0.0);
    assert!(!state.is_active(1));
}

#[test]
fn reselect_playing_item_pauses_in_place() {
    let mut state = playing(1, 42.0, 100.0);
    assert_eq!(state.select(1), PlaybackCommand::Pause);
    assert_eq!(state.status, PlaybackStatus::Paused);
    assert_eq!(state.position, 42.0);
}

#[test]
fn reselect_paused_item_resumes_from_same_position() {
    let mut state = playing(1, 42.0, 100.0);
    state.select(1);
    assert_eq!(state.select(1), PlaybackCommand::Resume);
    state.play_resolved(1);
    assert_eq!(state.status, PlaybackStatus::Playing);
    assert_eq!(state.position, 42.0);
}

#[test]
fn reselect_loading_item_is_ignored() {
    let mut state = PlaybackState::default();
    state.select(1);
    assert_eq!(state.select(1), PlaybackCommand::Ignore);
    assert_eq!(state.status, PlaybackStatus::Loading);
}

#[test]
fn at_most_one_item_is_active_after_any_sequence() {
    let mut state = PlaybackState::default();
    let presses = [1, 2, 2, 3, 1, 1, 1, 4, 2];
    for id in presses {
        state.select(id);
        state.play_resolved(id);
        let active_count = (1..=4).filter(|candidate| state.is_active(*candidate)).count();
        assert!(active_count <= 1);
        assert_eq!(state.active.is_none(), state.status == PlaybackStatus::Idle);
    }
}

#[test]
fn select_clears_previous_error() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.play_failed(1, PlaybackError::Blocked);
    assert_eq!(state.error_for(1), Some(PlaybackError::Blocked));
    state.select(2);
    assert_eq!(state.error, None);
}

// =============================================================
// Async outcomes
// =============================================================

#[test]
fn play_resolved_for_stale_item_is_ignored() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.select(2);
    state.play_resolved(1);
    assert_eq!(state.status, PlaybackStatus::Loading);
    assert_eq!(state.active, Some(2));
}

#[test]
fn play_failed_returns_to_idle_and_scopes_error_to_item() {
    let mut state = PlaybackState::default();
    state.select(7);
    state.play_failed(7, PlaybackError::Unsupported);
    assert_eq!(state.status, PlaybackStatus::Idle);
    assert_eq!(state.active, None);
    assert_eq!(state.error_for(7), Some(PlaybackError::Unsupported));
    assert_eq!(state.error_for(8), None);
}

#[test]
fn play_failed_for_stale_item_is_ignored() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.select(2);
    state.play_failed(1, PlaybackError::Failed);
    assert_eq!(state.active, Some(2));
    assert_eq!(state.error, None);
}

#[test]
fn ended_clears_active_and_resets_position() {
    let mut state = playing(3, 99.0, 100.0);
    state.ended(3);
    assert_eq!(state.active, None);
    assert_eq!(state.status, PlaybackStatus::Idle);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.status_for(3), PlaybackStatus::Idle);
}

#[test]
fn ended_while_paused_or_loading_also_returns_to_idle() {
    let mut paused = playing(3, 10.0, 100.0);
    paused.select(3);
    paused.ended(3);
    assert_eq!(paused.status, PlaybackStatus::Idle);

    let mut loading = PlaybackState::default();
    loading.select(4);
    loading.ended(4);
    assert_eq!(loading.status, PlaybackStatus::Idle);
}

#[test]
fn platform_pause_only_applies_while_playing() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.paused(1);
    assert_eq!(state.status, PlaybackStatus::Loading);
    state.play_resolved(1);
    state.paused(1);
    assert_eq!(state.status, PlaybackStatus::Paused);
}

#[test]
fn media_events_belong_to_the_loaded_item() {
    let state = playing(1, 10.0, 100.0);
    assert_eq!(state.event_owner(Some(1)), Some(1));
    assert_eq!(state.event_owner(None), None);
}

#[test]
fn media_events_from_a_replaced_source_are_dropped() {
    let mut state = playing(1, 10.0, 100.0);
    state.select(2);
    assert_eq!(state.event_owner(Some(1)), None);

    // A late error from item 1 must not fail item 2.
    if let Some(owner) = state.event_owner(Some(1)) {
        state.play_failed(owner, PlaybackError::Failed);
    }
    assert_eq!(state.active, Some(2));
    assert_eq!(state.status, PlaybackStatus::Loading);
    assert_eq!(state.error, None);
}

#[test]
fn media_events_are_dropped_when_idle() {
    let mut state = playing(1, 10.0, 100.0);
    state.ended(1);
    assert_eq!(state.event_owner(Some(1)), None);
}

// =============================================================
// Progress
// =============================================================

#[test]
fn samples_are_dropped_once_not_playing() {
    let mut state = playing(1, 10.0, 100.0);
    state.select(1);
    state.position_sampled(1, 20.0);
    assert_eq!(state.position, 10.0);
}

#[test]
fn metadata_ignores_unknown_durations() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.metadata_loaded(1, f64::NAN);
    state.metadata_loaded(1, f64::INFINITY);
    assert_eq!(state.duration, 0.0);
    state.metadata_loaded(1, 120.0);
    assert_eq!(state.duration, 120.0);
}

#[test]
fn progress_fraction_is_zero_without_duration() {
    let mut state = PlaybackState::default();
    state.select(1);
    state.play_resolved(1);
    state.position_sampled(1, 5.0);
    assert_eq!(state.progress_fraction(), 0.0);
}

#[test]
fn progress_fraction_tracks_position_over_duration() {
    let state = playing(1, 25.0, 100.0);
    assert!((state.progress_fraction() - 0.25).abs() < f64::EPSILON);
}

// =============================================================
// Seeking
// =============================================================

#[test]
fn seek_target_maps_offset_fraction_to_position() {
    assert_eq!(seek_target(50.0, 200.0, 100.0), Some(25.0));
    assert_eq!(seek_target(0.0, 200.0, 100.0), Some(0.0));
    assert_eq!(seek_target(200.0, 200.0, 100.0), Some(100.0));
}

#[test]
fn seek_target_ignores_out_of_range_clicks() {
    assert_eq!(seek_target(-1.0, 200.0, 100.0), None);
    assert_eq!(seek_target(250.0, 200.0, 100.0), None);
}

#[test]
fn seek_target_requires_width_and_duration() {
    assert_eq!(seek_target(10.0, 0.0, 100.0), None);
    assert_eq!(seek_target(10.0, 200.0, 0.0), None);
    assert_eq!(seek_target(10.0, 200.0, f64::NAN), None);
}

#[test]
fn seek_on_active_item_moves_position() {
    let mut state = playing(1, 10.0, 100.0);
    assert!(state.seek(1, 60.0));
    assert_eq!(state.position, 60.0);
}

#[test]
fn seek_on_non_active_item_is_noop() {
    let mut state = playing(1, 10.0, 100.0);
    assert!(!state.seek(2, 60.0));
    assert_eq!(state.position, 10.0);
}

#[test]
fn seek_out_of_range_is_noop() {
    let mut state = playing(1, 10.0, 100.0);
    assert!(!state.seek(1, 150.0));
    assert!(!state.seek(1, -5.0));
    assert_eq!(state.position, 10.0);
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn classify_exception_maps_dom_exception_names() {
    assert_eq!(PlaybackError::classify_exception(Some("NotAllowedError")), Some(PlaybackError::Blocked));
    assert_eq!(PlaybackError::classify_exception(Some("NotSupportedError")), Some(PlaybackError::Unsupported));
    assert_eq!(PlaybackError::classify_exception(Some("NetworkError")), Some(PlaybackError::Failed));
    assert_eq!(PlaybackError::classify_exception(None), Some(PlaybackError::Failed));
}

#[test]
fn classify_exception_treats_abort_as_superseded() {
    assert_eq!(PlaybackError::classify_exception(Some("AbortError")), None);
}

#[test]
fn classify_media_code_detects_unsupported_source() {
    assert_eq!(PlaybackError::classify_media_code(Some(MEDIA_ERR_SRC_NOT_SUPPORTED)), PlaybackError::Unsupported);
    assert_eq!(PlaybackError::classify_media_code(Some(2)), PlaybackError::Failed);
    assert_eq!(PlaybackError::classify_media_code(None), PlaybackError::Failed);
}

#[test]
fn playback_errors_have_distinct_messages() {
    let blocked = PlaybackError::Blocked.to_string();
    let unsupported = PlaybackError::Unsupported.to_string();
    let failed = PlaybackError::Failed.to_string();
    assert_ne!(blocked, unsupported);
    assert_ne!(blocked, failed);
    assert_ne!(unsupported, failed);
}
