//! Single-active-track playback state for the timeline.
//!
//! DESIGN
//! ======
//! One owned value tracks which item is active, its position, its duration,
//! and the last per-item error. Every transition funnels through this type,
//! so at most one item can be active at a time. Browser callbacks report
//! events tagged with the item id they were raised for; events for an item
//! that is no longer active are dropped.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

/// `MediaError.MEDIA_ERR_SRC_NOT_SUPPORTED`.
pub const MEDIA_ERR_SRC_NOT_SUPPORTED: u16 = 4;

/// Component-wide playback status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing is active.
    #[default]
    Idle,
    /// An item was selected and its play request is pending.
    Loading,
    Playing,
    Paused,
}

/// Classified playback failure, scoped to the item that raised it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The platform refused to start audio without a user gesture.
    #[error("Playback was blocked by your browser. Tap play to try again.")]
    Blocked,
    #[error("This audio format is not supported on your device.")]
    Unsupported,
    #[error("Unable to play this audio. Please try again.")]
    Failed,
}

impl PlaybackError {
    /// Classify a rejected play request by its `DOMException` name.
    ///
    /// Returns `None` for `AbortError`, which only means the request was
    /// superseded by a newer load.
    #[must_use]
    pub fn classify_exception(name: Option<&str>) -> Option<Self> {
        match name {
            Some("AbortError") => None,
            Some("NotAllowedError") => Some(Self::Blocked),
            Some("NotSupportedError") => Some(Self::Unsupported),
            _ => Some(Self::Failed),
        }
    }

    /// Classify an `error` event by its `MediaError` code.
    #[must_use]
    pub fn classify_media_code(code: Option<u16>) -> Self {
        if code == Some(MEDIA_ERR_SRC_NOT_SUPPORTED) { Self::Unsupported } else { Self::Failed }
    }
}

/// Side effect the audio layer must perform after [`PlaybackState::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Stop `stop` (if any) at position zero, then load and play `id`.
    Start { id: i64, stop: Option<i64> },
    /// Pause the active item in place.
    Pause,
    /// Resume the active item from its current position.
    Resume,
    /// The active item is still loading; nothing to do.
    Ignore,
}

/// Playback state owned by the timeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    /// The single active item, if any. `None` exactly when `status` is `Idle`.
    pub active: Option<i64>,
    pub status: PlaybackStatus,
    /// Current position in seconds.
    pub position: f64,
    /// Known duration in seconds; `0.0` while unknown.
    pub duration: f64,
    /// Last playback failure and the item it belongs to.
    pub error: Option<(i64, PlaybackError)>,
}

impl PlaybackState {
    /// Apply a user press on item `id` and return the side effect to run.
    ///
    /// Re-selecting the active item toggles pause/resume; selecting any other
    /// item restarts from zero on that item. Any press clears a prior error.
    pub fn select(&mut self, id: i64) -> PlaybackCommand {
        self.error = None;
        if self.active == Some(id) {
            match self.status {
                PlaybackStatus::Playing => {
                    self.status = PlaybackStatus::Paused;
                    return PlaybackCommand::Pause;
                }
                PlaybackStatus::Paused => {
                    self.status = PlaybackStatus::Loading;
                    return PlaybackCommand::Resume;
                }
                PlaybackStatus::Loading => return PlaybackCommand::Ignore,
                PlaybackStatus::Idle => {}
            }
        }

        let stop = self.active.filter(|prev| *prev != id);
        self.active = Some(id);
        self.status = PlaybackStatus::Loading;
        self.position = 0.0;
        self.duration = 0.0;
        PlaybackCommand::Start { id, stop }
    }

    /// The play request for `id` resolved.
    pub fn play_resolved(&mut self, id: i64) {
        if self.active == Some(id) && self.status == PlaybackStatus::Loading {
            self.status = PlaybackStatus::Playing;
        }
    }

    /// The play request for `id` failed; drop back to idle with the error.
    pub fn play_failed(&mut self, id: i64, error: PlaybackError) {
        if self.active != Some(id) {
            return;
        }
        self.reset();
        self.error = Some((id, error));
    }

    /// The platform paused `id` on its own (media keys, output change).
    pub fn paused(&mut self, id: i64) {
        if self.active == Some(id) && self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Metadata for `id` reported its duration.
    pub fn metadata_loaded(&mut self, id: i64, duration: f64) {
        if self.active == Some(id) && duration.is_finite() && duration > 0.0 {
            self.duration = duration;
        }
    }

    /// A progress sample for `id`. Only accepted while playing.
    pub fn position_sampled(&mut self, id: i64, position: f64) {
        if self.active == Some(id) && self.status == PlaybackStatus::Playing && position.is_finite() {
            self.position = position.max(0.0);
        }
    }

    /// `id` reached its natural end.
    pub fn ended(&mut self, id: i64) {
        if self.active == Some(id) {
            self.reset();
        }
    }

    /// Move the active item to `position`. Returns `false` (and changes
    /// nothing) for a non-active item or a position outside `[0, duration]`.
    pub fn seek(&mut self, id: i64, position: f64) -> bool {
        if self.active != Some(id) || self.status == PlaybackStatus::Idle {
            return false;
        }
        if !(0.0..=self.duration).contains(&position) {
            return false;
        }
        self.position = position;
        true
    }

    #[must_use]
    pub fn is_active(&self, id: i64) -> bool {
        self.active == Some(id)
    }

    /// The item a media event belongs to, given the item whose source the
    /// element holds. `None` once that item is no longer active.
    #[must_use]
    pub fn event_owner(&self, loaded: Option<i64>) -> Option<i64> {
        loaded.filter(|id| self.is_active(*id))
    }

    /// Status as seen by the card for item `id`.
    #[must_use]
    pub fn status_for(&self, id: i64) -> PlaybackStatus {
        if self.is_active(id) { self.status } else { PlaybackStatus::Idle }
    }

    /// The error to show on the card for item `id`, if it owns one.
    #[must_use]
    pub fn error_for(&self, id: i64) -> Option<PlaybackError> {
        self.error.and_then(|(owner, error)| (owner == id).then_some(error))
    }

    /// Seek-bar fill fraction in `[0, 1]`; `0` while the duration is unknown.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn reset(&mut self) {
        self.active = None;
        self.status = PlaybackStatus::Idle;
        self.position = 0.0;
        self.duration = 0.0;
    }
}

/// Map a click at `offset_x` within a bar `width` pixels wide to a position.
///
/// Returns `None` when the bar has no width, the duration is unknown, or the
/// click lands before the start or past the end of the track.
#[must_use]
pub fn seek_target(offset_x: f64, width: f64, duration: f64) -> Option<f64> {
    if width.is_nan() || width <= 0.0 || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let position = (offset_x / width) * duration;
    (0.0..=duration).contains(&position).then_some(position)
}
