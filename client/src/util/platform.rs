//! Playback capability detection.
//!
//! Mobile browsers refuse unsolicited audio, so on touch platforms assets are
//! not preloaded and playback waits for a direct user gesture. Callers consume
//! the resulting [`PlaybackCapabilities`] instead of branching on the platform.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_UA: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)android|iphone|ipad|ipod|mobile|webos|blackberry|iemobile|opera mini").ok()
});

/// How the audio layer should treat the current platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackCapabilities {
    /// Whether audio metadata may be fetched before the user presses play.
    pub preload: bool,
    /// Whether output must be unlocked by a synchronous user gesture first.
    pub requires_gesture_unlock: bool,
}

impl PlaybackCapabilities {
    pub const DESKTOP: Self = Self { preload: true, requires_gesture_unlock: false };
    pub const MOBILE: Self = Self { preload: false, requires_gesture_unlock: true };

    /// Value for the media element's `preload` attribute.
    #[must_use]
    pub fn preload_attr(self) -> &'static str {
        if self.preload { "metadata" } else { "none" }
    }
}

/// Classify a platform from its user agent and touch-point count.
///
/// iPadOS reports a desktop Safari user agent, so a "Macintosh" agent with
/// more than one touch point is treated as mobile.
#[must_use]
pub fn capabilities_for(user_agent: &str, max_touch_points: i32) -> PlaybackCapabilities {
    let ua_mobile = MOBILE_UA.as_ref().is_some_and(|re| re.is_match(user_agent));
    let touch_mac = user_agent.contains("Macintosh") && max_touch_points > 1;
    if ua_mobile || touch_mac { PlaybackCapabilities::MOBILE } else { PlaybackCapabilities::DESKTOP }
}

/// Detect capabilities of the running browser. Desktop defaults under SSR.
pub fn detect() -> PlaybackCapabilities {
    #[cfg(feature = "hydrate")]
    {
        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return PlaybackCapabilities::DESKTOP;
        };
        let user_agent = navigator.user_agent().unwrap_or_default();
        capabilities_for(&user_agent, navigator.max_touch_points())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PlaybackCapabilities::DESKTOP
    }
}
