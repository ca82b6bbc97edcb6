//! Timeline grid with a single shared audio player.
//!
//! ARCHITECTURE
//! ============
//! The grid owns one `PlaybackState` signal and (in the browser) one
//! `AudioController`. Cards only read the signal and report presses and seeks
//! upward, so exactly one item can ever be active.

use leptos::prelude::*;

use crate::components::timeline_card::TimelineCard;
use crate::net::types::TimelineItem;
use crate::state::playback::PlaybackState;
#[cfg(feature = "hydrate")]
use crate::util::audio::AudioController;
#[cfg(feature = "hydrate")]
use crate::util::platform;

#[component]
pub fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
    let playback = RwSignal::new(PlaybackState::default());

    #[cfg(feature = "hydrate")]
    let controller = {
        let controller = StoredValue::new_local(AudioController::new(playback, platform::detect()));
        on_cleanup(move || {
            let _ = controller.try_with_value(AudioController::teardown);
        });
        controller
    };

    let on_select = Callback::new(move |(id, audio_path): (i64, String)| {
        #[cfg(feature = "hydrate")]
        controller.with_value(|c| c.select(id, &audio_path));
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, audio_path);
    });

    let on_seek = Callback::new(move |(id, position): (i64, f64)| {
        #[cfg(feature = "hydrate")]
        controller.with_value(|c| c.seek(id, position));
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, position);
    });

    view! {
        <div class="timeline">
            <div class="timeline__grid">
                {items
                    .into_iter()
                    .map(|item| {
                        view! { <TimelineCard item=item playback=playback on_select=on_select on_seek=on_seek/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
