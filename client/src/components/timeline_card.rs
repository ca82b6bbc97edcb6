//! One media card with its inline player controls.
//!
//! Only the active card renders the seek bar and time readout. Errors are
//! shown on the card that raised them.

#[cfg(test)]
#[path = "timeline_card_test.rs"]
mod timeline_card_test;

use leptos::prelude::*;

use crate::net::types::{TimelineItem, asset_url};
#[cfg(feature = "hydrate")]
use crate::state::playback::seek_target;
use crate::state::playback::{PlaybackState, PlaybackStatus};
use crate::util::category::badge_colors;
use crate::util::format::{format_file_size, format_time};

/// Play-button label for a card's status.
fn play_label(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Idle => "Play",
        PlaybackStatus::Loading => "Loading...",
        PlaybackStatus::Playing => "Pause",
        PlaybackStatus::Paused => "Resume",
    }
}

#[component]
pub fn TimelineCard(
    item: TimelineItem,
    playback: RwSignal<PlaybackState>,
    /// Invoked with `(item id, audio path)` on every play/pause press.
    on_select: Callback<(i64, String)>,
    /// Invoked with `(item id, position seconds)` for an in-range seek.
    on_seek: Callback<(i64, f64)>,
) -> impl IntoView {
    let id = item.id;
    let badge_style = badge_colors(&item.category).style();
    let image_src = asset_url(&item.image);
    let icon_src = asset_url(&item.icon);
    let icon_alt = format!("{} icon", item.title);
    let episode = format!("Episode {}", item.episode);
    let size = format_file_size(item.audio_size);
    let description = if item.has_description() { item.description.clone() } else { None };
    let media_name = item.media_name.clone().unwrap_or_default();
    let audio_path = item.audio.clone();

    let status = move || playback.with(|state| state.status_for(id));
    let is_active = move || playback.with(|state| state.is_active(id));
    let bar_ref = NodeRef::<leptos::html::Div>::new();

    let on_play = move |_ev: leptos::ev::MouseEvent| {
        on_select.run((id, audio_path.clone()));
    };

    let on_bar_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(bar) = bar_ref.get_untracked() else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let offset = f64::from(ev.client_x()) - rect.left();
            let duration = playback.with_untracked(|state| state.duration);
            if let Some(position) = seek_target(offset, rect.width(), duration) {
                on_seek.run((id, position));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_seek);
        }
    };

    let fill_style = move || format!("width: {:.2}%;", playback.with(PlaybackState::progress_fraction) * 100.0);
    let readout = move || {
        playback.with(|state| format!("{} / {}", format_time(state.position), format_time(state.duration)))
    };
    let error_message = move || playback.with(|state| state.error_for(id)).map(|error| error.to_string());

    view! {
        <article class="timeline-card" class:timeline-card--active=is_active>
            <div class="timeline-card__media">
                <img class="timeline-card__image" src=image_src alt=item.title.clone() loading="lazy"/>
                <span class="timeline-card__badge" style=badge_style>{item.category.clone()}</span>
            </div>
            <div class="timeline-card__body">
                <div class="timeline-card__meta">
                    <span class="timeline-card__episode">{episode}</span>
                    <span class="timeline-card__date">{item.create_date.clone()}</span>
                </div>
                <h3 class="timeline-card__title">{item.title.clone()}</h3>
                {description.map(|text| view! { <p class="timeline-card__description">{text}</p> })}
                <div class="timeline-card__meta">
                    <span class="timeline-card__media-name">{media_name}</span>
                    <span class="timeline-card__size">{size}</span>
                </div>

                <Show when=is_active>
                    <div class="timeline-card__progress">
                        <div
                            class="timeline-card__seek"
                            node_ref=bar_ref
                            role="slider"
                            aria-label="Seek"
                            on:click=on_bar_click
                        >
                            <div class="timeline-card__seek-fill" style=fill_style></div>
                        </div>
                        <span class="timeline-card__time">{readout}</span>
                    </div>
                </Show>

                <div class="timeline-card__controls">
                    <button
                        class="timeline-card__play"
                        class:timeline-card__play--active=is_active
                        disabled=move || status() == PlaybackStatus::Loading
                        aria-busy=move || (status() == PlaybackStatus::Loading).to_string()
                        on:click=on_play
                    >
                        <Show when=move || status() == PlaybackStatus::Loading>
                            <span class="timeline-card__spinner" aria-hidden="true"></span>
                        </Show>
                        <span>{move || play_label(status())}</span>
                    </button>
                    <img class="timeline-card__icon" src=icon_src alt=icon_alt/>
                </div>
                {move || error_message().map(|message| view! { <p class="timeline-card__error" role="alert">{message}</p> })}
            </div>
        </article>
    }
}
