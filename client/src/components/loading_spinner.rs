use leptos::prelude::*;

/// Spinner shown while the timeline document is in flight.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <div class="loading-spinner__ring" aria-hidden="true"></div>
            <h3 class="loading-spinner__title">"Loading Timeline"</h3>
            <p class="loading-spinner__text">"Fetching the latest content..."</p>
        </div>
    }
}
