//! Site header with title and content pills.

use leptos::prelude::*;

const PILLS: [&str; 3] = ["Daily Communion", "GIBC Topics", "Audio Teachings"];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__title">"Dr. Arthur Frost Timeline"</h1>
                <p class="site-header__subtitle">"Teachings, Sermons & Spiritual Content"</p>
                <div class="site-header__pills">
                    {PILLS
                        .iter()
                        .map(|label| view! { <span class="site-header__pill">{*label}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </header>
    }
}
