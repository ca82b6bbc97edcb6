//! Home page: the timeline shell.
//!
//! ARCHITECTURE
//! ============
//! One `LocalResource` issues the timeline fetch after hydration. Its value is
//! folded into [`PageState`], and only the ready state dispatches data to the
//! about and timeline components.

use leptos::prelude::*;

use crate::components::{
    about_section::AboutSection, footer::Footer, header::Header, loading_spinner::LoadingSpinner,
    timeline::Timeline,
};
use crate::net::api::fetch_timeline;
use crate::state::page::PageState;

pub const TIMELINE_HEADING: &str = "Latest Content & Teachings";
pub const EMPTY_TIMELINE_MESSAGE: &str = "No timeline content available at the moment.";
pub const ERROR_HEADING: &str = "Error Loading Timeline";

#[component]
pub fn HomePage() -> impl IntoView {
    let timeline = LocalResource::new(fetch_timeline);

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                {move || match PageState::from_fetch(timeline.get()) {
                    PageState::Loading => view! { <LoadingSpinner/> }.into_any(),
                    PageState::Error(message) => error_view(message).into_any(),
                    state @ PageState::Ready(_) => ready_view(state).into_any(),
                }}
            </main>
            <Footer/>
        </div>
    }
}

fn error_view(message: String) -> impl IntoView {
    view! {
        <div class="page__error" role="alert">
            <h3 class="page__error-title">{ERROR_HEADING}</h3>
            <p class="page__error-text">{message}</p>
        </div>
    }
}

fn ready_view(state: PageState) -> impl IntoView {
    let show_about = state.show_about();
    let show_timeline = state.show_timeline();
    let show_empty = state.show_empty_timeline();
    let PageState::Ready(data) = state else {
        return ().into_any();
    };
    let about = data.body.into_iter().next().filter(|_| show_about);
    let items = data.timeline;

    view! {
        {about.map(|content| view! { <AboutSection content=content/> })}
        <section class="page__timeline">
            <div class="page__intro">
                <h2 class="page__heading">{TIMELINE_HEADING}</h2>
                <p class="page__subheading">
                    "Daily communion messages, GIBC topic studies and audio teachings."
                </p>
            </div>
            {show_timeline.then(|| view! { <Timeline items=items/> })}
            {show_empty.then(|| view! { <p class="page__empty">{EMPTY_TIMELINE_MESSAGE}</p> })}
        </section>
    }
    .into_any()
}
