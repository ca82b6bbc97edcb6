//! About section rendered from the first body entry.
//!
//! DESIGN
//! ======
//! Pure rendering: background and overlay styles are derived from the record
//! and the sanitized HTML body is injected as markup.

#[cfg(test)]
#[path = "about_section_test.rs"]
mod about_section_test;

use leptos::prelude::*;

use crate::net::types::{BodyContent, asset_url};
use crate::util::markup::sanitize_rich_text;

/// Inline style placing the record's background image.
pub fn background_style(background: &str) -> String {
    format!(
        "background-image: url('{}'); background-size: cover; background-position: center; background-repeat: no-repeat;",
        asset_url(background)
    )
}

/// Overlay alpha for an opacity percentage, clamped to `[0, 1]`.
pub fn overlay_alpha(opacity_percent: f64) -> f64 {
    if opacity_percent.is_finite() { (opacity_percent / 100.0).clamp(0.0, 1.0) } else { 0.0 }
}

pub fn overlay_style(opacity_percent: f64) -> String {
    format!("background-color: rgba(0, 0, 0, {});", overlay_alpha(opacity_percent))
}

#[component]
pub fn AboutSection(content: BodyContent) -> impl IntoView {
    let section_style = background_style(&content.background);
    let overlay = overlay_style(content.background_opacity);
    let body_html = sanitize_rich_text(&content.about);

    view! {
        <section class="about" style=section_style>
            <div class="about__overlay" style=overlay></div>
            <div class="about__inner">
                <div class="about__card">
                    <div class="about__prose" inner_html=body_html></div>
                </div>
            </div>
        </section>
    }
}
