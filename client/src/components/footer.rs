//! Static site footer.

use leptos::prelude::*;

const CATEGORIES: [&str; 4] = ["Daily Communion", "GIBC Topics", "Audio Teachings", "Spiritual Guidance"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <h3 class="site-footer__heading">"Dr. Arthur Frost"</h3>
                    <p class="site-footer__text">
                        "Equipping the body of Christ through teachings, sermons, and spiritual guidance. "
                        "Join us on the journey to become fully mature and functional Christians."
                    </p>
                </div>
                <div>
                    <h3 class="site-footer__heading">"Content Categories"</h3>
                    <ul class="site-footer__list">
                        {CATEGORIES.iter().map(|c| view! { <li>{*c}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h3 class="site-footer__heading">"Connect"</h3>
                    <p class="site-footer__text">
                        "All teachings and sermons are shared free of charge. "
                        "Please use this platform and share it with others."
                    </p>
                    <div class="site-footer__badges">
                        <span class="site-footer__badge site-footer__badge--yt">"YT"</span>
                        <span class="site-footer__badge site-footer__badge--fh">"FH"</span>
                    </div>
                </div>
            </div>
            <p class="site-footer__copyright">"© 2025 Dr. Arthur Frost Timeline."</p>
        </footer>
    }
}
