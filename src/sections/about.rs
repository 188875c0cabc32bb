use leptos::prelude::*;

use crate::content::{BRAND, TOOLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-content">
                    <h2 class="section-title">{BRAND.tagline}</h2>
                    <p class="about-text">{BRAND.description}</p>
                    <p class="about-text">
                        "We are a small senior team. No account-manager relay, no fluff reports. "
                        "You talk to the people doing the work."
                    </p>
                </div>
                <div class="about-tools">
                    <h3 class="tools-title">"Tools we live in"</h3>
                    <div class="tools-grid">
                        {TOOLS
                            .into_iter()
                            .map(|tool| view! { <span class="tool-chip">{tool}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
