use leptos::prelude::*;

use crate::content::{AUDIT_BULLETS, BRAND};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <div class="container hero-grid">
                <div class="hero-content animate-in">
                    <h1 class="hero-title">
                        "Win more customers with"
                        <span class=format!("hero-title-accent {}", BRAND.gradient_accent)>
                            "data-driven marketing"
                        </span>
                    </h1>
                    <p class="hero-description">{BRAND.description}</p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">"Get a free audit"</a>
                        <a href="#packages" class="hero-link">"See packages →"</a>
                    </div>
                    <div class="hero-trust">
                        <span class="trust-item">
                            <span class="icon icon-shield" aria-hidden="true"></span>
                            "GDPR-ready"
                        </span>
                        <span class="trust-item">
                            <span class="icon icon-badge" aria-hidden="true"></span>
                            "Transparent reporting"
                        </span>
                        <span class="trust-item">
                            <span class="icon icon-star" aria-hidden="true"></span>
                            "Local expertise"
                        </span>
                    </div>
                </div>
                <LeadCaptureCard />
            </div>
        </section>
    }
}

#[component]
fn LeadCaptureCard() -> impl IntoView {
    view! {
        <div class="card lead-card animate-in">
            <h3 class="card-title">"Free Growth Snapshot (48-hour turnaround)"</h3>
            <ul class="lead-list">
                {AUDIT_BULLETS
                    .into_iter()
                    .map(|bullet| {
                        view! {
                            <li class="lead-item">
                                <span class="icon icon-check" aria-hidden="true"></span>
                                <span>{bullet}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="#contact" class="btn btn-primary btn-block">"Request my snapshot"</a>
        </div>
    }
}
