use leptos::prelude::*;

use crate::content::CLIENTS;

#[component]
pub fn SocialProof() -> impl IntoView {
    view! {
        <section class="social-proof" aria-label="Trusted by">
            <div class="container client-grid">
                {CLIENTS
                    .into_iter()
                    .map(|client| view! { <div class="client-chip">{client}</div> })
                    .collect_view()}
            </div>
        </section>
    }
}
