use leptos::prelude::*;

use crate::content::{PRICING_TIERS, PricingTier};

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="packages" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Simple packages, clear value"</h2>
                    <p class="section-description">
                        "Start small or scale fast. Swap or cancel monthly."
                    </p>
                </div>
                <div class="pricing-grid">
                    {PRICING_TIERS
                        .into_iter()
                        .map(|tier| view! { <TierCard tier=tier /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    // The popular tier gets a badge and a distinct border. Only conditional
    // rendering on the page.
    let card_class = if tier.popular { "card tier-card tier-popular" } else { "card tier-card" };

    view! {
        <article class=card_class>
            {tier.popular.then(|| view! { <div class="tier-badge">"Most popular"</div> })}
            <h3 class="tier-name">{tier.name}</h3>
            <div class="tier-price">{tier.price}</div>
            <p class="tier-highlight">{tier.highlight}</p>
            <ul class="tier-features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="tier-feature">
                                <span class="icon icon-check" aria-hidden="true"></span>
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="#contact" class="btn btn-primary btn-block">{tier.cta}</a>
        </article>
    }
}
