use leptos::prelude::*;

use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What we do"</h2>
                    <p class="section-description">
                        "Full-funnel digital marketing tailored for Malta's market."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .map(|service| {
                            view! {
                                <ServiceCardView
                                    icon=service.icon
                                    title=service.title
                                    description=service.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCardView(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="card service-card animate-in">
            <div class=format!("card-icon icon-{icon}") aria-hidden="true"></div>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
        </article>
    }
}
