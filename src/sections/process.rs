use leptos::prelude::*;

use crate::content::PROCESS_STEPS;

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="process">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How we work"</h2>
                    <p class="section-description">"Fast onboarding, measurable outcomes."</p>
                </div>
                <div class="process-grid">
                    {PROCESS_STEPS
                        .into_iter()
                        .map(|step| {
                            view! {
                                <div class="process-step animate-in">
                                    <div class="step-ordinal">{format!("{}.", step.ordinal)}</div>
                                    <div class=format!("card-icon icon-{}", step.icon) aria-hidden="true"></div>
                                    <h3 class="card-title">{step.title}</h3>
                                    <p class="card-description">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
