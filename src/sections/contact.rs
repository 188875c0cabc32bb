use leptos::prelude::*;

use crate::content::{CONTACT_FIELDS, ContactField, InputKind};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div class="contact-intro">
                    <h2 class="section-title">"Let's talk growth"</h2>
                    <p class="section-description">
                        "Tell us where you are and where you want to be. We reply within one business day."
                    </p>
                    <ul class="contact-details">
                        <li class="contact-detail">
                            <span class="icon icon-phone" aria-hidden="true"></span>
                            "+356 2122 0000"
                        </li>
                        <li class="contact-detail">
                            <span class="icon icon-mail" aria-hidden="true"></span>
                            "hello@portiq.mt"
                        </li>
                        <li class="contact-detail">
                            <span class="icon icon-pin" aria-hidden="true"></span>
                            "Valletta, Malta"
                        </li>
                    </ul>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    // No submission backend is wired; the button is a visual affordance only.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <form class="card contact-form" on:submit=on_submit>
            {CONTACT_FIELDS
                .into_iter()
                .map(|field| view! { <FieldRow field=field /> })
                .collect_view()}
            <button type="submit" class="btn btn-primary btn-block">"Send message"</button>
        </form>
    }
}

#[component]
fn FieldRow(field: ContactField) -> impl IntoView {
    let control = match field.kind {
        InputKind::Textarea => view! {
            <textarea class="form-input form-textarea" placeholder=field.placeholder rows=4 />
        }
        .into_any(),
        kind => view! {
            <input class="form-input" type=kind.input_type() placeholder=field.placeholder />
        }
        .into_any(),
    };

    view! {
        <label class="form-field">
            <span class="form-label">{field.label}</span>
            {control}
        </label>
    }
}
