use leptos::prelude::*;

use crate::content::{FOOTER_LINKS, copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p class="footer-copyright">{copyright_line(current_year())}</p>
                <div class="footer-links">
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="footer-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
