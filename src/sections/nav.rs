use leptos::prelude::*;

use crate::content::{BRAND, LAYOUT, NAV_LINKS};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class=format!("nav-inner {}", LAYOUT.header_pad_class)>
                <a href="#top" class="nav-brand">
                    <LogoMark size_class=LAYOUT.logo_class />
                    <span class=format!("nav-title {}", BRAND.gradient_primary)>{BRAND.name}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=format!("#{}", link.target) class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <a href="#contact" class="btn btn-primary nav-cta">"Let's talk"</a>
            </div>
        </header>
    }
}

/// Compass logo mark. Sized by the layout config so header variants stay
/// a one-line change.
#[component]
pub fn LogoMark(#[prop(default = "logo-md")] size_class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("logo {size_class}")
            viewBox="0 0 48 48"
            role="img"
            aria-label="PortIQ compass logo"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <defs>
                <linearGradient id="portiq-gradient" x1="0" y1="0" x2="48" y2="48">
                    <stop stop-color="#06b6d4" />
                    <stop offset="1" stop-color="#2563eb" />
                </linearGradient>
            </defs>
            <circle cx="24" cy="24" r="18" stroke="url(#portiq-gradient)" stroke-width="2.5" />
            <circle cx="24" cy="24" r="3" fill="url(#portiq-gradient)" />
            <path
                d="M24 7v6M24 35v6M7 24h6M35 24h6"
                stroke="url(#portiq-gradient)"
                stroke-width="2.5"
                stroke-linecap="round"
            />
            <path d="M30 18l-4 8-8 4 4-8 8-4z" fill="url(#portiq-gradient)" opacity="0.25" />
        </svg>
    }
}
