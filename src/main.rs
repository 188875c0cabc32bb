// PortIQ landing page, Leptos CSR edition.

mod content;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <SocialProof />
            <Services />
            <Pricing />
            <Process />
            <About />
            <Contact />
        </main>
        <Footer />
    }
}
