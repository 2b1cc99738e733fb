use leptos::prelude::*;

use super::footer::Footer;
use super::hero::Hero;
use super::how_it_works::HowItWorks;
use super::navbar::Navbar;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Navbar />
            <main>
                <Hero />
                <HowItWorks />
            </main>
            <Footer />
        </div>
    }
}
