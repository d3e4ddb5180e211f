//! The landing page content, in display order.

use super::{About, Banner, Contact, Footer, Hero, Services};
use leptos::prelude::*;

/// Marker values of the top-level blocks, in the order they render.
pub const LANDING_SECTIONS: [&str; 6] = ["hero", "about", "banner", "services", "contact", "footer"];

/// All landing sections, filling the layout shell's content slot.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Banner />
        <Services />
        <Contact />
        <Footer />
    }
}
