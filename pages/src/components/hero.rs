use super::ParallaxSection;
use crate::content::{CONTACT_ANCHOR, HERO_CTA, HERO_HEADING, HERO_IMAGE, HERO_LEAD};
use leptos::prelude::*;

/// Opening decorative section with the call-to-action.
#[component]
pub fn Hero() -> impl IntoView {
    let cta_href = format!("#{CONTACT_ANCHOR}");
    view! {
        <ParallaxSection section="hero" image=HERO_IMAGE>
            <h1 class="display-3 fw-bold mb-4">{HERO_HEADING}</h1>
            <p class="lead mb-4">{HERO_LEAD}</p>
            <a href=cta_href class="btn btn-custom">{HERO_CTA}</a>
        </ParallaxSection>
    }
}
