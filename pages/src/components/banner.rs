use super::ParallaxSection;
use crate::content::{BANNER_HEADING, BANNER_IMAGE, BANNER_LEAD};
use leptos::prelude::*;

/// Secondary decorative section between the about block and services.
#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <ParallaxSection section="banner" image=BANNER_IMAGE container_class="text-center">
            <h2 class="display-4 fw-bold mb-4">{BANNER_HEADING}</h2>
            <p class="lead">{BANNER_LEAD}</p>
        </ParallaxSection>
    }
}
