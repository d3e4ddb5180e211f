//! Decorative full-viewport section with a fixed background image.

use crate::effects::PARALLAX_SECTION_CLASS;
use leptos::prelude::*;

/// A decorative section: background image, dimming overlay, centered
/// content. The marker class makes it a target of the scroll effect.
#[component]
pub fn ParallaxSection(
    /// Value of the `data-section` marker
    section: &'static str,
    /// Absolute URL of the background image
    image: &'static str,
    /// Extra classes for the inner container
    #[prop(default = "")]
    container_class: &'static str,
    children: Children,
) -> impl IntoView {
    let background = format!("background-image: url('{image}')");
    let container = if container_class.is_empty() {
        "container".to_string()
    } else {
        format!("container {container_class}")
    };

    view! {
        <section class=PARALLAX_SECTION_CLASS data-section=section style=background>
            <div class="overlay"></div>
            <div class="hero-content">
                <div class=container>
                    {children()}
                </div>
            </div>
        </section>
    }
}
