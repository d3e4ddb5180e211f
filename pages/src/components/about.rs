use crate::content::{ABOUT_HEADING, ABOUT_IMAGE, ABOUT_IMAGE_ALT, ABOUT_LEAD, ABOUT_POINTS};
use leptos::prelude::*;

/// Company description: copy with a checklist on the left, photo on the right.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="content-section" data-section="about">
            <div class="container">
                <div class="row align-items-center">
                    <div class="col-lg-6">
                        <h2 class="display-5 fw-bold mb-4">{ABOUT_HEADING}</h2>
                        <p class="lead mb-4">{ABOUT_LEAD}</p>
                        <ul class="list-unstyled">
                            {ABOUT_POINTS.iter().map(|point| view! {
                                <li class="mb-2">{format!("✓ {point}")}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="col-lg-6">
                        <img src=ABOUT_IMAGE alt=ABOUT_IMAGE_ALT class="img-fluid rounded" />
                    </div>
                </div>
            </div>
        </section>
    }
}
