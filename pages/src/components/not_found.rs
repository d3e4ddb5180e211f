use super::Footer;
use crate::content::{NOT_FOUND_BACK, NOT_FOUND_HEADING, NOT_FOUND_LEAD};
use leptos::prelude::*;

/// Body of the 404 page served for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="content-section" data-section="not-found">
            <div class="container text-center">
                <h1 class="display-1 fw-bold mb-4">{NOT_FOUND_HEADING}</h1>
                <p class="lead mb-4">{NOT_FOUND_LEAD}</p>
                <a href="/" class="btn btn-custom">{NOT_FOUND_BACK}</a>
            </div>
        </section>
        <Footer />
    }
}
