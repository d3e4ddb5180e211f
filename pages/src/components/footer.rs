use crate::content::FOOTER_TEXT;
use leptos::prelude::*;

/// Dark page footer with the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark text-white py-4" data-section="footer">
            <div class="container text-center">
                <p class="mb-0">{FOOTER_TEXT}</p>
            </div>
        </footer>
    }
}
