//! Layout shell - the complete HTML document around a page.
//!
//! Owns everything shared between pages: head metadata, external
//! stylesheets, inline CSS, the framework JS bundle and the parallax scroll
//! listener. Pages only supply a title and their body content.

use crate::content::{DEFAULT_TITLE, LANG};
use crate::effects::parallax_script;
use crate::styles::LANDING_CSS;
use crate::types::ExternalAssets;
use leptos::prelude::*;

/// The complete HTML document with a title slot and a content slot.
#[component]
pub fn LayoutShell(
    /// Document title; [`DEFAULT_TITLE`] when omitted
    #[prop(into, default = DEFAULT_TITLE.to_string())]
    title: String,
    /// Where the browser loads the CSS framework and font from
    #[prop(default = ExternalAssets::default())]
    assets: ExternalAssets,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang=LANG>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <link href=assets.bootstrap_css rel="stylesheet" />
                <link href=assets.font_css rel="stylesheet" />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                {children()}

                <script src=assets.bootstrap_js></script>
                <script>{parallax_script()}</script>
            </body>
        </html>
    }
}
