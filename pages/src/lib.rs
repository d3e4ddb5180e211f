//! # parallax-pages
//!
//! Leptos SSR renderer for the Parallax Landing page.
//!
//! The site is a layout shell plus one content page. The shell owns the
//! document skeleton, the external CSS framework and font, the inline
//! stylesheet and the scroll-driven parallax effect; the landing page fills
//! the shell's content slot with six static sections.
//!
//! ## Quick Start
//!
//! ```rust
//! use parallax_pages::{render_landing, ExternalAssets};
//!
//! let html = render_landing(None, &ExternalAssets::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Parallax Landing"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - external asset URLs and content records
//! - [`content`] - the static copy and imagery
//! - [`components`] - Leptos components (shell, sections)
//! - [`styles`] - inline CSS
//! - [`effects`] - the parallax scroll effect
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html`; no reactive runtime
//! or hydration is involved.

#![recursion_limit = "256"]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod effects;
pub mod styles;
pub mod types;

pub use content::DEFAULT_TITLE;
pub use types::ExternalAssets;

use components::{LandingPage, LayoutShell, NotFoundPage};
use content::NOT_FOUND_TITLE;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render arbitrary content through the layout shell.
///
/// `title` fills the title slot (`None` keeps [`DEFAULT_TITLE`]); it is
/// HTML-escaped. `content` fills the content slot as rendered.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use leptos::prelude::*;
/// use parallax_pages::{render_page, ExternalAssets};
///
/// let html = render_page(Some("Preview"), &ExternalAssets::default(), || {
///     view! { <p>"Coming soon"</p> }
/// });
///
/// assert!(html.contains("<title>Preview</title>"));
/// assert!(html.contains("Coming soon"));
/// ```
pub fn render_page<F, V>(title: Option<&str>, assets: &ExternalAssets, content: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let title = title.unwrap_or(DEFAULT_TITLE).to_owned();
    let assets = assets.clone();

    let doc = view! {
        <LayoutShell title=title assets=assets>
            {content()}
        </LayoutShell>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the landing page.
pub fn render_landing(title: Option<&str>, assets: &ExternalAssets) -> String {
    render_page(title, assets, || view! { <LandingPage /> })
}

/// Render the 404 page through the same shell.
pub fn render_not_found(assets: &ExternalAssets) -> String {
    render_page(Some(NOT_FOUND_TITLE), assets, || view! { <NotFoundPage /> })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_landing(None, &ExternalAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ru\""));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn default_title_when_not_overridden() {
        let html = render_landing(None, &ExternalAssets::default());
        assert!(html.contains("<title>Parallax Landing</title>"));
    }

    #[test]
    fn title_override_replaces_default() {
        let html = render_landing(Some("Весенняя акция"), &ExternalAssets::default());

        assert!(html.contains("<title>Весенняя акция</title>"));
        assert!(!html.contains("<title>Parallax Landing</title>"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_landing(Some("<script>alert(1)</script>"), &ExternalAssets::default());

        assert!(!html.contains("<title><script>"));
        assert!(html.contains("&lt;script&gt;") || html.contains("&lt;script>"));
    }

    #[test]
    fn custom_assets_are_linked() {
        let assets = ExternalAssets {
            bootstrap_css: "/static/bootstrap.css".into(),
            bootstrap_js: "/static/bootstrap.js".into(),
            font_css: "/static/font.css".into(),
        };
        let html = render_landing(None, &assets);

        assert!(html.contains("/static/bootstrap.css"));
        assert!(html.contains("/static/bootstrap.js"));
        assert!(html.contains("/static/font.css"));
        assert!(!html.contains("cdn.jsdelivr.net"));
    }

    #[test]
    fn shell_embeds_styles_and_scroll_script() {
        let html = render_page(None, &ExternalAssets::default(), || view! { <div>"x"</div> });

        assert!(html.contains("--secondary-color: #3498db"));
        assert!(html.contains("addEventListener('scroll'"));
    }

    #[test]
    fn not_found_page_uses_shell() {
        let html = render_not_found(&ExternalAssets::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("404"));
        assert!(html.contains("Страница не найдена"));
        assert!(html.contains("addEventListener('scroll'"));
    }
}
