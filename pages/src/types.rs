//! Data structures for page content and external resources.
//!
//! Everything here is static: the landing page has no runtime data. The
//! only thing a caller may want to change is where the browser fetches the
//! CSS framework, its JS bundle and the web font from.

use serde::{Deserialize, Serialize};

/// Bootstrap 5.3.0 stylesheet on jsDelivr.
pub const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";

/// Bootstrap 5.3.0 JS bundle (includes Popper) on jsDelivr.
pub const BOOTSTRAP_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Montserrat (300/400/600/700) from Google Fonts.
pub const FONT_CSS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Montserrat:wght@300;400;600;700&display=swap";

/// Absolute URLs of the resources the browser fetches on page load.
///
/// `Default` points at the public CDNs. Every field is optional when
/// deserializing, so a partial JSON file can override just the URLs that
/// are self-hosted:
///
/// ```rust
/// use parallax_pages::ExternalAssets;
///
/// let assets: ExternalAssets =
///     serde_json::from_str(r#"{ "font_css": "/static/montserrat.css" }"#).unwrap();
///
/// assert_eq!(assets.font_css, "/static/montserrat.css");
/// assert_eq!(assets.bootstrap_css, parallax_pages::types::BOOTSTRAP_CSS_URL);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAssets {
    /// CSS framework stylesheet
    pub bootstrap_css: String,
    /// CSS framework JS bundle, loaded at the end of `<body>`
    pub bootstrap_js: String,
    /// Web font stylesheet
    pub font_css: String,
}

impl Default for ExternalAssets {
    fn default() -> Self {
        Self {
            bootstrap_css: BOOTSTRAP_CSS_URL.into(),
            bootstrap_js: BOOTSTRAP_JS_URL.into(),
            font_css: FONT_CSS_URL.into(),
        }
    }
}

/// One card of the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// SVG path data for the card icon (256x256 viewBox)
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence card body
    pub description: &'static str,
}

/// Input type of a contact form control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="text">`
    Text,
    /// `<input type="email">`
    Email,
    /// Multi-line `<textarea>` with the given row count
    TextArea {
        /// Visible text lines
        rows: u8,
    },
}

/// One required control of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    /// Form field name (`name` attribute)
    pub name: &'static str,
    /// Control type
    pub kind: FieldKind,
    /// Placeholder text shown in the empty control
    pub placeholder: &'static str,
}

impl ContactField {
    /// Bootstrap grid column class: short fields share a row, the
    /// textarea spans it.
    pub fn column_class(&self) -> &'static str {
        match self.kind {
            FieldKind::TextArea { .. } => "col-12",
            FieldKind::Text | FieldKind::Email => "col-md-6",
        }
    }
}
