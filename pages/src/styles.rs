//! CSS for the landing page.
//!
//! Bootstrap provides the grid, cards, forms and utility classes; this
//! stylesheet only adds the brand palette, the full-viewport decorative
//! sections and the call-to-action button.
//!
//! # Customization
//!
//! ```rust
//! use parallax_pages::styles::LANDING_CSS;
//!
//! let my_css = ".btn-custom { border-radius: 4px; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```

/// Complete inline CSS embedded by the layout shell.
pub const LANDING_CSS: &str = r#"
:root {
    --primary-color: #2c3e50;
    --secondary-color: #3498db;
    --accent-color: #e74c3c;
}

body {
    font-family: 'Montserrat', sans-serif;
    overflow-x: hidden;
}

.parallax-section {
    position: relative;
    height: 100vh;
    background-attachment: fixed;
    background-position: center;
    background-repeat: no-repeat;
    background-size: cover;
    display: flex;
    align-items: center;
    justify-content: center;
}

.content-section {
    padding: 100px 0;
    background: white;
}

.hero-content {
    text-align: center;
    color: white;
    z-index: 2;
}

.overlay {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: rgba(0,0,0,0.5);
}

.btn-custom {
    background: var(--secondary-color);
    color: white;
    padding: 12px 30px;
    border-radius: 30px;
    text-decoration: none;
    transition: all 0.3s ease;
}

.btn-custom:hover {
    background: #2980b9;
    transform: translateY(-2px);
}

.service-icon {
    color: var(--secondary-color);
}
"#;
