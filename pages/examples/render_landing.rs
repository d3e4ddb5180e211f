//! Render the landing page to a static HTML file.
//!
//! Run with: `cargo run -p parallax-pages --example render_landing`

use parallax_pages::{ExternalAssets, render_landing};

fn main() {
    let html = render_landing(None, &ExternalAssets::default());

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write landing page");

    println!("Landing page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
