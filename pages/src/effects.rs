//! Scroll-driven parallax effect for decorative sections.
//!
//! On every `scroll` event the browser moves each element carrying
//! [`PARALLAX_SECTION_CLASS`] down by `pageYOffset * PARALLAX_SPEED` pixels.
//! The handler keeps no state: each call overwrites the previous
//! transform, so calls never accumulate.
//!
//! The inline script emitted by the layout shell and the WASM handler in
//! `parallax-wasm` are both derived from the constants below.

/// Marker class of a decorative (full-viewport, fixed background) section.
pub const PARALLAX_SECTION_CLASS: &str = "parallax-section";

/// Fraction of the scroll offset applied as vertical translation.
pub const PARALLAX_SPEED: f64 = 0.5;

/// CSS selector matching every decorative section.
pub fn parallax_selector() -> String {
    format!(".{PARALLAX_SECTION_CLASS}")
}

/// Vertical translation in pixels for a scroll offset.
pub fn parallax_offset(scrolled: f64) -> f64 {
    scrolled * PARALLAX_SPEED
}

/// CSS `transform` value for a scroll offset.
///
/// For offsets between `1e-6` and `1e21` in magnitude (and zero) the
/// number prints the same as a JS template literal would, so server-side
/// expectations match what the browser writes. Outside that range JS
/// switches to exponent notation and the strings differ.
///
/// ```rust
/// use parallax_pages::effects::parallax_transform;
///
/// assert_eq!(parallax_transform(100.0), "translateY(50px)");
/// assert_eq!(parallax_transform(33.0), "translateY(16.5px)");
/// ```
pub fn parallax_transform(scrolled: f64) -> String {
    let offset = parallax_offset(scrolled);
    // -0 prints as "0" in JS
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({offset}px)")
}

/// Inline `<script>` body registering the scroll listener.
pub fn parallax_script() -> String {
    format!(
        r#"
(() => {{
  const speed = {speed};
  window.addEventListener('scroll', () => {{
      const scrolled = window.pageYOffset;
      document.querySelectorAll('{selector}').forEach(element => {{
          element.style.transform = `translateY(${{scrolled * speed}}px)`;
      }});
  }});
}})();
"#,
        speed = PARALLAX_SPEED,
        selector = parallax_selector(),
    )
}
