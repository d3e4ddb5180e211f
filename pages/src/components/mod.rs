//! Leptos components making up the site.
//!
//! # Component Hierarchy
//!
//! ```text
//! LayoutShell (title slot + content slot)
//! └── LandingPage
//!     ├── Hero        (ParallaxSection)
//!     ├── About
//!     ├── Banner      (ParallaxSection)
//!     ├── Services
//!     │   └── ServiceCard x3
//!     ├── Contact
//!     │   └── FieldControl x3
//!     └── Footer
//! ```
//!
//! Components are normally rendered through [`crate::render_landing`] or
//! [`crate::render_page`], but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use parallax_pages::components::{Footer, Hero, LayoutShell};
//!
//! view! {
//!     <LayoutShell title=Some("Teaser".to_string())>
//!         <Hero />
//!         <Footer />
//!     </LayoutShell>
//! }
//! ```

mod about;
mod banner;
mod contact;
mod footer;
mod hero;
mod icons;
mod landing;
mod layout;
mod not_found;
mod parallax;
mod services;

pub use about::About;
pub use banner::Banner;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use landing::{LANDING_SECTIONS, LandingPage};
pub use layout::LayoutShell;
pub use not_found::NotFoundPage;
pub use parallax::ParallaxSection;
pub use services::Services;
