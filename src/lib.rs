//! MedVance site behavior layer
//!
//! Page transitions, decorative canvas animations and UI controllers for the
//! static MedVance marketing site, compiled to WebAssembly:
//! - Particle field, DNA helix and radar map renderers
//! - Navbar, hamburger menu, FAQ accordion, product filter and modal
//! - Contact form validation, counters, typewriter, tooltips, scroll progress
//!
//! The `core` module is platform-agnostic and unit-tested on the host; the
//! browser bindings live behind the `wasm` feature on `wasm32` targets.

pub mod core;
pub mod theme;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use web::Site;
