//! Platform-agnostic core - shared between the browser build and the simulator

pub mod accordion;
pub mod config;
pub mod counter;
pub mod form;
pub mod helix;
pub mod nav;
pub mod particles;
pub mod products;
pub mod radar;
pub mod scene;
pub mod tooltip;
pub mod tween;
pub mod typewriter;

pub use accordion::{Accordion, AccordionChange};
pub use config::SiteConfig;
pub use counter::{group_thousands, CounterAnimation, CounterFrame};
pub use form::{ContactForm, FieldError, FieldKind, FormPhase, SubmitOutcome};
pub use helix::{Helix, HelixRow};
pub use nav::MenuState;
pub use particles::{connector_opacity, Link, Particle, ParticleField};
pub use products::{CategoryFilter, CloseTrigger, ProductDetails, ProductFilter, ProductModal};
pub use radar::{PulseRing, Radar};
pub use scene::{CountingPainter, Painter, Scene};
pub use tween::{ease_out_cubic, Tween};
pub use typewriter::{Typewriter, TypewriterStep};
