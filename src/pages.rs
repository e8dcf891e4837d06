//! Form controller, notifications and rendering
//!
//! ## Example
//!
//! ```
//! use signup::pages::{FormController, Notifier};
//! use signup::conf::{FormSettings, FormVariant};
//! use std::time::Instant;
//!
//! let form = FormController::for_variant(FormVariant::Headless, &FormSettings::default()).unwrap();
//! let html = form.render(Instant::now());
//!
//! assert!(!html.contains("<input"));
//! assert!(form.notifier().render(Instant::now()).is_empty());
//! ```

pub use signup_pages::*;
