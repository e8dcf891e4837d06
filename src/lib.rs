//! # Signup
//!
//! Client-side validation for a signup form, with three presentations of the
//! same form.
//!
//! ## Feature Flags
//!
//! - `forms` - form values, declarative schemas, the validator and error maps
//! - `conf` - settings: variant selection and toast options
//! - `pages` - the form controller, notifications and HTML rendering
//! - `full` (default) - everything above
//!
//! ## Quick Example
//!
//! ```
//! use signup::{FormController, FormSettings, FormVariant, SubmitOutcome};
//!
//! let mut form = FormController::for_variant(FormVariant::Toast, &FormSettings::default()).unwrap();
//! form.handle_change("phoneNumber", "12345");
//!
//! match form.submit() {
//!     SubmitOutcome::Accepted { .. } => unreachable!(),
//!     SubmitOutcome::Rejected { errors } => {
//!         assert_eq!(errors.get("phoneNumber"), Some("Phone Number must be 10 digits"));
//!     }
//! }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "forms")]
pub use signup_forms::{
	ErrorMap, FieldSchema, FieldValue, FormError, FormResult, FormValues, Schema, SchemaWording,
	ValidationErrors, Validator, signup_schema,
};

#[cfg(feature = "conf")]
pub use signup_conf::{FormSettings, FormVariant, SettingsError, ToastPosition, ToastSettings};

#[cfg(feature = "pages")]
pub use signup_pages::{FormController, FormPhase, Signal, SubmitOutcome};

/// Fields whose values are redacted before a submission is logged
#[cfg(feature = "forms")]
pub use signup_forms::signup::SENSITIVE_FIELDS;
