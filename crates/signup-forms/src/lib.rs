//! Form values, declarative schemas and validation for the signup form
//!
//! This crate provides:
//! - [`FormValues`]: the raw input of a form, one string per scalar field and
//!   a set per multi-select field
//! - [`Schema`] / [`FieldSchema`]: per-field rules (required, pattern, email,
//!   numeric range, equality to another field, minimum selection)
//! - [`Validator`]: evaluates every rule and reports all failures
//! - [`ErrorMap`]: one message per failing field, the shape a form displays
//! - [`signup`]: the signup form's fields and its two schema presets

pub mod errors;
pub mod rules;
pub mod schema;
pub mod signup;
pub mod validator;
pub mod values;

pub use errors::{ErrorMap, FormError, FormResult, ValidationErrors};
pub use rules::{FieldKind, Rule};
pub use schema::{FieldSchema, Schema, SchemaBuilder};
pub use signup::{SchemaWording, signup_schema};
pub use validator::{Validator, evaluate_field};
pub use values::{FieldValue, FormValues};
