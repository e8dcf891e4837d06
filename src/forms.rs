//! Form values, schemas and validation
//!
//! See [`signup_forms`] for the rule semantics.

pub use signup_forms::*;
