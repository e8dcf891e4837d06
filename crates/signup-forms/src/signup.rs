//! The signup form: field names, choices and schema presets
//!
//! Two wordings exist. `Standard` is used by the inline and headless forms,
//! `Toast` by the toast form, which also checks the password's required rule
//! before its character-class rules.

use crate::errors::FormResult;
use crate::schema::{FieldSchema, Schema};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const INTERESTS: &str = "interests";
pub const BIRTH_DATE: &str = "birthDate";

/// Every signup field, in display order.
pub const FIELD_NAMES: [&str; 10] = [
	FIRST_NAME,
	LAST_NAME,
	EMAIL,
	PHONE_NUMBER,
	PASSWORD,
	CONFIRM_PASSWORD,
	AGE,
	GENDER,
	INTERESTS,
	BIRTH_DATE,
];

/// Fields whose values never appear in logs.
pub const SENSITIVE_FIELDS: &[&str] = &[PASSWORD, CONFIRM_PASSWORD];

/// `(value, label)` pairs for the gender select.
pub const GENDER_CHOICES: &[(&str, &str)] =
	&[("Male", "Male"), ("Female", "Female"), ("Others", "Others")];

/// `(value, label)` pairs for the interests checkbox group.
pub const INTEREST_CHOICES: &[(&str, &str)] = &[
	("coding", "Coding"),
	("reading", "Reading"),
	("sports", "Sports"),
];

/// Inclusive age bounds.
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 80.0;

// Exactly ten ASCII digits.
static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("PHONE_REGEX: invalid regex pattern"));

static LOWERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-z]").expect("LOWERCASE_REGEX: invalid regex pattern"));

static UPPERCASE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[A-Z]").expect("UPPERCASE_REGEX: invalid regex pattern"));

static DIGIT_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[0-9]").expect("DIGIT_REGEX: invalid regex pattern"));

/// Message set used by a schema preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaWording {
	Standard,
	Toast,
}

/// Build the signup schema for a wording.
///
/// # Examples
///
/// ```
/// use signup_forms::{FormValues, Validator};
/// use signup_forms::signup::{SchemaWording, signup_schema};
///
/// let schema = signup_schema(SchemaWording::Standard).unwrap();
/// let errors = schema.errors(&FormValues::signup_empty());
///
/// assert_eq!(errors.get("firstName"), Some("FirstName is required"));
/// assert_eq!(errors.get("age"), Some("Age is required"));
/// assert_eq!(errors.get("interests"), Some("Select at least one interest"));
/// ```
pub fn signup_schema(wording: SchemaWording) -> FormResult<Schema> {
	match wording {
		SchemaWording::Standard => standard_schema(),
		SchemaWording::Toast => toast_schema(),
	}
}

fn standard_schema() -> FormResult<Schema> {
	Schema::builder()
		.field(FieldSchema::text(FIRST_NAME).required("FirstName is required"))
		.field(FieldSchema::text(LAST_NAME).required("LastName is required"))
		.field(
			FieldSchema::text(EMAIL)
				.email("Invalid email format")
				.required("Email is required"),
		)
		.field(
			FieldSchema::text(PHONE_NUMBER)
				.matches_regex(PHONE_REGEX.clone(), "Phone number must be 10 digits")
				.required("Phone number is required"),
		)
		.field(
			FieldSchema::text(PASSWORD)
				.matches_regex(LOWERCASE_REGEX.clone(), "Must contain lowercase letter")
				.matches_regex(UPPERCASE_REGEX.clone(), "Must contain uppercase letter")
				.matches_regex(DIGIT_REGEX.clone(), "Must contain a number")
				.required("Password is required"),
		)
		.field(
			FieldSchema::text(CONFIRM_PASSWORD)
				.equals_field(PASSWORD, "Passwords must match")
				.required("Confirm password is required"),
		)
		.field(
			FieldSchema::number(AGE, "Age must be a number")
				.required("Age is required")
				.min(MIN_AGE, "Minimum age is 18")
				.max(MAX_AGE, "Maximum age is 80"),
		)
		.field(FieldSchema::text(GENDER).required("Gender is required"))
		.field(
			FieldSchema::choices(INTERESTS)
				.min_items(1, "Select at least one interest")
				.required("Interest is required"),
		)
		.field(FieldSchema::text(BIRTH_DATE).required("Birthdate is required"))
		.build()
}

fn toast_schema() -> FormResult<Schema> {
	Schema::builder()
		.field(FieldSchema::text(FIRST_NAME).required("FirstName is required"))
		.field(FieldSchema::text(LAST_NAME).required("Last Name is required"))
		.field(
			FieldSchema::text(EMAIL)
				.email("Invalid email format")
				.required("Email is required"),
		)
		.field(
			FieldSchema::text(PHONE_NUMBER)
				.matches_regex(PHONE_REGEX.clone(), "Phone Number must be 10 digits")
				.required("Phone number is required"),
		)
		.field(
			FieldSchema::text(PASSWORD)
				.required("Password is required")
				.matches_regex(
					DIGIT_REGEX.clone(),
					"Password must contain at least one number",
				)
				.matches_regex(
					LOWERCASE_REGEX.clone(),
					"Password must contain one lowercase letter",
				)
				.matches_regex(
					UPPERCASE_REGEX.clone(),
					"Password must contain one uppercase letter",
				),
		)
		.field(
			FieldSchema::text(CONFIRM_PASSWORD)
				.equals_field(PASSWORD, "Passwords must match")
				.required("Confirm password is required"),
		)
		.field(
			FieldSchema::number(AGE, "Age must be a number")
				.required("Age is required")
				.min(MIN_AGE, "Age must be above 18")
				.max(MAX_AGE, "Age must be below 80"),
		)
		.field(FieldSchema::text(GENDER).required("Gender is required"))
		.field(
			FieldSchema::choices(INTERESTS)
				.min_items(1, "Select one interest")
				.required("Interest is required"),
		)
		.field(FieldSchema::text(BIRTH_DATE).required("Birthdate is required"))
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validator::Validator;
	use crate::values::FormValues;
	use rstest::rstest;

	#[rstest]
	#[case(SchemaWording::Standard)]
	#[case(SchemaWording::Toast)]
	fn test_every_field_is_required(#[case] wording: SchemaWording) {
		let schema = signup_schema(wording).unwrap();

		let required: Vec<_> = schema.required_fields().collect();

		assert_eq!(required, FIELD_NAMES.to_vec());
	}

	#[rstest]
	fn test_toast_password_keeps_last_failing_rule() {
		// Arrange
		let schema = signup_schema(SchemaWording::Toast).unwrap();
		let mut values = FormValues::signup_empty();
		values.set_text(PASSWORD, "abc");

		// Act
		let errors = schema.errors(&values);

		// Assert
		assert_eq!(
			errors.get(PASSWORD),
			Some("Password must contain one uppercase letter")
		);
	}

	#[rstest]
	fn test_standard_password_missing_digit() {
		let schema = signup_schema(SchemaWording::Standard).unwrap();
		let mut values = FormValues::signup_empty();
		values.set_text(PASSWORD, "Abcdefgh");

		let errors = schema.errors(&values);

		assert_eq!(errors.get(PASSWORD), Some("Must contain a number"));
	}

	#[rstest]
	fn test_wording_serde_names() {
		assert_eq!(
			serde_json::to_string(&SchemaWording::Toast).unwrap(),
			"\"toast\""
		);
	}
}
