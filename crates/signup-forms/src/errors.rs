//! Validation reports and workspace errors

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Errors raised while building or querying a schema.
///
/// Input that fails validation is never reported through this type; it ends up
/// in [`ValidationErrors`] / [`ErrorMap`] instead.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Duplicate field: {0}")]
	DuplicateField(String),
	#[error("Invalid pattern for {field}: {source}")]
	InvalidPattern {
		field: String,
		#[source]
		source: regex::Error,
	},
	#[error("Rule `{rule}` cannot be applied to {kind} field {field}")]
	IncompatibleRule {
		field: String,
		rule: &'static str,
		kind: &'static str,
	},
	#[error("Field {field} refers to unknown field {other}")]
	UnknownReference { field: String, other: String },
	#[error("Unknown form variant: {0}")]
	UnknownVariant(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Full report of one validation pass.
///
/// Keeps every violated rule's message per field, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
	fields: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self {
			fields: IndexMap::new(),
		}
	}

	/// Append a message to a field's report.
	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.fields
			.entry(field.into())
			.or_default()
			.push(message.into());
	}

	/// Append several messages to a field's report. Empty input is ignored.
	pub fn extend_field(&mut self, field: &str, messages: Vec<String>) {
		if messages.is_empty() {
			return;
		}
		self.fields
			.entry(field.to_string())
			.or_default()
			.extend(messages);
	}

	pub fn get(&self, field: &str) -> Option<&[String]> {
		self.fields.get(field).map(Vec::as_slice)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Number of failing fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} field(s) failed validation", self.fields.len())
	}
}

impl std::error::Error for ValidationErrors {}

/// One message per failing field.
///
/// Built from a [`ValidationErrors`] report; when a field failed several rules
/// the message of the last failing rule is kept.
///
/// # Examples
///
/// ```
/// use signup_forms::{ErrorMap, ValidationErrors};
///
/// let mut report = ValidationErrors::new();
/// report.add("phoneNumber", "Phone number must be 10 digits");
/// report.add("phoneNumber", "Phone number is required");
///
/// let errors = ErrorMap::from(&report);
/// assert_eq!(errors.get("phoneNumber"), Some("Phone number is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
	fields: IndexMap<String, String>,
}

impl ErrorMap {
	pub fn new() -> Self {
		Self {
			fields: IndexMap::new(),
		}
	}

	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.fields.insert(field.into(), message.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.fields.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl From<&ValidationErrors> for ErrorMap {
	fn from(report: &ValidationErrors) -> Self {
		let fields = report
			.fields
			.iter()
			.filter_map(|(field, messages)| {
				messages
					.last()
					.map(|message| (field.clone(), message.clone()))
			})
			.collect();
		Self { fields }
	}
}

impl From<ValidationErrors> for ErrorMap {
	fn from(report: ValidationErrors) -> Self {
		Self::from(&report)
	}
}
