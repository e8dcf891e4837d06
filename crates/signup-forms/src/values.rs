//! Raw form input bound to a form
//!
//! Every scalar input is kept as the string the input produced (age included),
//! and multi-select groups are kept as an insertion-ordered set.

use crate::signup;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Replacement text for sensitive values in logged submissions.
pub const REDACTED: &str = "[REDACTED]";

/// A single field's current input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	/// Scalar input (text, email, number, select, date)
	Text(String),
	/// Multi-select input (checkbox group)
	Choices(IndexSet<String>),
}

impl FieldValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			FieldValue::Choices(_) => None,
		}
	}

	pub fn as_choices(&self) -> Option<&IndexSet<String>> {
		match self {
			FieldValue::Text(_) => None,
			FieldValue::Choices(set) => Some(set),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

/// Mapping from field name to its current input
///
/// # Examples
///
/// ```
/// use signup_forms::FormValues;
///
/// let mut values = FormValues::new();
/// values.set_text("firstName", "Ann");
/// values.toggle_choice("interests", "coding", true);
///
/// assert_eq!(values.text("firstName"), Some("Ann"));
/// assert!(values.choices("interests").unwrap().contains("coding"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
	fields: IndexMap<String, FieldValue>,
}

impl FormValues {
	/// Create an empty bag with no fields at all.
	pub fn new() -> Self {
		Self {
			fields: IndexMap::new(),
		}
	}

	/// The initial state of the signup form: every field present and empty.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FormValues;
	///
	/// let values = FormValues::signup_empty();
	/// assert_eq!(values.text("email"), Some(""));
	/// assert!(values.choices("interests").unwrap().is_empty());
	/// ```
	pub fn signup_empty() -> Self {
		let mut values = Self::new();
		for name in signup::FIELD_NAMES {
			if name == signup::INTERESTS {
				values.insert(name, FieldValue::Choices(IndexSet::new()));
			} else {
				values.set_text(name, "");
			}
		}
		values
	}

	/// Merge a single changed scalar field, leaving every other field untouched.
	pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
		self.fields
			.insert(name.to_string(), FieldValue::Text(value.into()));
	}

	/// Checkbox semantics for a multi-select field.
	///
	/// `checked` adds `choice` when it is absent, unchecked removes it. A scalar
	/// value stored under `name` is replaced by a fresh set.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FormValues;
	///
	/// let mut values = FormValues::new();
	/// values.toggle_choice("interests", "coding", true);
	/// values.toggle_choice("interests", "coding", true);
	/// values.toggle_choice("interests", "sports", true);
	/// values.toggle_choice("interests", "coding", false);
	///
	/// let interests: Vec<_> = values.choices("interests").unwrap().iter().collect();
	/// assert_eq!(interests, vec!["sports"]);
	/// ```
	pub fn toggle_choice(&mut self, name: &str, choice: &str, checked: bool) {
		let entry = self
			.fields
			.entry(name.to_string())
			.or_insert_with(|| FieldValue::Choices(IndexSet::new()));

		if let FieldValue::Text(_) = entry {
			*entry = FieldValue::Choices(IndexSet::new());
		}

		if let FieldValue::Choices(set) = entry {
			if checked {
				set.insert(choice.to_string());
			} else {
				set.shift_remove(choice);
			}
		}
	}

	/// Store any value under `name`.
	pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
		self.fields.insert(name.into(), value);
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.fields.get(name)
	}

	pub fn text(&self, name: &str) -> Option<&str> {
		self.fields.get(name).and_then(FieldValue::as_text)
	}

	pub fn choices(&self, name: &str) -> Option<&IndexSet<String>> {
		self.fields.get(name).and_then(FieldValue::as_choices)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Copy with the named fields replaced by [`REDACTED`].
	///
	/// Fields that are absent or empty stay as they are, so a log line still
	/// shows that nothing was typed.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormValues, values::REDACTED};
	///
	/// let mut values = FormValues::new();
	/// values.set_text("password", "Abc12345");
	/// values.set_text("email", "a@b.com");
	///
	/// let redacted = values.redacted(&["password"]);
	/// assert_eq!(redacted.text("password"), Some(REDACTED));
	/// assert_eq!(redacted.text("email"), Some("a@b.com"));
	/// ```
	pub fn redacted(&self, sensitive: &[&str]) -> Self {
		let mut copy = self.clone();
		for name in sensitive {
			if let Some(FieldValue::Text(value)) = copy.fields.get_mut(*name)
				&& !value.is_empty()
			{
				*value = REDACTED.to_string();
			}
		}
		copy
	}
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
	K: Into<String>,
	V: Into<FieldValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_set_text_merges_single_field() {
		// Arrange
		let mut values = FormValues::signup_empty();

		// Act
		values.set_text("firstName", "Ann");

		// Assert
		assert_eq!(values.text("firstName"), Some("Ann"));
		assert_eq!(values.text("lastName"), Some(""));
		assert_eq!(values.len(), signup::FIELD_NAMES.len());
	}

	#[rstest]
	fn test_toggle_choice_replaces_scalar() {
		// Arrange
		let mut values = FormValues::new();
		values.set_text("interests", "coding");

		// Act
		values.toggle_choice("interests", "reading", true);

		// Assert
		let set = values.choices("interests").unwrap();
		assert_eq!(set.len(), 1);
		assert!(set.contains("reading"));
	}

	#[rstest]
	fn test_signup_empty_keeps_field_order() {
		let values = FormValues::signup_empty();

		let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
		assert_eq!(names, signup::FIELD_NAMES.to_vec());
		assert!(values.choices(signup::INTERESTS).unwrap().is_empty());
	}

	#[rstest]
	fn test_unchecking_missing_choice_is_noop() {
		let mut values = FormValues::new();
		values.toggle_choice("interests", "coding", false);

		assert!(values.choices("interests").unwrap().is_empty());
	}

	#[rstest]
	fn test_serializes_as_plain_json_object() {
		// Arrange
		let mut values = FormValues::new();
		values.set_text("age", "30");
		values.toggle_choice("interests", "coding", true);

		// Act
		let value = serde_json::to_value(&values).unwrap();

		// Assert
		assert_eq!(value, json!({ "age": "30", "interests": ["coding"] }));
	}

	#[rstest]
	fn test_deserializes_text_and_choices() {
		let values: FormValues =
			serde_json::from_value(json!({ "gender": "Female", "interests": ["sports"] }))
				.unwrap();

		assert_eq!(values.text("gender"), Some("Female"));
		assert!(values.choices("interests").unwrap().contains("sports"));
	}

	#[rstest]
	fn test_redacted_keeps_empty_password_visible() {
		let values = FormValues::signup_empty();

		let redacted = values.redacted(signup::SENSITIVE_FIELDS);

		assert_eq!(redacted.text("password"), Some(""));
	}
}
