//! Declarative form schemas
//!
//! A [`Schema`] is an ordered list of [`FieldSchema`]s, each a field name, a
//! [`FieldKind`] and the rules to run against it in declaration order.
//!
//! ## Example
//!
//! ```
//! use signup_forms::{FieldSchema, FormValues, Schema, Validator};
//!
//! let schema = Schema::builder()
//!     .field(FieldSchema::text("email").email("Invalid email format").required("Email is required"))
//!     .field(FieldSchema::number("age", "Age must be a number").required("Age is required").min(18.0, "Too young"))
//!     .build()
//!     .unwrap();
//!
//! let mut values = FormValues::new();
//! values.set_text("email", "a@b.com");
//! values.set_text("age", "17");
//!
//! let errors = schema.errors(&values);
//! assert_eq!(errors.get("age"), Some("Too young"));
//! assert!(!errors.contains("email"));
//! ```

use crate::errors::{FormError, FormResult};
use crate::rules::{FieldKind, Rule};
use regex::Regex;
use std::collections::HashSet;

/// Rules for a single field
#[derive(Debug, Clone)]
pub struct FieldSchema {
	pub name: String,
	pub kind: FieldKind,
	pub rules: Vec<Rule>,
}

impl FieldSchema {
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			kind,
			rules: Vec::new(),
		}
	}

	/// A plain text field
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Text)
	}

	/// A text input read as a number
	pub fn number(name: impl Into<String>, type_message: impl Into<String>) -> Self {
		Self::new(
			name,
			FieldKind::Number {
				type_message: type_message.into(),
			},
		)
	}

	/// A multi-select field
	pub fn choices(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Choices)
	}

	pub fn rule(mut self, rule: Rule) -> Self {
		self.rules.push(rule);
		self
	}

	pub fn required(self, message: impl Into<String>) -> Self {
		self.rule(Rule::Required {
			message: message.into(),
		})
	}

	/// Require a match of an already compiled pattern. Empty text is matched too.
	pub fn matches_regex(self, pattern: Regex, message: impl Into<String>) -> Self {
		self.rule(Rule::Matches {
			pattern,
			message: message.into(),
			exclude_empty: false,
		})
	}

	/// Compile `pattern` and require a match.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FieldSchema;
	///
	/// let field = FieldSchema::text("phoneNumber")
	///     .matches("^[0-9]{10}$", "Phone number must be 10 digits")
	///     .unwrap();
	/// assert_eq!(field.rules.len(), 1);
	///
	/// assert!(FieldSchema::text("bad").matches("(", "never").is_err());
	/// ```
	pub fn matches(self, pattern: &str, message: impl Into<String>) -> FormResult<Self> {
		let pattern = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
			field: self.name.clone(),
			source,
		})?;
		Ok(self.matches_regex(pattern, message))
	}

	pub fn email(self, message: impl Into<String>) -> Self {
		self.rule(Rule::Email {
			message: message.into(),
		})
	}

	pub fn min(self, bound: f64, message: impl Into<String>) -> Self {
		self.rule(Rule::Min {
			bound,
			message: message.into(),
		})
	}

	pub fn max(self, bound: f64, message: impl Into<String>) -> Self {
		self.rule(Rule::Max {
			bound,
			message: message.into(),
		})
	}

	pub fn equals_field(self, other: impl Into<String>, message: impl Into<String>) -> Self {
		self.rule(Rule::EqualsField {
			other: other.into(),
			message: message.into(),
		})
	}

	pub fn min_items(self, count: usize, message: impl Into<String>) -> Self {
		self.rule(Rule::MinItems {
			count,
			message: message.into(),
		})
	}

	pub fn is_required(&self) -> bool {
		self.rules
			.iter()
			.any(|rule| matches!(rule, Rule::Required { .. }))
	}

	/// Message of the first `Required` rule, reported when the value is absent.
	pub fn required_message(&self) -> Option<&str> {
		self.rules.iter().find_map(|rule| match rule {
			Rule::Required { message } => Some(message.as_str()),
			_ => None,
		})
	}
}

/// An immutable, checked set of field schemas
#[derive(Debug, Clone)]
pub struct Schema {
	fields: Vec<FieldSchema>,
}

impl Schema {
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::new()
	}

	pub fn fields(&self) -> &[FieldSchema] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldSchema> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Names of fields that carry a `Required` rule, in declaration order.
	pub fn required_fields(&self) -> impl Iterator<Item = &str> {
		self.fields
			.iter()
			.filter(|f| f.is_required())
			.map(|f| f.name.as_str())
	}
}

/// Collects field schemas and checks them on [`SchemaBuilder::build`]
#[derive(Debug, Default)]
pub struct SchemaBuilder {
	fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	pub fn field(mut self, field: FieldSchema) -> Self {
		self.fields.push(field);
		self
	}

	/// Check the collected fields and freeze them into a [`Schema`].
	///
	/// Fails on duplicate names, on rules declared on a kind they cannot check,
	/// and on cross-field rules pointing at undeclared fields.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldSchema, FormError, Schema};
	///
	/// let result = Schema::builder()
	///     .field(FieldSchema::text("name").min(1.0, "nope"))
	///     .build();
	/// assert!(matches!(result, Err(FormError::IncompatibleRule { .. })));
	/// ```
	pub fn build(self) -> FormResult<Schema> {
		let mut seen = HashSet::new();
		for field in &self.fields {
			if !seen.insert(field.name.as_str()) {
				return Err(FormError::DuplicateField(field.name.clone()));
			}
		}

		for field in &self.fields {
			for rule in &field.rules {
				if !rule.applies_to(&field.kind) {
					return Err(FormError::IncompatibleRule {
						field: field.name.clone(),
						rule: rule.name(),
						kind: field.kind.as_str(),
					});
				}
				if let Rule::EqualsField { other, .. } = rule
					&& !seen.contains(other.as_str())
				{
					return Err(FormError::UnknownReference {
						field: field.name.clone(),
						other: other.clone(),
					});
				}
			}
		}

		Ok(Schema {
			fields: self.fields,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_duplicate_field_rejected() {
		let result = Schema::builder()
			.field(FieldSchema::text("email"))
			.field(FieldSchema::text("email"))
			.build();

		assert!(matches!(result, Err(FormError::DuplicateField(name)) if name == "email"));
	}

	#[rstest]
	fn test_unknown_reference_rejected() {
		let result = Schema::builder()
			.field(FieldSchema::text("confirmPassword").equals_field("password", "must match"))
			.build();

		assert!(matches!(
			result,
			Err(FormError::UnknownReference { other, .. }) if other == "password"
		));
	}

	#[rstest]
	fn test_reference_may_point_forward() {
		let result = Schema::builder()
			.field(FieldSchema::text("confirmPassword").equals_field("password", "must match"))
			.field(FieldSchema::text("password"))
			.build();

		assert!(result.is_ok());
	}

	#[rstest]
	fn test_required_message_and_fields() {
		// Arrange
		let schema = Schema::builder()
			.field(FieldSchema::text("a").required("A is required"))
			.field(FieldSchema::text("b"))
			.build()
			.unwrap();

		// Act
		let required: Vec<_> = schema.required_fields().collect();

		// Assert
		assert_eq!(required, vec!["a"]);
		assert_eq!(
			schema.field("a").unwrap().required_message(),
			Some("A is required")
		);
		assert_eq!(schema.field("b").unwrap().required_message(), None);
	}

	#[rstest]
	fn test_invalid_pattern() {
		let result = FieldSchema::text("phone").matches("[0-9", "bad");

		assert!(matches!(result, Err(FormError::InvalidPattern { field, .. }) if field == "phone"));
	}
}
