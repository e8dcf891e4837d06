//! Evaluating a schema against form values

use crate::errors::{ErrorMap, FormError, FormResult, ValidationErrors};
use crate::rules::{Cast, Rule};
use crate::schema::{FieldSchema, Schema};
use crate::values::FormValues;

/// Checks a whole bag of form values.
///
/// Every declared rule is evaluated; a failure never stops evaluation of the
/// remaining fields.
pub trait Validator {
	/// `Ok(())` when every field passes, otherwise the full report.
	fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors>;

	/// One message per failing field; empty when the values are valid.
	fn errors(&self, values: &FormValues) -> ErrorMap {
		match self.validate(values) {
			Ok(()) => ErrorMap::new(),
			Err(report) => ErrorMap::from(report),
		}
	}
}

/// Evaluate one field's rules and return every failure message in order.
///
/// An absent value reports only the field's required message (or nothing when
/// the field is optional). A value that cannot be read as the field's kind
/// reports only the type message. A failing cross-field rule (see
/// [`Rule::short_circuits`]) reports only its own message.
pub fn evaluate_field(field: &FieldSchema, values: &FormValues) -> Vec<String> {
	let value = match field.kind.cast(&field.name, values.get(&field.name)) {
		Cast::Absent => {
			return field
				.required_message()
				.map(|message| vec![message.to_string()])
				.unwrap_or_default();
		}
		Cast::Invalid(message) => return vec![message],
		Cast::Present(value) => value,
	};

	let (initial, rest): (Vec<_>, Vec<_>) =
		field.rules.iter().partition(|rule| rule.short_circuits());

	let failed = |rules: Vec<&Rule>| -> Vec<String> {
		rules
			.into_iter()
			.filter(|rule| !rule.check(&value, values))
			.map(|rule| rule.message().to_string())
			.collect()
	};

	let initial_failures = failed(initial);
	if !initial_failures.is_empty() {
		return initial_failures;
	}
	failed(rest)
}

impl Schema {
	/// Failure messages for a single declared field.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormValues, signup};
	///
	/// let schema = signup::signup_schema(signup::SchemaWording::Standard).unwrap();
	/// let mut values = FormValues::signup_empty();
	/// values.set_text("phoneNumber", "12345");
	///
	/// let messages = schema.validate_field("phoneNumber", &values).unwrap();
	/// assert_eq!(messages, vec!["Phone number must be 10 digits".to_string()]);
	/// ```
	pub fn validate_field(&self, name: &str, values: &FormValues) -> FormResult<Vec<String>> {
		let field = self
			.field(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
		Ok(evaluate_field(field, values))
	}
}

impl Validator for Schema {
	fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
		let mut report = ValidationErrors::new();

		for field in self.fields() {
			let messages = evaluate_field(field, values);
			if !messages.is_empty() {
				tracing::trace!(
					field = %field.name,
					failures = messages.len(),
					"field failed validation"
				);
			}
			report.extend_field(&field.name, messages);
		}

		if report.is_empty() {
			Ok(())
		} else {
			tracing::debug!(failing_fields = report.len(), "validation rejected values");
			Err(report)
		}
	}
}

impl<V: Validator + ?Sized> Validator for Box<V> {
	fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
		(**self).validate(values)
	}
}
