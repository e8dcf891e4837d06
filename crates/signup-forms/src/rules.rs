//! Field kinds and the per-field rules a schema declares

use crate::values::{FieldValue, FormValues};
use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

// HTML living-standard email pattern: a local part of permitted characters, an
// `@`, then one or more dot-separated host labels of at most 63 characters
// that neither start nor end with a hyphen.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// How a field's raw input is interpreted before rules run.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
	/// Plain string input
	Text,
	/// String input parsed as a number. `type_message` is reported when the
	/// input is not a number.
	Number { type_message: String },
	/// Multi-select set
	Choices,
}

impl FieldKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldKind::Text => "text",
			FieldKind::Number { .. } => "number",
			FieldKind::Choices => "choices",
		}
	}
}

/// A field's input after it has been interpreted according to its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastValue<'a> {
	Text(&'a str),
	Number(f64),
	Choices(&'a IndexSet<String>),
}

/// Outcome of interpreting a raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cast<'a> {
	/// Nothing usable was entered
	Absent,
	Present(CastValue<'a>),
	/// The input cannot be read as the field's kind
	Invalid(String),
}

impl FieldKind {
	/// Interpret `raw` for a field called `name`.
	///
	/// An empty number input is absent rather than zero.
	pub fn cast<'a>(&self, name: &str, raw: Option<&'a FieldValue>) -> Cast<'a> {
		let Some(raw) = raw else {
			return Cast::Absent;
		};

		match (self, raw) {
			(FieldKind::Text, FieldValue::Text(s)) => Cast::Present(CastValue::Text(s)),
			(FieldKind::Choices, FieldValue::Choices(set)) => {
				Cast::Present(CastValue::Choices(set))
			}
			(FieldKind::Number { .. }, FieldValue::Text(s)) if s.is_empty() => Cast::Absent,
			(FieldKind::Number { type_message }, FieldValue::Text(s)) => {
				let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
				match parse_number(&compact) {
					Some(n) => Cast::Present(CastValue::Number(n)),
					None => Cast::Invalid(type_message.clone()),
				}
			}
			(FieldKind::Number { type_message }, FieldValue::Choices(_)) => {
				Cast::Invalid(type_message.clone())
			}
			(FieldKind::Text, FieldValue::Choices(_)) => {
				Cast::Invalid(format!("{} must be text", name))
			}
			(FieldKind::Choices, FieldValue::Text(_)) => {
				Cast::Invalid(format!("{} must be a list of choices", name))
			}
		}
	}
}

/// Numeric text as a browser number input reads it.
///
/// Accepts decimal and exponent notation, `0x`/`0o`/`0b` integer literals and
/// the exact spellings `Infinity`, `+Infinity` and `-Infinity`. Anything else,
/// including `NaN`, `inf` and `infinity`, is not a number.
fn parse_number(s: &str) -> Option<f64> {
	match s {
		"Infinity" | "+Infinity" => return Some(f64::INFINITY),
		"-Infinity" => return Some(f64::NEG_INFINITY),
		_ => {}
	}

	let radix = match s.get(..2) {
		Some("0x" | "0X") => Some(16),
		Some("0o" | "0O") => Some(8),
		Some("0b" | "0B") => Some(2),
		_ => None,
	};
	if let Some(radix) = radix {
		let digits = &s[2..];
		if digits.is_empty() {
			return None;
		}
		return digits.chars().try_fold(0.0_f64, |acc, c| {
			c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
		});
	}

	// Rust also reads `inf`, `infinity` and `nan` in any case.
	if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
		return None;
	}
	s.parse::<f64>().ok()
}

/// A single declarative constraint.
#[derive(Debug, Clone)]
pub enum Rule {
	/// Value must be present; text must also be non-empty
	Required { message: String },
	/// Text must match `pattern`
	Matches {
		pattern: Regex,
		message: String,
		/// Let empty text through without matching
		exclude_empty: bool,
	},
	/// Text must look like an email address; empty text is skipped
	Email { message: String },
	/// Number must be >= `bound`
	Min { bound: f64, message: String },
	/// Number must be <= `bound`
	Max { bound: f64, message: String },
	/// Text must equal the text of field `other`
	EqualsField { other: String, message: String },
	/// Set must hold at least `count` choices
	MinItems { count: usize, message: String },
}

impl Rule {
	/// Short rule identifier used in logs and errors.
	pub fn name(&self) -> &'static str {
		match self {
			Rule::Required { .. } => "required",
			Rule::Matches { .. } => "matches",
			Rule::Email { .. } => "email",
			Rule::Min { .. } => "min",
			Rule::Max { .. } => "max",
			Rule::EqualsField { .. } => "equals_field",
			Rule::MinItems { .. } => "min_items",
		}
	}

	pub fn message(&self) -> &str {
		match self {
			Rule::Required { message }
			| Rule::Matches { message, .. }
			| Rule::Email { message }
			| Rule::Min { message, .. }
			| Rule::Max { message, .. }
			| Rule::EqualsField { message, .. }
			| Rule::MinItems { message, .. } => message,
		}
	}

	/// Whether a failure of this rule is the only message its field reports.
	///
	/// Such rules run before every other rule of the field; when one fails the
	/// remaining rules are skipped.
	pub fn short_circuits(&self) -> bool {
		matches!(self, Rule::EqualsField { .. })
	}

	/// Whether this rule can be declared on a field of `kind`.
	pub fn applies_to(&self, kind: &FieldKind) -> bool {
		match self {
			Rule::Required { .. } => true,
			Rule::Matches { .. } | Rule::Email { .. } | Rule::EqualsField { .. } => {
				matches!(kind, FieldKind::Text)
			}
			Rule::Min { .. } | Rule::Max { .. } => matches!(kind, FieldKind::Number { .. }),
			Rule::MinItems { .. } => matches!(kind, FieldKind::Choices),
		}
	}

	/// Check a present value. `values` is the whole bag, for cross-field rules.
	///
	/// Returns `true` when the value satisfies the rule.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormValues, Rule};
	/// use signup_forms::rules::CastValue;
	///
	/// let rule = Rule::Min { bound: 18.0, message: "Minimum age is 18".into() };
	/// let values = FormValues::new();
	///
	/// assert!(rule.check(&CastValue::Number(18.0), &values));
	/// assert!(!rule.check(&CastValue::Number(17.0), &values));
	/// ```
	pub fn check(&self, value: &CastValue<'_>, values: &FormValues) -> bool {
		match (self, value) {
			(Rule::Required { .. }, CastValue::Text(s)) => !s.is_empty(),
			(Rule::Required { .. }, _) => true,
			(
				Rule::Matches {
					pattern,
					exclude_empty,
					..
				},
				CastValue::Text(s),
			) => (*exclude_empty && s.is_empty()) || pattern.is_match(s),
			(Rule::Email { .. }, CastValue::Text(s)) => s.is_empty() || EMAIL_REGEX.is_match(s),
			(Rule::Min { bound, .. }, CastValue::Number(n)) => *n >= *bound,
			(Rule::Max { bound, .. }, CastValue::Number(n)) => *n <= *bound,
			(Rule::EqualsField { other, .. }, CastValue::Text(s)) => {
				values.text(other) == Some(*s)
			}
			(Rule::MinItems { count, .. }, CastValue::Choices(set)) => set.len() >= *count,
			// Kind mismatches are rejected when the schema is built.
			_ => true,
		}
	}
}
