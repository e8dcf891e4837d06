//! Form Widgets and HTML Rendering
//!
//! Widgets render single inputs; [`render_form`] lays out the whole signup
//! form for a variant, with each field's error message below its input.

use crate::messages::Message;
use crate::notify::Toast;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use signup_conf::{FormVariant, ToastPosition};
use signup_forms::signup::{self, GENDER_CHOICES, INTEREST_CHOICES};
use signup_forms::{ErrorMap, FormValues};

/// Widget type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetType {
	TextInput,
	PasswordInput,
	EmailInput,
	NumberInput,
	DateInput,
	Select,
	CheckboxSelectMultiple,
}

/// Base widget trait
pub trait Widget {
	fn widget_type(&self) -> WidgetType;

	/// Render the widget as HTML
	fn render(&self, name: &str, value: Option<&str>, attrs: &IndexMap<String, String>) -> String;

	/// Render the widget with `(value, label)` choices
	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &IndexMap<String, String>,
		_choices: &[(&str, &str)],
	) -> String {
		self.render(name, value, attrs)
	}
}

fn push_attrs(html: &mut String, attrs: &IndexMap<String, String>) {
	for (key, val) in attrs {
		html.push_str(&format!(r#" {}="{}""#, key, html_escape(val)));
	}
}

/// Single-line input; the type decides text, password, email or number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInput {
	input_type: &'static str,
}

impl TextInput {
	pub fn new() -> Self {
		Self { input_type: "text" }
	}

	pub fn password() -> Self {
		Self {
			input_type: "password",
		}
	}

	pub fn email() -> Self {
		Self { input_type: "email" }
	}

	pub fn number() -> Self {
		Self {
			input_type: "number",
		}
	}
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for TextInput {
	fn widget_type(&self) -> WidgetType {
		match self.input_type {
			"password" => WidgetType::PasswordInput,
			"email" => WidgetType::EmailInput,
			"number" => WidgetType::NumberInput,
			_ => WidgetType::TextInput,
		}
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &IndexMap<String, String>) -> String {
		let mut html = format!(
			r#"<input type="{}" name="{}""#,
			self.input_type,
			html_escape(name)
		);

		if let Some(v) = value {
			html.push_str(&format!(r#" value="{}""#, html_escape(v)));
		}

		push_attrs(&mut html, attrs);
		html.push_str(" />");
		html
	}
}

/// Date picker
#[derive(Debug, Clone, Copy, Default)]
pub struct DateInput;

impl Widget for DateInput {
	fn widget_type(&self) -> WidgetType {
		WidgetType::DateInput
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &IndexMap<String, String>) -> String {
		let mut html = format!(r#"<input type="date" name="{}""#, html_escape(name));

		if let Some(v) = value {
			html.push_str(&format!(r#" value="{}""#, html_escape(v)));
		}

		push_attrs(&mut html, attrs);
		html.push_str(" />");
		html
	}
}

/// Select widget
#[derive(Debug, Clone, Copy, Default)]
pub struct Select;

impl Widget for Select {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Select
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &IndexMap<String, String>) -> String {
		self.render_with_choices(name, value, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &IndexMap<String, String>,
		choices: &[(&str, &str)],
	) -> String {
		let mut html = format!(r#"<select name="{}""#, html_escape(name));
		push_attrs(&mut html, attrs);
		html.push('>');

		for (choice_value, choice_label) in choices {
			html.push_str(&format!(r#"<option value="{}""#, html_escape(choice_value)));
			if Some(*choice_value) == value {
				html.push_str(" selected");
			}
			html.push('>');
			html.push_str(&html_escape(choice_label));
			html.push_str("</option>");
		}

		html.push_str("</select>");
		html
	}
}

/// Checkbox group for multiple selection
///
/// Through [`Widget`] the selected values are passed comma-separated;
/// [`CheckboxSelectMultiple::render_selected`] takes the set itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxSelectMultiple;

impl CheckboxSelectMultiple {
	/// Render one checkbox per choice, checking those in `selected`.
	pub fn render_selected(
		&self,
		name: &str,
		selected: &IndexSet<String>,
		attrs: &IndexMap<String, String>,
		choices: &[(&str, &str)],
	) -> String {
		let mut html = String::new();
		let escaped_name = html_escape(name);

		for (i, (choice_value, choice_label)) in choices.iter().enumerate() {
			let input_id = format!("{}_{}", escaped_name, i);

			html.push_str(&format!(
				r#"<label for="{}"><input type="checkbox" name="{}" id="{}" value="{}""#,
				input_id,
				escaped_name,
				input_id,
				html_escape(choice_value)
			));

			if selected.contains(*choice_value) {
				html.push_str(" checked");
			}

			push_attrs(&mut html, attrs);
			html.push_str(" /> ");
			html.push_str(&html_escape(choice_label));
			html.push_str("</label>");
		}

		html
	}
}

impl Widget for CheckboxSelectMultiple {
	fn widget_type(&self) -> WidgetType {
		WidgetType::CheckboxSelectMultiple
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &IndexMap<String, String>) -> String {
		self.render_with_choices(name, value, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &IndexMap<String, String>,
		choices: &[(&str, &str)],
	) -> String {
		let selected: IndexSet<String> = value
			.map(|v| v.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect())
			.unwrap_or_default();

		self.render_selected(name, &selected, attrs, choices)
	}
}

/// Escape text for use in HTML content and attribute values
///
/// # Examples
///
/// ```
/// use signup_pages::rendering::html_escape;
///
/// assert_eq!(html_escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
/// ```
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

#[derive(Debug, Clone, Copy)]
enum Control {
	Text,
	Password,
	Email,
	Number,
	Date,
	Gender,
	Interests,
}

struct FieldLayout {
	name: &'static str,
	label: &'static str,
	toast_label: &'static str,
	placeholder: Option<&'static str>,
	control: Control,
}

const LAYOUT: [FieldLayout; 10] = [
	FieldLayout {
		name: signup::FIRST_NAME,
		label: "First Name:",
		toast_label: "FirstName:",
		placeholder: Some("Enter Your FirstName"),
		control: Control::Text,
	},
	FieldLayout {
		name: signup::LAST_NAME,
		label: "Last Name:",
		toast_label: "LastName:",
		placeholder: Some("Enter Your LastName"),
		control: Control::Text,
	},
	FieldLayout {
		name: signup::EMAIL,
		label: "Email:",
		toast_label: "Email:",
		placeholder: Some("Enter Your Email"),
		control: Control::Email,
	},
	FieldLayout {
		name: signup::PHONE_NUMBER,
		label: "Phone Number:",
		toast_label: "Phone Number:",
		placeholder: Some("Enter Your PhoneNumber"),
		control: Control::Text,
	},
	FieldLayout {
		name: signup::PASSWORD,
		label: "Password:",
		toast_label: "Password:",
		placeholder: Some("Enter Your Password"),
		control: Control::Password,
	},
	FieldLayout {
		name: signup::CONFIRM_PASSWORD,
		label: "Confirm Password:",
		toast_label: "Confirm Password:",
		placeholder: Some("Re-enter Password"),
		control: Control::Password,
	},
	FieldLayout {
		name: signup::AGE,
		label: "Age:",
		toast_label: "Age:",
		placeholder: Some("Enter Your Age"),
		control: Control::Number,
	},
	FieldLayout {
		name: signup::GENDER,
		label: "Gender:",
		toast_label: "Gender:",
		placeholder: None,
		control: Control::Gender,
	},
	FieldLayout {
		name: signup::INTERESTS,
		label: "Interests:",
		toast_label: "Interests:",
		placeholder: None,
		control: Control::Interests,
	},
	FieldLayout {
		name: signup::BIRTH_DATE,
		label: "Birth Date:",
		toast_label: "BirthDate:",
		placeholder: None,
		control: Control::Date,
	},
];

fn gender_choices(variant: FormVariant) -> Vec<(&'static str, &'static str)> {
	let mut choices = vec![("", "Select Gender")];
	choices.extend(GENDER_CHOICES.iter().map(|&(value, label)| {
		match (variant, value) {
			(FormVariant::Toast, "Others") => (value, "Other"),
			_ => (value, label),
		}
	}));
	choices
}

fn render_field(layout: &FieldLayout, variant: FormVariant, values: &FormValues) -> String {
	let mut attrs = IndexMap::new();
	if !matches!(layout.control, Control::Interests) {
		attrs.insert("id".to_string(), layout.name.to_string());
	}
	if variant == FormVariant::Toast
		&& let Some(placeholder) = layout.placeholder
	{
		attrs.insert("placeholder".to_string(), placeholder.to_string());
	}

	let text = values.text(layout.name);
	match layout.control {
		Control::Text => TextInput::new().render(layout.name, text, &attrs),
		Control::Password => TextInput::password().render(layout.name, text, &attrs),
		Control::Email => TextInput::email().render(layout.name, text, &attrs),
		Control::Number => TextInput::number().render(layout.name, text, &attrs),
		Control::Date => DateInput.render(layout.name, text, &attrs),
		Control::Gender => {
			Select.render_with_choices(layout.name, text, &attrs, &gender_choices(variant))
		}
		Control::Interests => {
			let none = IndexSet::new();
			let selected = values.choices(layout.name).unwrap_or(&none);
			CheckboxSelectMultiple.render_selected(layout.name, selected, &attrs, INTEREST_CHOICES)
		}
	}
}

/// Render the signup form for `variant`.
///
/// Inline and toast forms render every field with its error below; the
/// headless form renders only the form shell and the submit button.
///
/// # Examples
///
/// ```
/// use signup_conf::FormVariant;
/// use signup_forms::{ErrorMap, FormValues};
/// use signup_pages::rendering::render_form;
///
/// let mut errors = ErrorMap::new();
/// errors.insert("age", "Minimum age is 18");
///
/// let html = render_form(FormVariant::Inline, &FormValues::signup_empty(), &errors);
/// assert!(html.contains(r#"<div class="error">Minimum age is 18</div>"#));
/// assert!(html.contains(r#"<input type="number" name="age" value="" id="age" />"#));
/// ```
pub fn render_form(variant: FormVariant, values: &FormValues, errors: &ErrorMap) -> String {
	let mut html = String::from(r#"<div class="form-container"><form method="post" novalidate>"#);

	if variant.renders_fields() {
		for layout in &LAYOUT {
			let label = match variant {
				FormVariant::Toast => layout.toast_label,
				_ => layout.label,
			};

			html.push_str("<div>");
			if matches!(layout.control, Control::Interests) {
				html.push_str(&format!("<label>{}</label>", html_escape(label)));
			} else {
				html.push_str(&format!(
					r#"<label for="{}">{}</label>"#,
					layout.name,
					html_escape(label)
				));
			}
			html.push_str(&render_field(layout, variant, values));
			if let Some(message) = errors.get(layout.name) {
				html.push_str(&format!(r#"<div class="error">{}</div>"#, html_escape(message)));
			}
			html.push_str("</div>");
		}
	}

	html.push_str(r#"<button type="submit">Submit</button></form></div>"#);
	html
}

/// Alert banner for pending inline messages; empty when there are none.
pub fn render_banner(messages: &[Message]) -> String {
	messages
		.iter()
		.map(|message| {
			format!(
				r#"<div class="alert {}" role="alert">{}</div>"#,
				html_escape(&message.css_classes()),
				html_escape(&message.text)
			)
		})
		.collect()
}

/// Toast container with the given toasts.
pub fn render_toasts(position: ToastPosition, toasts: &[&Toast]) -> String {
	let mut html = format!(r#"<div class="toast-container {}">"#, position.as_str());
	for toast in toasts {
		html.push_str(&format!(
			r#"<div class="toast {}" role="status">{}</div>"#,
			html_escape(&toast.message.css_classes()),
			html_escape(&toast.message.text)
		));
	}
	html.push_str("</div>");
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TextInput::new(), WidgetType::TextInput)]
	#[case(TextInput::password(), WidgetType::PasswordInput)]
	#[case(TextInput::email(), WidgetType::EmailInput)]
	#[case(TextInput::number(), WidgetType::NumberInput)]
	fn test_text_input_types(#[case] widget: TextInput, #[case] expected: WidgetType) {
		assert_eq!(widget.widget_type(), expected);
	}

	#[rstest]
	fn test_text_input_escapes_value() {
		let html = TextInput::new().render("firstName", Some(r#"<b>"x"</b>"#), &IndexMap::new());

		assert_eq!(
			html,
			r#"<input type="text" name="firstName" value="&lt;b&gt;&quot;x&quot;&lt;/b&gt;" />"#
		);
	}

	#[rstest]
	fn test_select_marks_selected() {
		let html = Select.render_with_choices(
			"gender",
			Some("Female"),
			&IndexMap::new(),
			&[("", "Select Gender"), ("Male", "Male"), ("Female", "Female")],
		);

		assert!(html.contains(r#"<option value="Female" selected>Female</option>"#));
		assert!(html.contains(r#"<option value="Male">Male</option>"#));
	}

	#[rstest]
	fn test_checkbox_group_checks_selected() {
		let html = CheckboxSelectMultiple.render_with_choices(
			"interests",
			Some("coding,sports"),
			&IndexMap::new(),
			INTEREST_CHOICES,
		);

		assert!(html.contains(r#"id="interests_0" value="coding" checked"#));
		assert!(html.contains(r#"id="interests_1" value="reading" />"#));
		assert!(html.contains(r#"id="interests_2" value="sports" checked"#));
	}

	#[rstest]
	fn test_checkbox_group_matches_whole_choice_values() {
		// Arrange
		let selected: IndexSet<String> = ["a,b".to_string()].into_iter().collect();
		let choices = [("a", "A"), ("b", "B"), ("a,b", "A and B")];

		// Act
		let html =
			CheckboxSelectMultiple.render_selected("tags", &selected, &IndexMap::new(), &choices);

		// Assert
		assert!(html.contains(r#"id="tags_0" value="a" />"#));
		assert!(html.contains(r#"id="tags_1" value="b" />"#));
		assert!(html.contains(r#"id="tags_2" value="a,b" checked"#));
	}

	#[rstest]
	fn test_form_checks_interests_from_values() {
		let mut values = FormValues::signup_empty();
		values.toggle_choice(signup::INTERESTS, "reading", true);

		let html = render_form(FormVariant::Inline, &values, &ErrorMap::new());

		assert!(html.contains(r#"id="interests_1" value="reading" checked"#));
		assert!(html.contains(r#"id="interests_0" value="coding" />"#));
	}

	#[rstest]
	fn test_toast_form_uses_placeholders_and_labels() {
		let html = render_form(FormVariant::Toast, &FormValues::signup_empty(), &ErrorMap::new());

		assert!(html.contains(r#"placeholder="Enter Your FirstName""#));
		assert!(html.contains(r#"placeholder="Re-enter Password""#));
		assert!(html.contains(r#"<label for="birthDate">BirthDate:</label>"#));
		assert!(html.contains(r#"<option value="Others">Other</option>"#));
	}

	#[rstest]
	fn test_inline_form_has_no_placeholders() {
		let html = render_form(FormVariant::Inline, &FormValues::signup_empty(), &ErrorMap::new());

		assert!(!html.contains("placeholder"));
		assert!(html.contains(r#"<label for="birthDate">Birth Date:</label>"#));
		assert!(html.contains(r#"<option value="Others">Others</option>"#));
		assert!(!html.contains(r#"class="error""#));
	}

	#[rstest]
	fn test_headless_form_renders_shell_only() {
		let mut errors = ErrorMap::new();
		errors.insert("firstName", "FirstName is required");

		let html = render_form(FormVariant::Headless, &FormValues::signup_empty(), &errors);

		assert_eq!(
			html,
			r#"<div class="form-container"><form method="post" novalidate><button type="submit">Submit</button></form></div>"#
		);
	}

	#[rstest]
	fn test_error_text_is_escaped() {
		let mut errors = ErrorMap::new();
		errors.insert("email", "<script>");

		let html = render_form(FormVariant::Inline, &FormValues::signup_empty(), &errors);

		assert!(html.contains(r#"<div class="error">&lt;script&gt;</div>"#));
	}

	#[rstest]
	fn test_banner() {
		let html = render_banner(&[Message::success("Form submitted successfully")]);

		assert_eq!(
			html,
			r#"<div class="alert success" role="alert">Form submitted successfully</div>"#
		);
		assert!(render_banner(&[]).is_empty());
	}
}
