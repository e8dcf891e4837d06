//! Form Controller
//!
//! Owns the form's values, errors and phase as [`Signal`]s. Edits merge one
//! field at a time; submitting validates the whole form.

use crate::notify::{Notifier, VariantNotifier};
use crate::rendering::render_form;
use crate::signal::Signal;
use signup_conf::{FormSettings, FormVariant};
use signup_forms::{ErrorMap, FormResult, FormValues, Validator, signup, signup_schema};
use std::fmt;
use std::time::Instant;

/// Lifecycle of the form
///
/// `Submitted` is transient: it is set while an accepted submission is being
/// reported and the form returns to `Editing` once it has been reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormPhase {
	#[default]
	Editing,
	Submitted,
}

/// Result of [`FormController::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// The values as they were submitted, before the form was reset
	Accepted { values: FormValues },
	/// One message per failing field; the values are kept for correction
	Rejected { errors: ErrorMap },
}

impl SubmitOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmitOutcome::Accepted { .. })
	}
}

/// Drives a signup form
///
/// # Examples
///
/// ```
/// use signup_conf::{FormSettings, FormVariant};
/// use signup_pages::FormController;
///
/// let mut form = FormController::for_variant(FormVariant::Inline, &FormSettings::default()).unwrap();
/// form.handle_change("age", "17");
///
/// let outcome = form.submit();
/// assert!(!outcome.is_accepted());
/// assert_eq!(form.errors().get("age"), Some("Minimum age is 18"));
/// assert_eq!(form.values().text("age"), Some("17"));
/// ```
pub struct FormController<N: Notifier = VariantNotifier> {
	validator: Box<dyn Validator>,
	notifier: N,
	variant: FormVariant,
	log_submissions: bool,
	values: Signal<FormValues>,
	errors: Signal<ErrorMap>,
	phase: Signal<FormPhase>,
}

impl<N: Notifier> FormController<N> {
	/// Controller starting from the empty signup form.
	pub fn new(validator: impl Validator + 'static, notifier: N) -> Self {
		Self {
			validator: Box::new(validator),
			notifier,
			variant: FormVariant::Inline,
			log_submissions: true,
			values: Signal::new(FormValues::signup_empty()),
			errors: Signal::new(ErrorMap::new()),
			phase: Signal::new(FormPhase::Editing),
		}
	}

	/// Variant used by [`render`](Self::render).
	pub fn with_variant(mut self, variant: FormVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Whether accepted submissions are logged with their (redacted) values.
	pub fn with_submission_logging(mut self, enabled: bool) -> Self {
		self.log_submissions = enabled;
		self
	}

	pub fn variant(&self) -> FormVariant {
		self.variant
	}

	pub fn values(&self) -> FormValues {
		self.values.get()
	}

	pub fn errors(&self) -> ErrorMap {
		self.errors.get()
	}

	pub fn phase(&self) -> FormPhase {
		self.phase.get()
	}

	pub fn values_signal(&self) -> Signal<FormValues> {
		self.values.clone()
	}

	pub fn errors_signal(&self) -> Signal<ErrorMap> {
		self.errors.clone()
	}

	pub fn phase_signal(&self) -> Signal<FormPhase> {
		self.phase.clone()
	}

	pub fn notifier(&self) -> &N {
		&self.notifier
	}

	pub fn notifier_mut(&mut self) -> &mut N {
		&mut self.notifier
	}

	/// Merge a text edit into the values. Errors are left as they are until
	/// the next submit.
	pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
		let value = value.into();
		tracing::debug!(field = name, "field changed");
		self.notifier.dismiss_stale(Instant::now());
		self.values.update(|values| values.set_text(name, value));
	}

	/// Check or uncheck one choice of a multi-select field.
	pub fn handle_checkbox(&mut self, name: &str, choice: &str, checked: bool) {
		tracing::debug!(field = name, choice, checked, "choice toggled");
		self.notifier.dismiss_stale(Instant::now());
		self.values
			.update(|values| values.toggle_choice(name, choice, checked));
	}

	/// Validate the current values.
	///
	/// Notifications from earlier submits are dismissed first. On success the
	/// errors are cleared, one success notification is sent, and the form is
	/// reset. On failure the errors are replaced and the
	/// values are kept.
	pub fn submit(&mut self) -> SubmitOutcome {
		self.notifier.dismiss_stale(Instant::now());
		let submitted = self.values.get();

		match self.validator.validate(&submitted) {
			Ok(()) => {
				self.errors.set(ErrorMap::new());
				self.phase.set(FormPhase::Submitted);
				self.log_accepted(&submitted);
				self.notifier.notify_success();
				self.values.set(FormValues::signup_empty());
				self.phase.set(FormPhase::Editing);
				SubmitOutcome::Accepted { values: submitted }
			}
			Err(report) => {
				let errors = ErrorMap::from(&report);
				tracing::debug!(failing_fields = errors.len(), "submission rejected");
				self.errors.set(errors.clone());
				SubmitOutcome::Rejected { errors }
			}
		}
	}

	/// Back to the empty form with no errors.
	pub fn reset(&mut self) {
		self.notifier.dismiss_stale(Instant::now());
		self.values.set(FormValues::signup_empty());
		self.errors.set(ErrorMap::new());
		self.phase.set(FormPhase::Editing);
	}

	/// Notifications visible at `now` followed by the form.
	pub fn render(&self, now: Instant) -> String {
		let mut html = self.notifier.render(now);
		self.values.with(|values| {
			self.errors
				.with(|errors| html.push_str(&render_form(self.variant, values, errors)))
		});
		html
	}

	fn log_accepted(&self, submitted: &FormValues) {
		if !self.log_submissions {
			tracing::info!(variant = %self.variant, "form submitted");
			return;
		}

		match serde_json::to_string(&submitted.redacted(signup::SENSITIVE_FIELDS)) {
			Ok(json) => {
				tracing::info!(variant = %self.variant, submission = %json, "form submitted")
			}
			Err(e) => {
				tracing::warn!(variant = %self.variant, error = %e, "form submitted; values not serializable")
			}
		}
	}
}

impl FormController<VariantNotifier> {
	/// Controller wired for `variant`: its schema wording, notifier and
	/// rendering.
	pub fn for_variant(variant: FormVariant, settings: &FormSettings) -> FormResult<Self> {
		let schema = signup_schema(variant.wording())?;
		Ok(Self::new(schema, VariantNotifier::for_variant(variant, settings))
			.with_variant(variant)
			.with_submission_logging(settings.log_submissions))
	}

	/// Controller for the variant selected in `settings`.
	pub fn from_settings(settings: &FormSettings) -> FormResult<Self> {
		Self::for_variant(settings.variant, settings)
	}
}

impl<N: Notifier + fmt::Debug> fmt::Debug for FormController<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormController")
			.field("variant", &self.variant)
			.field("phase", &self.phase.get())
			.field("values", &self.values)
			.field("errors", &self.errors)
			.field("notifier", &self.notifier)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::messages::Message;
	use rstest::{fixture, rstest};
	use signup_forms::SchemaWording;

	#[derive(Debug, Default)]
	struct Recorder {
		sent: Vec<Message>,
	}

	impl Notifier for Recorder {
		fn notify(&mut self, message: Message) {
			self.sent.push(message);
		}
	}

	#[fixture]
	fn form() -> FormController<Recorder> {
		let schema = signup_schema(SchemaWording::Standard).unwrap();
		FormController::new(schema, Recorder::default())
	}

	#[rstest]
	fn test_starts_empty(form: FormController<Recorder>) {
		assert_eq!(form.values(), FormValues::signup_empty());
		assert!(form.errors().is_empty());
		assert_eq!(form.phase(), FormPhase::Editing);
	}

	#[rstest]
	fn test_edit_merges_single_field(mut form: FormController<Recorder>) {
		form.handle_change("firstName", "Ann");
		form.handle_change("lastName", "Lee");
		form.handle_change("firstName", "Anna");

		let values = form.values();
		assert_eq!(values.text("firstName"), Some("Anna"));
		assert_eq!(values.text("lastName"), Some("Lee"));
		assert_eq!(values.text("email"), Some(""));
	}

	#[rstest]
	fn test_edit_does_not_revalidate(mut form: FormController<Recorder>) {
		form.submit();
		let before = form.errors();

		form.handle_change("firstName", "Ann");

		assert_eq!(form.errors(), before);
	}

	#[rstest]
	fn test_empty_submit_rejected(mut form: FormController<Recorder>) {
		// Act
		let outcome = form.submit();

		// Assert
		let SubmitOutcome::Rejected { errors } = outcome else {
			panic!("expected rejection");
		};
		assert_eq!(errors.len(), signup::FIELD_NAMES.len());
		assert_eq!(form.errors(), errors);
		assert!(form.notifier().sent.is_empty());
	}

	#[rstest]
	fn test_reset(mut form: FormController<Recorder>) {
		form.handle_change("firstName", "Ann");
		form.submit();

		form.reset();

		assert_eq!(form.values(), FormValues::signup_empty());
		assert!(form.errors().is_empty());
	}

	#[rstest]
	fn test_for_variant_wires_wording() {
		let mut form = FormController::for_variant(FormVariant::Toast, &FormSettings::default()).unwrap();
		form.handle_change("lastName", "");

		form.submit();

		assert_eq!(form.errors().get("lastName"), Some("Last Name is required"));
		assert!(form.notifier().as_toast().is_some());
	}
}
