//! Form controller tests across the three variants

use proptest::prelude::*;
use rstest::rstest;
use signup_conf::{FormSettings, FormVariant, ToastSettings};
use signup_pages::{FormController, FormPhase, Message, SubmitOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn fill_valid(form: &mut FormController) {
	form.handle_change("firstName", "Ann");
	form.handle_change("lastName", "Lee");
	form.handle_change("email", "a@b.com");
	form.handle_change("phoneNumber", "1234567890");
	form.handle_change("password", "Abc12345");
	form.handle_change("confirmPassword", "Abc12345");
	form.handle_change("age", "30");
	form.handle_change("gender", "Female");
	form.handle_checkbox("interests", "coding", true);
	form.handle_change("birthDate", "2000-01-01");
}

fn controller(variant: FormVariant) -> FormController {
	FormController::for_variant(variant, &FormSettings::default()).unwrap()
}

#[rstest]
#[case(FormVariant::Inline)]
#[case(FormVariant::Toast)]
#[case(FormVariant::Headless)]
fn test_valid_submit_resets_form(#[case] variant: FormVariant) {
	// Arrange
	let mut form = controller(variant);
	fill_valid(&mut form);
	let filled = form.values();

	// Act
	let outcome = form.submit();

	// Assert
	assert_eq!(outcome, SubmitOutcome::Accepted { values: filled });
	assert_eq!(form.values(), signup_forms::FormValues::signup_empty());
	assert!(form.errors().is_empty());
	assert_eq!(form.phase(), FormPhase::Editing);
}

#[rstest]
#[case(FormVariant::Inline)]
#[case(FormVariant::Toast)]
#[case(FormVariant::Headless)]
fn test_rejected_submit_keeps_values(#[case] variant: FormVariant) {
	let mut form = controller(variant);
	fill_valid(&mut form);
	form.handle_change("confirmPassword", "Abc123456");
	let filled = form.values();

	let outcome = form.submit();

	assert!(!outcome.is_accepted());
	assert_eq!(form.values(), filled);
	assert_eq!(form.errors().len(), 1);
	assert_eq!(form.errors().get("confirmPassword"), Some("Passwords must match"));
}

#[rstest]
fn test_inline_success_banner() {
	// Arrange
	let mut form = controller(FormVariant::Inline);
	fill_valid(&mut form);

	// Act
	form.submit();

	// Assert
	let inline = form.notifier().as_inline().unwrap();
	assert_eq!(
		inline.messages(),
		vec![Message::success("Form submitted successfully")]
	);
	assert!(
		form.render(Instant::now())
			.starts_with(r#"<div class="alert success" role="alert">Form submitted successfully</div>"#)
	);
}

#[rstest]
fn test_repeated_submits_show_one_banner() {
	// Arrange
	let mut form = controller(FormVariant::Inline);

	// Act
	for _ in 0..3 {
		fill_valid(&mut form);
		assert!(form.submit().is_accepted());
	}

	// Assert
	assert_eq!(form.notifier().as_inline().unwrap().messages().len(), 1);
	assert_eq!(form.render(Instant::now()).matches(r#"role="alert""#).count(), 1);
}

#[rstest]
fn test_banner_cleared_by_next_edit() {
	let mut form = controller(FormVariant::Inline);
	fill_valid(&mut form);
	form.submit();

	form.handle_change("firstName", "Bo");

	assert!(form.notifier().as_inline().unwrap().messages().is_empty());
	assert!(!form.render(Instant::now()).contains(r#"role="alert""#));
}

#[rstest]
fn test_expired_toasts_dropped_on_next_submit() {
	// Arrange
	let settings = FormSettings {
		variant: FormVariant::Toast,
		toast: ToastSettings {
			auto_close_ms: 0,
			..ToastSettings::default()
		},
		..FormSettings::default()
	};
	let mut form = FormController::from_settings(&settings).unwrap();

	// Act
	for _ in 0..3 {
		fill_valid(&mut form);
		form.submit();
	}

	// Assert
	assert_eq!(form.notifier().as_toast().unwrap().toasts().len(), 1);
}

#[rstest]
fn test_toast_success_and_auto_close() {
	// Arrange
	let mut form = controller(FormVariant::Toast);
	fill_valid(&mut form);

	// Act
	form.submit();

	// Assert
	let toasts = form.notifier().as_toast().unwrap();
	assert_eq!(toasts.toasts().len(), 1);
	let shown = toasts.toasts()[0].created_at;
	assert!(form.render(shown).contains("Form Submitted Successfully!"));
	assert!(
		form.render(shown + Duration::from_millis(2000))
			.starts_with(r#"<div class="toast-container top-right"></div>"#)
	);

	let removed = form
		.notifier_mut()
		.as_toast_mut()
		.unwrap()
		.dismiss_expired(shown + Duration::from_secs(5));
	assert_eq!(removed, 1);
}

#[rstest]
fn test_rejected_submit_sends_no_notification() {
	let mut form = controller(FormVariant::Toast);

	form.submit();

	assert!(form.notifier().as_toast().unwrap().toasts().is_empty());
}

#[rstest]
fn test_observers_see_transient_submitted_phase() {
	// Arrange
	let mut form = controller(FormVariant::Headless);
	fill_valid(&mut form);
	let phases = Rc::new(RefCell::new(Vec::new()));
	let seen = Rc::clone(&phases);
	form.phase_signal()
		.subscribe(move |phase| seen.borrow_mut().push(*phase));

	// Act
	form.submit();

	// Assert
	assert_eq!(*phases.borrow(), vec![FormPhase::Submitted, FormPhase::Editing]);
}

#[rstest]
fn test_errors_signal_notifies_on_submit() {
	let mut form = controller(FormVariant::Inline);
	let counts = Rc::new(RefCell::new(Vec::new()));
	let seen = Rc::clone(&counts);
	form.errors_signal()
		.subscribe(move |errors| seen.borrow_mut().push(errors.len()));

	form.submit();
	fill_valid(&mut form);
	form.submit();

	assert_eq!(*counts.borrow(), vec![10, 0]);
}

#[rstest]
fn test_headless_renders_no_inputs() {
	let mut form = controller(FormVariant::Headless);
	form.submit();

	let html = form.render(Instant::now());

	assert!(!html.contains("<input"));
	assert!(!html.contains(r#"class="error""#));
	assert!(html.contains(r#"<button type="submit">Submit</button>"#));
}

#[rstest]
fn test_rendered_errors_follow_submit() {
	let mut form = controller(FormVariant::Inline);
	fill_valid(&mut form);
	form.handle_change("age", "17");

	form.submit();
	let html = form.render(Instant::now());

	assert!(html.contains(r#"<input type="number" name="age" value="17" id="age" />"#));
	assert!(html.contains(r#"<div class="error">Minimum age is 18</div>"#));
}

#[rstest]
fn test_settings_disable_submission_logging() {
	let settings = FormSettings {
		log_submissions: false,
		..Default::default()
	};
	let mut form = FormController::from_settings(&settings).unwrap();
	fill_valid(&mut form);

	assert!(form.submit().is_accepted());
}

proptest! {
	#[test]
	fn prop_unchecking_every_interest_rejects(picked in proptest::sample::subsequence(vec!["coding", "reading", "sports"], 1..=3)) {
		let mut form = controller(FormVariant::Inline);
		fill_valid(&mut form);
		form.handle_checkbox("interests", "coding", false);
		for choice in &picked {
			form.handle_checkbox("interests", choice, true);
		}
		for choice in &picked {
			form.handle_checkbox("interests", choice, false);
		}

		let outcome = form.submit();

		prop_assert_eq!(
			outcome,
			SubmitOutcome::Rejected { errors: form.errors() }
		);
		let errors = form.errors();
		prop_assert_eq!(errors.get("interests"), Some("Select at least one interest"));
	}
}
