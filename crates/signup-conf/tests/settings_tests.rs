//! Settings file loading tests

use rstest::rstest;
use serial_test::serial;
use signup_conf::{FormSettings, FormVariant, SettingsError, ToastPosition};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
fn test_from_file() {
	// Arrange
	let file = write_settings(
		r#"
variant = "toast"
log_submissions = false

[toast]
position = "top-center"
auto_close_ms = 3500
"#,
	);

	// Act
	let settings = FormSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.variant, FormVariant::Toast);
	assert_eq!(settings.toast.position, ToastPosition::TopCenter);
	assert_eq!(settings.toast.auto_close_ms, 3500);
	assert!(!settings.log_submissions);
}

#[rstest]
fn test_partial_file_keeps_defaults() {
	let file = write_settings(r#"variant = "headless""#);

	let settings = FormSettings::from_file(file.path()).unwrap();

	assert_eq!(settings.variant, FormVariant::Headless);
	assert_eq!(settings.toast, Default::default());
	assert!(settings.log_submissions);
}

#[rstest]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let result = FormSettings::from_file(dir.path().join("absent.toml"));

	assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[rstest]
fn test_malformed_file() {
	let file = write_settings("variant = ");

	let result = FormSettings::from_file(file.path());

	assert!(matches!(result, Err(SettingsError::Toml(_))));
}

#[rstest]
#[serial]
fn test_load_applies_environment_after_file() {
	// Arrange
	let file = write_settings(r#"variant = "inline""#);
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		std::env::set_var("SIGNUP_VARIANT", "toast");
	}

	// Act
	let result = FormSettings::load(Some(file.path()));

	// SAFETY: see above.
	unsafe {
		std::env::remove_var("SIGNUP_VARIANT");
	}

	// Assert
	assert_eq!(result.unwrap().variant, FormVariant::Toast);
}

#[rstest]
fn test_settings_round_trip_through_toml() {
	let settings = FormSettings {
		variant: FormVariant::Toast,
		..Default::default()
	};

	let text = toml::to_string(&settings).unwrap();

	assert!(text.contains(r#"variant = "toast""#));
	assert!(text.contains(r#"position = "top-right""#));
	assert_eq!(FormSettings::from_toml_str(&text).unwrap(), settings);
}
