//! Signup form settings
//!
//! Settings are layered: built-in defaults, then a TOML document, then
//! environment variable overrides.
//!
//! ```toml
//! variant = "toast"
//! log_submissions = true
//!
//! [toast]
//! position = "top-right"
//! auto_close_ms = 2000
//! ```

use crate::sources::{EnvSource, parse_bool};
use serde::{Deserialize, Serialize};
use signup_forms::{FormError, SchemaWording};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {value}")]
	InvalidValue { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Which presentation of the signup form is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
	/// Every field rendered, errors inline, success shown as an alert banner
	#[default]
	Inline,
	/// Every field rendered with placeholders, success shown as a toast
	Toast,
	/// No inputs rendered, success written to the log
	Headless,
}

impl FormVariant {
	pub const ALL: [FormVariant; 3] = [FormVariant::Inline, FormVariant::Toast, FormVariant::Headless];

	pub fn as_str(&self) -> &'static str {
		match self {
			FormVariant::Inline => "inline",
			FormVariant::Toast => "toast",
			FormVariant::Headless => "headless",
		}
	}

	/// Message wording of the schema this variant validates with.
	pub fn wording(&self) -> SchemaWording {
		match self {
			FormVariant::Toast => SchemaWording::Toast,
			FormVariant::Inline | FormVariant::Headless => SchemaWording::Standard,
		}
	}

	/// Whether the variant renders its inputs.
	pub fn renders_fields(&self) -> bool {
		!matches!(self, FormVariant::Headless)
	}
}

impl fmt::Display for FormVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FormVariant {
	type Err = FormError;

	/// # Examples
	///
	/// ```
	/// use signup_conf::FormVariant;
	///
	/// assert_eq!("Toast".parse::<FormVariant>().unwrap(), FormVariant::Toast);
	/// assert!("modal".parse::<FormVariant>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"inline" => Ok(FormVariant::Inline),
			"toast" => Ok(FormVariant::Toast),
			"headless" => Ok(FormVariant::Headless),
			_ => Err(FormError::UnknownVariant(s.to_string())),
		}
	}
}

/// Screen corner a toast appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
	#[default]
	TopRight,
	TopCenter,
	TopLeft,
	BottomRight,
	BottomCenter,
	BottomLeft,
}

impl ToastPosition {
	pub fn as_str(&self) -> &'static str {
		match self {
			ToastPosition::TopRight => "top-right",
			ToastPosition::TopCenter => "top-center",
			ToastPosition::TopLeft => "top-left",
			ToastPosition::BottomRight => "bottom-right",
			ToastPosition::BottomCenter => "bottom-center",
			ToastPosition::BottomLeft => "bottom-left",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().replace('_', "-").as_str() {
			"top-right" => Some(ToastPosition::TopRight),
			"top-center" => Some(ToastPosition::TopCenter),
			"top-left" => Some(ToastPosition::TopLeft),
			"bottom-right" => Some(ToastPosition::BottomRight),
			"bottom-center" => Some(ToastPosition::BottomCenter),
			"bottom-left" => Some(ToastPosition::BottomLeft),
			_ => None,
		}
	}
}

/// Toast container options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
	pub position: ToastPosition,
	/// Milliseconds a toast stays visible
	pub auto_close_ms: u64,
}

impl ToastSettings {
	pub fn auto_close(&self) -> Duration {
		Duration::from_millis(self.auto_close_ms)
	}
}

impl Default for ToastSettings {
	fn default() -> Self {
		Self {
			position: ToastPosition::TopRight,
			auto_close_ms: 2000,
		}
	}
}

/// Top-level settings for a signup form
///
/// # Examples
///
/// ```
/// use signup_conf::{FormSettings, FormVariant, ToastPosition};
///
/// let settings = FormSettings::from_toml_str(r#"
///     variant = "toast"
///
///     [toast]
///     position = "bottom-left"
/// "#).unwrap();
///
/// assert_eq!(settings.variant, FormVariant::Toast);
/// assert_eq!(settings.toast.position, ToastPosition::BottomLeft);
/// assert_eq!(settings.toast.auto_close_ms, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	pub variant: FormVariant,
	pub toast: ToastSettings,
	/// Log accepted submissions (with sensitive fields redacted)
	pub log_submissions: bool,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			variant: FormVariant::Inline,
			toast: ToastSettings::default(),
			log_submissions: true,
		}
	}
}

impl FormSettings {
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&contents)?;
		tracing::debug!(path = %path.display(), variant = %settings.variant, "loaded form settings");
		Ok(settings)
	}

	/// Apply overrides from `source`.
	///
	/// Recognised keys (after the prefix): `variant`, `toast_position`,
	/// `toast_auto_close_ms`, `log_submissions`. Other keys are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::{FormSettings, FormVariant};
	/// use signup_conf::sources::EnvSource;
	///
	/// let mut settings = FormSettings::default();
	/// settings
	///     .apply_env(&EnvSource::from_vars([("SIGNUP_VARIANT", "headless")]))
	///     .unwrap();
	/// assert_eq!(settings.variant, FormVariant::Headless);
	/// ```
	pub fn apply_env(&mut self, source: &EnvSource) -> SettingsResult<()> {
		let invalid = |key: &str, value: &str| SettingsError::InvalidValue {
			key: format!("{}{}", source.prefix(), key.to_uppercase()),
			value: value.to_string(),
		};

		for (key, value) in source.load() {
			match key.as_str() {
				"variant" => {
					self.variant = value.parse().map_err(|_| invalid(&key, &value))?;
				}
				"toast_position" => {
					self.toast.position =
						ToastPosition::parse(&value).ok_or_else(|| invalid(&key, &value))?;
				}
				"toast_auto_close_ms" => {
					self.toast.auto_close_ms =
						value.trim().parse().map_err(|_| invalid(&key, &value))?;
				}
				"log_submissions" => {
					self.log_submissions = parse_bool(&value).ok_or_else(|| invalid(&key, &value))?;
				}
				_ => continue,
			}
			tracing::debug!(key = %key, "applied settings override");
		}

		Ok(())
	}

	/// Defaults, then the optional TOML file, then the process environment.
	pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
		let mut settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.apply_env(&EnvSource::new())?;
		Ok(settings)
	}
}
