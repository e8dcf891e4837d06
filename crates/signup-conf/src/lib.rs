//! Settings for the signup form
//!
//! Selects the form variant and configures the toast container. Settings are
//! read from TOML and can be overridden with `SIGNUP_*` environment variables.

pub mod settings;
pub mod sources;

pub use settings::{
	FormSettings, FormVariant, SettingsError, SettingsResult, ToastPosition, ToastSettings,
};
pub use sources::EnvSource;
