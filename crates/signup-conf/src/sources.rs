//! Environment variable source for settings overrides

use indexmap::IndexMap;

/// Default prefix for signup settings variables.
pub const DEFAULT_PREFIX: &str = "SIGNUP_";

/// Reads prefixed environment variables
///
/// Keys are returned without the prefix and lower-cased, so `SIGNUP_VARIANT`
/// is looked up as `variant`.
#[derive(Debug, Clone)]
pub struct EnvSource {
	prefix: String,
	fixed: Option<IndexMap<String, String>>,
}

impl EnvSource {
	/// Source reading the process environment with [`DEFAULT_PREFIX`].
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// assert_eq!(source.prefix(), "SIGNUP_");
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			fixed: None,
		}
	}

	/// Source over a fixed set of variables instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use signup_conf::sources::EnvSource;
	///
	/// let source = EnvSource::from_vars([("SIGNUP_VARIANT", "toast"), ("PATH", "/bin")]);
	/// let vars = source.load();
	/// assert_eq!(vars.get("variant").map(String::as_str), Some("toast"));
	/// assert!(vars.get("path").is_none());
	/// ```
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			fixed: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Collect every variable carrying the prefix.
	pub fn load(&self) -> IndexMap<String, String> {
		let vars: Box<dyn Iterator<Item = (String, String)>> = match &self.fixed {
			Some(fixed) => Box::new(fixed.clone().into_iter()),
			None => Box::new(std::env::vars()),
		};

		vars.filter_map(|(key, value)| {
			key.strip_prefix(&self.prefix)
				.map(|rest| (rest.to_lowercase(), value))
		})
		.collect()
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

/// Parse a boolean the way environment files usually spell it.
pub fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}
