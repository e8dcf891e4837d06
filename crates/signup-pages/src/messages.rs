//! User-visible messages and their storage

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Message levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Debug,
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

impl Level {
	/// # Examples
	///
	/// ```
	/// use signup_pages::messages::Level;
	///
	/// assert_eq!(Level::Success.as_str(), "success");
	/// assert_eq!(Level::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Error => "error",
		}
	}

	pub fn value(&self) -> i32 {
		match self {
			Level::Debug => 10,
			Level::Info => 20,
			Level::Success => 25,
			Level::Warning => 30,
			Level::Error => 40,
		}
	}
}

impl PartialOrd for Level {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Level {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.value().cmp(&other.value())
	}
}

/// A message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	pub level: Level,
	pub text: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}

impl Message {
	pub fn new(level: Level, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
			tags: Vec::new(),
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self::new(Level::Success, text)
	}

	pub fn with_tags(mut self, tags: Vec<String>) -> Self {
		self.tags = tags;
		self
	}

	/// CSS classes for the message: the level followed by any extra tags.
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::messages::{Level, Message};
	///
	/// let message = Message::new(Level::Success, "Saved").with_tags(vec!["banner".into()]);
	/// assert_eq!(message.css_classes(), "success banner");
	/// ```
	pub fn css_classes(&self) -> String {
		std::iter::once(self.level.as_str())
			.chain(self.tags.iter().map(String::as_str))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Trait for message storage backends
pub trait MessageStorage {
	/// Add a message
	fn add(&mut self, message: Message);

	/// Get all messages and clear storage
	fn get_all(&mut self) -> Vec<Message>;

	/// Get messages without clearing
	fn peek(&self) -> Vec<Message>;

	/// Clear all messages
	fn clear(&mut self);
}

/// In-memory message storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
	messages: VecDeque<Message>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl MessageStorage for MemoryStorage {
	fn add(&mut self, message: Message) {
		self.messages.push_back(message);
	}

	fn get_all(&mut self) -> Vec<Message> {
		self.messages.drain(..).collect()
	}

	fn peek(&self) -> Vec<Message> {
		self.messages.iter().cloned().collect()
	}

	fn clear(&mut self) {
		self.messages.clear();
	}
}
