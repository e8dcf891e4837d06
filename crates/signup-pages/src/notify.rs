//! Success notification channels
//!
//! Each form variant reports an accepted submission through its own channel:
//! an inline banner, a toast, or the log.

use crate::messages::{Level, MemoryStorage, Message, MessageStorage};
use crate::rendering::{render_banner, render_toasts};
use signup_conf::{FormSettings, FormVariant, ToastPosition, ToastSettings};
use std::time::{Duration, Instant};

/// Where user-visible notifications go
pub trait Notifier {
	fn notify(&mut self, message: Message);

	/// Text announcing an accepted submission.
	fn success_text(&self) -> &str {
		"Form submitted successfully"
	}

	fn notify_success(&mut self) {
		let message = Message::new(Level::Success, self.success_text());
		self.notify(message);
	}

	/// HTML for notifications still visible at `now`.
	fn render(&self, _now: Instant) -> String {
		String::new()
	}

	/// Drop notifications that should no longer be shown once the user acts
	/// on the form again.
	fn dismiss_stale(&mut self, _now: Instant) {}
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
	fn notify(&mut self, message: Message) {
		(**self).notify(message)
	}

	fn success_text(&self) -> &str {
		(**self).success_text()
	}

	fn render(&self, now: Instant) -> String {
		(**self).render(now)
	}

	fn dismiss_stale(&mut self, now: Instant) {
		(**self).dismiss_stale(now)
	}
}

/// Alert banner shown above the form
#[derive(Debug, Clone, Default)]
pub struct InlineNotifier {
	storage: MemoryStorage,
}

impl InlineNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Messages waiting to be shown
	pub fn messages(&self) -> Vec<Message> {
		self.storage.peek()
	}

	/// Take the pending messages, e.g. once the banner is dismissed.
	pub fn take(&mut self) -> Vec<Message> {
		self.storage.get_all()
	}
}

impl Notifier for InlineNotifier {
	fn notify(&mut self, message: Message) {
		self.storage.add(message);
	}

	fn render(&self, _now: Instant) -> String {
		render_banner(&self.storage.peek())
	}

	/// The banner is shown until the next edit, submit or reset.
	fn dismiss_stale(&mut self, _now: Instant) {
		self.storage.clear();
	}
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
	pub message: Message,
	pub position: ToastPosition,
	pub auto_close: Duration,
	pub created_at: Instant,
}

impl Toast {
	/// Whether the toast has closed itself by `now`.
	pub fn is_expired(&self, now: Instant) -> bool {
		now.saturating_duration_since(self.created_at) >= self.auto_close
	}
}

/// Toast container
///
/// # Examples
///
/// ```
/// use signup_pages::notify::{Notifier, ToastNotifier};
/// use std::time::{Duration, Instant};
///
/// let mut toasts = ToastNotifier::default();
/// toasts.notify_success();
///
/// let shown = toasts.toasts()[0].created_at;
/// assert_eq!(toasts.active(shown).len(), 1);
/// assert!(toasts.active(shown + Duration::from_millis(2000)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ToastNotifier {
	position: ToastPosition,
	auto_close: Duration,
	toasts: Vec<Toast>,
}

impl ToastNotifier {
	pub fn new(position: ToastPosition, auto_close: Duration) -> Self {
		Self {
			position,
			auto_close,
			toasts: Vec::new(),
		}
	}

	pub fn from_settings(settings: &ToastSettings) -> Self {
		Self::new(settings.position, settings.auto_close())
	}

	pub fn position(&self) -> ToastPosition {
		self.position
	}

	/// Every toast shown so far that has not been dismissed
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}

	/// Toasts still visible at `now`.
	pub fn active(&self, now: Instant) -> Vec<&Toast> {
		self.toasts.iter().filter(|t| !t.is_expired(now)).collect()
	}

	/// Drop the toasts that have closed by `now`, returning how many were removed.
	pub fn dismiss_expired(&mut self, now: Instant) -> usize {
		let before = self.toasts.len();
		self.toasts.retain(|t| !t.is_expired(now));
		before - self.toasts.len()
	}
}

impl Default for ToastNotifier {
	fn default() -> Self {
		Self::from_settings(&ToastSettings::default())
	}
}

impl Notifier for ToastNotifier {
	fn notify(&mut self, message: Message) {
		let now = Instant::now();
		self.dismiss_expired(now);
		self.toasts.push(Toast {
			message,
			position: self.position,
			auto_close: self.auto_close,
			created_at: now,
		});
	}

	fn success_text(&self) -> &str {
		"Form Submitted Successfully!"
	}

	fn render(&self, now: Instant) -> String {
		render_toasts(self.position, &self.active(now))
	}

	fn dismiss_stale(&mut self, now: Instant) {
		self.dismiss_expired(now);
	}
}

/// Writes notifications to the log instead of the page
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
	fn notify(&mut self, message: Message) {
		tracing::info!(kind = message.level.as_str(), "{}", message.text);
	}
}

/// The notifier a [`FormVariant`] uses
#[derive(Debug, Clone)]
pub enum VariantNotifier {
	Inline(InlineNotifier),
	Toast(ToastNotifier),
	Log(LogNotifier),
}

impl VariantNotifier {
	pub fn for_variant(variant: FormVariant, settings: &FormSettings) -> Self {
		match variant {
			FormVariant::Inline => VariantNotifier::Inline(InlineNotifier::new()),
			FormVariant::Toast => VariantNotifier::Toast(ToastNotifier::from_settings(&settings.toast)),
			FormVariant::Headless => VariantNotifier::Log(LogNotifier),
		}
	}

	pub fn as_inline(&self) -> Option<&InlineNotifier> {
		match self {
			VariantNotifier::Inline(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_toast(&self) -> Option<&ToastNotifier> {
		match self {
			VariantNotifier::Toast(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_toast_mut(&mut self) -> Option<&mut ToastNotifier> {
		match self {
			VariantNotifier::Toast(inner) => Some(inner),
			_ => None,
		}
	}
}

impl Notifier for VariantNotifier {
	fn notify(&mut self, message: Message) {
		match self {
			VariantNotifier::Inline(inner) => inner.notify(message),
			VariantNotifier::Toast(inner) => inner.notify(message),
			VariantNotifier::Log(inner) => inner.notify(message),
		}
	}

	fn success_text(&self) -> &str {
		match self {
			VariantNotifier::Inline(inner) => inner.success_text(),
			VariantNotifier::Toast(inner) => inner.success_text(),
			VariantNotifier::Log(inner) => inner.success_text(),
		}
	}

	fn render(&self, now: Instant) -> String {
		match self {
			VariantNotifier::Inline(inner) => inner.render(now),
			VariantNotifier::Toast(inner) => inner.render(now),
			VariantNotifier::Log(inner) => inner.render(now),
		}
	}

	fn dismiss_stale(&mut self, now: Instant) {
		match self {
			VariantNotifier::Inline(inner) => inner.dismiss_stale(now),
			VariantNotifier::Toast(inner) => inner.dismiss_stale(now),
			VariantNotifier::Log(inner) => inner.dismiss_stale(now),
		}
	}
}
