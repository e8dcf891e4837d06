//! Signup form page layer
//!
//! - [`Signal`]: observable state shared with the view
//! - [`FormController`]: field edits, submission and reset
//! - [`notify`]: success notifications as an inline banner, a toast or a log line
//! - [`rendering`]: HTML widgets and the form layout of each variant

pub mod controller;
pub mod messages;
pub mod notify;
pub mod rendering;
pub mod signal;

pub use controller::{FormController, FormPhase, SubmitOutcome};
pub use messages::{Level, MemoryStorage, Message, MessageStorage};
pub use notify::{InlineNotifier, LogNotifier, Notifier, Toast, ToastNotifier, VariantNotifier};
pub use rendering::{Widget, html_escape, render_form};
pub use signal::{Signal, SubscriptionId};
