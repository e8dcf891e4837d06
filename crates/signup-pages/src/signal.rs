//! Signal - observable state
//!
//! `Signal<T>` holds a value shared through `Rc<RefCell<T>>` and runs every
//! subscriber synchronously after each `set()` or `update()`.
//!
//! ## Example
//!
//! ```
//! use signup_pages::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_by_subscriber = Rc::clone(&seen);
//! count.subscribe(move |n| seen_by_subscriber.set(*n));
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//! assert_eq!(seen.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(seen.get(), 43);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

struct Subscribers<T> {
	next_id: usize,
	entries: Vec<(SubscriptionId, Subscriber<T>)>,
}

/// A value that notifies subscribers when it changes
///
/// Clones share the same value and the same subscriber list.
///
/// Subscribers receive a shared borrow of the new value; a subscriber must
/// not call `set()` or `update()` on the signal it is subscribed to.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Subscribers<T>>>,
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Subscribers {
				next_id: 0,
				entries: Vec::new(),
			})),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Read the current value without cloning it
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&*self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the value in place, notifying subscribers once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		self.notify();
	}

	/// Run `f` after every change
	pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
		let subscriber: Subscriber<T> = Rc::new(f);
		let mut subscribers = self.subscribers.borrow_mut();
		let id = SubscriptionId(subscribers.next_id);
		subscribers.next_id += 1;
		subscribers.entries.push((id, subscriber));
		id
	}

	/// Returns `false` if `id` was not subscribed.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.subscribers.borrow_mut();
		let before = subscribers.entries.len();
		subscribers.entries.retain(|(entry, _)| *entry != id);
		subscribers.entries.len() != before
	}

	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().entries.len()
	}

	fn notify(&self) {
		// Snapshot so a subscriber may subscribe or unsubscribe while running.
		let snapshot: Vec<Subscriber<T>> = self
			.subscribers
			.borrow()
			.entries
			.iter()
			.map(|(_, f)| Rc::clone(f))
			.collect();

		let value = self.value.borrow();
		for subscriber in snapshot {
			subscriber(&*value);
		}
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

impl<T: Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}
