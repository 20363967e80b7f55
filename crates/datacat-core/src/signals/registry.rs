//! Signal registry keyed by payload type and signal name

use super::core::SignalName;
use super::signal::Signal;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of signals keyed by payload type and name
///
/// The registry is meant to be owned by an application context and handed to
/// the code that emits or listens to model events. Cloning it yields a handle to
/// the same set of signals.
#[derive(Clone, Default)]
pub struct SignalRegistry {
	signals: Arc<RwLock<HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>>>,
}

impl SignalRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Get or create a signal for a specific payload type and name
	pub fn get_or_create<T: Send + Sync + 'static>(&self, name: SignalName) -> Signal<T> {
		let key = (TypeId::of::<T>(), name.as_str().to_string());

		{
			let signals = self.signals.read();
			if let Some(signal_any) = signals.get(&key)
				&& let Some(signal) = signal_any.downcast_ref::<Signal<T>>()
			{
				return signal.clone();
			}
		}

		let mut signals = self.signals.write();
		// Another caller may have inserted it between the two locks
		if let Some(signal_any) = signals.get(&key)
			&& let Some(signal) = signal_any.downcast_ref::<Signal<T>>()
		{
			return signal.clone();
		}
		let signal = Signal::new(name);
		signals.insert(key, Box::new(signal.clone()));
		signal
	}

	/// Number of distinct signals created so far
	pub fn len(&self) -> usize {
		self.signals.read().len()
	}

	/// Whether no signal has been created yet
	pub fn is_empty(&self) -> bool {
		self.signals.read().is_empty()
	}
}

impl std::fmt::Debug for SignalRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignalRegistry")
			.field("signals", &self.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_get_or_create_returns_shared_signal() {
		// Arrange
		let registry = SignalRegistry::new();

		// Act
		let first = registry.get_or_create::<String>(SignalName::ON_DELETE);
		first.connect(|_| async { Ok(()) });
		let second = registry.get_or_create::<String>(SignalName::ON_DELETE);

		// Assert
		assert_eq!(second.receiver_count(), 1);
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_signals_are_keyed_by_payload_type() {
		// Arrange
		let registry = SignalRegistry::new();

		// Act
		let strings = registry.get_or_create::<String>(SignalName::ON_UPDATE);
		let numbers = registry.get_or_create::<i64>(SignalName::ON_UPDATE);
		strings.connect(|_| async { Ok(()) });

		// Assert
		assert_eq!(numbers.receiver_count(), 0);
		assert_eq!(registry.len(), 2);
	}

	#[rstest]
	fn test_separate_registries_are_isolated() {
		// Arrange
		let a = SignalRegistry::new();
		let b = SignalRegistry::new();

		// Act
		a.get_or_create::<String>(SignalName::ON_CREATE)
			.connect(|_| async { Ok(()) });

		// Assert
		assert_eq!(b.get_or_create::<String>(SignalName::ON_CREATE).receiver_count(), 0);
		assert!(!b.is_empty());
	}
}
