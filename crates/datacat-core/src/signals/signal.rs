//! Core Signal implementation

use super::core::{ReceiverFn, SignalName};
use super::error::SignalError;
use parking_lot::RwLock;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub(crate) struct ReceiverInfo<T: Send + Sync + 'static> {
	pub(crate) receiver: ReceiverFn<T>,
	pub(crate) dispatch_uid: Option<String>,
	/// Higher values execute first
	pub(crate) priority: i32,
}

impl<T: Send + Sync + 'static> Clone for ReceiverInfo<T> {
	fn clone(&self) -> Self {
		Self {
			receiver: Arc::clone(&self.receiver),
			dispatch_uid: self.dispatch_uid.clone(),
			priority: self.priority,
		}
	}
}

/// A signal that can dispatch events to connected receivers
///
/// Cloning a signal yields a handle to the same receiver list.
pub struct Signal<T: Send + Sync + 'static> {
	receivers: Arc<RwLock<Vec<ReceiverInfo<T>>>>,
	name: String,
}

impl<T: Send + Sync + 'static> Signal<T> {
	/// Create a new signal with a type-safe name
	///
	/// ```
	/// use datacat_core::signals::{Signal, SignalName};
	///
	/// let signal = Signal::<String>::new(SignalName::ON_CREATE);
	/// assert_eq!(signal.name(), "on_create");
	/// assert_eq!(signal.receiver_count(), 0);
	/// ```
	pub fn new(name: SignalName) -> Self {
		Self {
			receivers: Arc::new(RwLock::new(Vec::new())),
			name: name.as_str().to_string(),
		}
	}

	/// Name this signal was created with
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Connect a receiver with a dispatch uid and priority
	///
	/// # Arguments
	/// * `receiver` - The receiver function to connect
	/// * `dispatch_uid` - Optional unique identifier; connecting again with the
	///   same uid replaces the previous receiver
	/// * `priority` - Execution priority (higher values execute first)
	pub fn connect_with_options<F, Fut>(&self, receiver: F, dispatch_uid: Option<String>, priority: i32)
	where
		F: Fn(Arc<T>) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<(), SignalError>> + Send + 'static,
	{
		let boxed: ReceiverFn<T> = Arc::new(move |instance| Box::pin(receiver(instance)));
		let mut receivers = self.receivers.write();

		if let Some(ref uid) = dispatch_uid {
			receivers.retain(|r| r.dispatch_uid.as_ref() != Some(uid));
		}

		receivers.push(ReceiverInfo {
			receiver: boxed,
			dispatch_uid,
			priority,
		});

		// Stable sort keeps connection order among equal priorities
		receivers.sort_by(|a, b| b.priority.cmp(&a.priority));
	}

	/// Connect a receiver function to this signal
	pub fn connect<F, Fut>(&self, receiver: F)
	where
		F: Fn(Arc<T>) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<(), SignalError>> + Send + 'static,
	{
		self.connect_with_options(receiver, None, 0);
	}

	/// Disconnect a receiver by dispatch_uid
	pub fn disconnect(&self, dispatch_uid: &str) -> bool {
		let mut receivers = self.receivers.write();
		let original_len = receivers.len();
		receivers.retain(|r| r.dispatch_uid.as_deref() != Some(dispatch_uid));
		receivers.len() < original_len
	}

	/// Send signal to all connected receivers, stopping at the first error
	pub async fn send(&self, instance: T) -> Result<(), SignalError> {
		let instance = Arc::new(instance);
		let receivers = self.receivers.read().clone();

		tracing::trace!(signal = %self.name, receivers = receivers.len(), "sending signal");

		for receiver_info in receivers {
			(receiver_info.receiver)(Arc::clone(&instance)).await?;
		}

		Ok(())
	}

	/// Get number of connected receivers
	pub fn receiver_count(&self) -> usize {
		self.receivers.read().len()
	}
}

impl<T: Send + Sync + 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			receivers: Arc::clone(&self.receivers),
			name: self.name.clone(),
		}
	}
}

impl<T: Send + Sync + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("name", &self.name)
			.field("receiver_count", &self.receiver_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use parking_lot::Mutex;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	#[tokio::test]
	async fn test_send_reaches_every_receiver() {
		// Arrange
		let signal = Signal::<i32>::new(SignalName::ON_UPDATE);
		let counter = Arc::new(AtomicUsize::new(0));
		for _ in 0..3 {
			let counter = counter.clone();
			signal.connect(move |_| {
				let counter = counter.clone();
				async move {
					counter.fetch_add(1, Ordering::SeqCst);
					Ok(())
				}
			});
		}

		// Act
		signal.send(42).await.unwrap();

		// Assert
		assert_eq!(counter.load(Ordering::SeqCst), 3);
	}

	#[rstest]
	#[tokio::test]
	async fn test_priority_orders_receivers() {
		// Arrange
		let signal = Signal::<()>::new(SignalName::custom("ordering"));
		let order = Arc::new(Mutex::new(Vec::new()));
		for (label, priority) in [("low", 0), ("high", 10), ("mid", 5)] {
			let order = order.clone();
			signal.connect_with_options(
				move |_| {
					let order = order.clone();
					async move {
						order.lock().push(label);
						Ok(())
					}
				},
				None,
				priority,
			);
		}

		// Act
		signal.send(()).await.unwrap();

		// Assert
		assert_eq!(*order.lock(), vec!["high", "mid", "low"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_dispatch_uid_replaces_and_disconnects() {
		// Arrange
		let signal = Signal::<()>::new(SignalName::custom("uid"));
		signal.connect_with_options(|_| async { Ok(()) }, Some("recv".to_string()), 0);
		signal.connect_with_options(|_| async { Ok(()) }, Some("recv".to_string()), 0);

		// Act
		let count_before = signal.receiver_count();
		let removed = signal.disconnect("recv");

		// Assert
		assert_eq!(count_before, 1);
		assert!(removed);
		assert_eq!(signal.receiver_count(), 0);
		assert!(!signal.disconnect("recv"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_send_stops_at_first_failing_receiver() {
		// Arrange
		let signal = Signal::<()>::new(SignalName::custom("failing"));
		let counter = Arc::new(AtomicUsize::new(0));
		signal.connect_with_options(|_| async { Err(SignalError::new("boom")) }, None, 10);
		let after = counter.clone();
		signal.connect(move |_| {
			let after = after.clone();
			async move {
				after.fetch_add(1, Ordering::SeqCst);
				Ok(())
			}
		});

		// Act
		let result = signal.send(()).await;

		// Assert
		assert_eq!(result, Err(SignalError::new("boom")));
		assert_eq!(counter.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_clone_shares_receivers() {
		// Arrange
		let signal = Signal::<()>::new(SignalName::ON_CREATE);
		let cloned = signal.clone();

		// Act
		cloned.connect(|_| async { Ok(()) });

		// Assert
		assert_eq!(signal.receiver_count(), 1);
	}
}
