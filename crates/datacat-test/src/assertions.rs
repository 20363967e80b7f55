//! Signal assertions

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use datacat_core::{Signal, SignalError};
use parking_lot::Mutex;

/// Counts emissions of a signal while alive
///
/// The recorder connects a receiver with a unique dispatch uid and
/// disconnects it on drop.
pub struct EmitRecorder<T: Send + Sync + 'static> {
	signal: Signal<T>,
	dispatch_uid: String,
	count: Arc<AtomicUsize>,
	last: Arc<Mutex<Option<Arc<T>>>>,
}

impl<T: Send + Sync + 'static> EmitRecorder<T> {
	pub fn attach(signal: &Signal<T>) -> Self {
		let dispatch_uid = format!("emit-recorder-{}", uuid::Uuid::new_v4());
		let count = Arc::new(AtomicUsize::new(0));
		let last = Arc::new(Mutex::new(None));

		let (receiver_count, receiver_last) = (count.clone(), last.clone());
		signal.connect_with_options(
			move |instance: Arc<T>| {
				receiver_count.fetch_add(1, Ordering::SeqCst);
				*receiver_last.lock() = Some(instance);
				async { Ok::<(), SignalError>(()) }
			},
			Some(dispatch_uid.clone()),
			0,
		);

		Self {
			signal: signal.clone(),
			dispatch_uid,
			count,
			last,
		}
	}

	pub fn count(&self) -> usize {
		self.count.load(Ordering::SeqCst)
	}

	/// Payload of the most recent emission
	pub fn last(&self) -> Option<Arc<T>> {
		self.last.lock().clone()
	}

	pub fn reset(&self) {
		self.count.store(0, Ordering::SeqCst);
		*self.last.lock() = None;
	}

	pub fn assert_emitted(&self) {
		assert!(
			self.count() > 0,
			"expected signal '{}' to be emitted",
			self.signal.name()
		);
	}

	pub fn assert_emitted_once(&self) {
		assert_eq!(
			self.count(),
			1,
			"expected signal '{}' to be emitted exactly once",
			self.signal.name()
		);
	}

	pub fn assert_not_emitted(&self) {
		assert_eq!(
			self.count(),
			0,
			"expected signal '{}' not to be emitted",
			self.signal.name()
		);
	}
}

impl<T: Send + Sync + 'static> Drop for EmitRecorder<T> {
	fn drop(&mut self) {
		self.signal.disconnect(&self.dispatch_uid);
	}
}

/// Await `action` and assert `signal` fired at least once meanwhile
///
/// Returns the output of `action`.
pub async fn assert_emit<T, F>(signal: &Signal<T>, action: F) -> F::Output
where
	T: Send + Sync + 'static,
	F: Future,
{
	let recorder = EmitRecorder::attach(signal);
	let output = action.await;
	recorder.assert_emitted();
	output
}

/// Await `action` and assert `signal` never fired meanwhile
pub async fn assert_not_emit<T, F>(signal: &Signal<T>, action: F) -> F::Output
where
	T: Send + Sync + 'static,
	F: Future,
{
	let recorder = EmitRecorder::attach(signal);
	let output = action.await;
	recorder.assert_not_emitted();
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use datacat_core::SignalName;

	#[tokio::test]
	async fn test_recorder_counts_and_detaches() {
		// Arrange
		let signal: Signal<String> = Signal::new(SignalName::custom("recorded"));
		let recorder = EmitRecorder::attach(&signal);

		// Act
		signal.send("one".to_string()).await.unwrap();
		signal.send("two".to_string()).await.unwrap();

		// Assert
		assert_eq!(recorder.count(), 2);
		assert_eq!(recorder.last().as_deref().map(String::as_str), Some("two"));
		drop(recorder);
		assert_eq!(signal.receiver_count(), 0);
	}

	#[tokio::test]
	async fn test_assert_emit_returns_action_output() {
		let signal: Signal<u32> = Signal::new(SignalName::custom("answer"));

		let output = assert_emit(&signal, async {
			signal.send(42).await.unwrap();
			"done"
		})
		.await;

		assert_eq!(output, "done");
	}

	#[tokio::test]
	#[should_panic(expected = "to be emitted")]
	async fn test_assert_emit_panics_when_silent() {
		let signal: Signal<u32> = Signal::new(SignalName::custom("silent"));

		assert_emit(&signal, async {}).await;
	}
}
