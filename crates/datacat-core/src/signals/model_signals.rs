//! Model lifecycle signals
//!
//! Convenience accessors for the lifecycle signals of a model type `T`.

use super::core::SignalName;
use super::registry::SignalRegistry;
use super::signal::Signal;

/// Sent after a document of type `T` has been inserted
pub fn on_create<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::ON_CREATE)
}

/// Sent after an existing document of type `T` has been saved
pub fn on_update<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::ON_UPDATE)
}

/// Sent after a document of type `T` transitions to deleted
pub fn on_delete<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::ON_DELETE)
}

/// Sent after every save of a document of type `T`
pub fn after_save<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::AFTER_SAVE)
}

/// Sent after a badge has been attached to a document of type `T`
pub fn on_badge_added<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::ON_BADGE_ADDED)
}

/// Sent after a badge has been removed from a document of type `T`
pub fn on_badge_removed<T: Send + Sync + 'static>(registry: &SignalRegistry) -> Signal<T> {
	registry.get_or_create::<T>(SignalName::ON_BADGE_REMOVED)
}
