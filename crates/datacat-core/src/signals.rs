//! Signal dispatch for model lifecycle events
//!
//! A [`Signal`] carries a snapshot of the affected record to every connected
//! receiver. Signals are looked up per payload type and name in a
//! [`SignalRegistry`], which is owned by the application context rather than
//! being a process-wide global.
//!
//! ```
//! use datacat_core::signals::{SignalName, SignalRegistry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let registry = SignalRegistry::new();
//! let signal = registry.get_or_create::<String>(SignalName::ON_UPDATE);
//!
//! signal.connect(|title| async move {
//!     assert_eq!(title.as_str(), "My reuse");
//!     Ok(())
//! });
//!
//! signal.send("My reuse".to_string()).await.unwrap();
//! # }
//! ```

pub mod core;
pub mod error;
pub mod model_signals;
pub mod registry;
pub mod signal;

pub use core::{ReceiverFn, SignalName};
pub use error::SignalError;
pub use registry::SignalRegistry;
pub use signal::Signal;
