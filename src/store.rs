//! Persistence contract for client descriptors plus built-in reference stores.
//!
//! The registrar never retains a descriptor; it hands each one to a [`ClientStore`], which
//! owns uniqueness of client identifiers.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientId},
};

/// Boxed future returned by [`ClientStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract implemented by client descriptor stores.
pub trait ClientStore
where
	Self: Send + Sync,
{
	/// Persists a new descriptor, rejecting identifiers that are already registered.
	fn insert(&self, descriptor: ClientDescriptor) -> StoreFuture<'_, ()>;

	/// Fetches the descriptor registered under `client_id`, if present.
	fn fetch<'a>(&'a self, client_id: &'a ClientId) -> StoreFuture<'a, Option<ClientDescriptor>>;

	/// Removes and returns the descriptor registered under `client_id`, if present.
	fn remove<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientDescriptor>>;
}

/// Error type produced by [`ClientStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// A descriptor with the same client identifier already exists.
	#[error("Client `{client_id}` is already registered.")]
	Conflict {
		/// Identifier that collided.
		client_id: String,
	},
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
impl StoreError {
	/// Builds a conflict error for `client_id`.
	pub fn conflict(client_id: &ClientId) -> Self {
		Self::Conflict { client_id: client_id.to_string() }
	}
}
