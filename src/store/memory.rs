//! Thread-safe in-memory [`ClientStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientId},
	store::{ClientStore, StoreError, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<ClientId, ClientDescriptor>>>;

/// Thread-safe storage backend that keeps descriptors in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Number of registered clients.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns true when no client is registered.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	fn insert_now(map: StoreMap, descriptor: ClientDescriptor) -> Result<(), StoreError> {
		let mut guard = map.write();

		if guard.contains_key(&descriptor.client_id) {
			return Err(StoreError::conflict(&descriptor.client_id));
		}

		guard.insert(descriptor.client_id.clone(), descriptor);

		Ok(())
	}
}
impl ClientStore for MemoryStore {
	fn insert(&self, descriptor: ClientDescriptor) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move { Self::insert_now(map, descriptor) })
	}

	fn fetch<'a>(&'a self, client_id: &'a ClientId) -> StoreFuture<'a, Option<ClientDescriptor>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.read().get(client_id).cloned()) })
	}

	fn remove<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientDescriptor>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.write().remove(client_id)) })
	}
}
