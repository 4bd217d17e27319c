//! JSON-file [`ClientStore`] for single-host deployments and admin tooling.
//!
//! The whole registry is rewritten on every mutation through a sibling `.tmp` file that is
//! renamed over the target. The in-memory map only changes once the write has landed, so a
//! failed write leaves memory and disk in agreement.

// std
use std::{
	fs::{self, File},
	io::{self, ErrorKind, Write},
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	client::{ClientDescriptor, ClientId},
	store::{ClientStore, StoreError, StoreFuture},
};

type Registry = HashMap<ClientId, ClientDescriptor>;

/// Persists client descriptors to a JSON array, sorted by client id.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	registry: Arc<RwLock<Registry>>,
}
impl FileStore {
	/// Opens the registry at `path`. A missing or empty file starts an empty registry.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		let registry = match fs::read(&path) {
			Ok(bytes) if bytes.is_empty() => Registry::new(),
			Ok(bytes) => {
				let descriptors: Vec<ClientDescriptor> =
					serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
						message: format!("Failed to parse {}: {e}", path.display()),
					})?;

				descriptors.into_iter().map(|d| (d.client_id.clone(), d)).collect()
			},
			Err(e) if e.kind() == ErrorKind::NotFound => Registry::new(),
			Err(e) => return Err(io_failure("read", &path, e)),
		};

		Ok(Self { path, registry: Arc::new(RwLock::new(registry)) })
	}

	/// Location of the registry file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn write_registry<'a>(
		&self,
		descriptors: impl Iterator<Item = &'a ClientDescriptor>,
	) -> Result<(), StoreError> {
		let mut ordered: Vec<_> = descriptors.collect();

		ordered.sort_unstable_by(|a, b| a.client_id.cmp(&b.client_id));

		let bytes = serde_json::to_vec_pretty(&ordered).map_err(|e| {
			StoreError::Serialization { message: format!("Failed to encode client registry: {e}") }
		})?;

		if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
			fs::create_dir_all(dir).map_err(|e| io_failure("create", dir, e))?;
		}

		let staging = self.path.with_extension("tmp");

		File::create(&staging)
			.and_then(|mut file| {
				file.write_all(&bytes)?;
				file.sync_all()
			})
			.map_err(|e| io_failure("write", &staging, e))?;
		fs::rename(&staging, &self.path).map_err(|e| io_failure("replace", &self.path, e))
	}
}
impl ClientStore for FileStore {
	fn insert(&self, descriptor: ClientDescriptor) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut registry = self.registry.write();

			if registry.contains_key(&descriptor.client_id) {
				return Err(StoreError::conflict(&descriptor.client_id));
			}

			self.write_registry(registry.values().chain([&descriptor]))?;
			registry.insert(descriptor.client_id.clone(), descriptor);

			Ok(())
		})
	}

	fn fetch<'a>(&'a self, client_id: &'a ClientId) -> StoreFuture<'a, Option<ClientDescriptor>> {
		Box::pin(async move { Ok(self.registry.read().get(client_id).cloned()) })
	}

	fn remove<'a>(
		&'a self,
		client_id: &'a ClientId,
	) -> StoreFuture<'a, Option<ClientDescriptor>> {
		Box::pin(async move {
			let mut registry = self.registry.write();

			if !registry.contains_key(client_id) {
				return Ok(None);
			}

			self.write_registry(registry.values().filter(|d| &d.client_id != client_id))?;

			Ok(registry.remove(client_id))
		})
	}
}

fn io_failure(action: &str, path: &Path, e: io::Error) -> StoreError {
	StoreError::Backend { message: format!("Failed to {action} {}: {e}", path.display()) }
}
