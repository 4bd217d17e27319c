mod support;

// self
use client_registrar::{
	client::{ClientDescriptor, ClientSecret},
	store::{ClientStore, MemoryStore, StoreError},
};
use support::{client_id, client_name};

fn descriptor(id: &str) -> ClientDescriptor {
	ClientDescriptor::builder(client_id(id), client_name("Memory Store Client"))
		.client_secret(Some(ClientSecret::from_bytes(b"memory-store-secret")))
		.build()
		.expect("Failed to build memory-store test descriptor.")
}

#[tokio::test]
async fn insert_fetch_and_remove() {
	let store = MemoryStore::default();
	let descriptor = descriptor("svc-mem");

	store.insert(descriptor.clone()).await.expect("Insert into memory store should succeed.");

	assert_eq!(store.len(), 1);
	assert_eq!(
		store.fetch(&descriptor.client_id).await.expect("Fetch should succeed."),
		Some(descriptor.clone())
	);

	let removed = store.remove(&descriptor.client_id).await.expect("Remove should succeed.");

	assert_eq!(removed, Some(descriptor.clone()));
	assert!(store.is_empty());
	assert!(
		store.remove(&descriptor.client_id).await.expect("Second remove should succeed.").is_none()
	);
}

#[tokio::test]
async fn duplicate_ids_conflict_and_keep_the_original() {
	let store = MemoryStore::default();
	let original = descriptor("svc-dup");
	let mut replacement = descriptor("svc-dup");

	replacement.enabled = false;

	store.insert(original.clone()).await.expect("First insert should succeed.");

	let err = store.insert(replacement).await.expect_err("Duplicate insert should conflict.");

	assert_eq!(err, StoreError::Conflict { client_id: "svc-dup".into() });
	assert_eq!(
		store.fetch(&original.client_id).await.expect("Fetch should succeed."),
		Some(original)
	);
}

#[tokio::test]
async fn clones_share_state() {
	let store = MemoryStore::default();
	let handle = store.clone();

	handle.insert(descriptor("svc-shared")).await.expect("Insert through clone should succeed.");

	assert!(
		store
			.fetch(&client_id("svc-shared"))
			.await
			.expect("Fetch should succeed.")
			.is_some()
	);
}
