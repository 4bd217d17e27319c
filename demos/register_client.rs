//! Registers a password-backed client through a reversible demo protector and stores it in the
//! in-memory store, then registers a second client that signs with its secret but only supplies
//! a password, which is rejected.

// crates.io
use color_eyre::Result;
// self
use client_registrar::{
	client::{ClientId, ClientName, ClientOverrides, SigningKeyType},
	registrar::{ClientRegistration, Registrar},
	secret::FnProtector,
	store::{ClientStore, MemoryStore},
	url::Url,
};

const DEMO_KEY: u8 = 0x2A;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let store = MemoryStore::default();
	// Stand-in for a KMS envelope; never use XOR in production.
	let registrar = Registrar::default().with_protector(FnProtector::new(|secret: &[u8]| {
		Ok(secret.iter().map(|b| b ^ DEMO_KEY).collect())
	}));
	let overrides = ClientOverrides {
		redirect_uris: vec!["https://svc1.example/callback".into()],
		..ClientOverrides::default()
	};
	let request = ClientRegistration::new(ClientId::new("svc1")?, ClientName::new("Service One")?)
		.with_password("hunter2")
		.with_client_uri(Url::parse("https://svc1.example/")?)
		.with_overrides(overrides);
	let registration = registrar.register_into(&store, request).await?;

	println!("Registered descriptor: {:#?}", registration.descriptor);
	println!("Diagnostics: {:?}", registration.diagnostics);

	let rejected = registrar
		.register_into(
			&store,
			ClientRegistration::new(ClientId::new("svc2")?, ClientName::new("Service Two")?)
				.with_password("hunter2")
				.with_overrides(ClientOverrides {
					identity_token_signing_key_type: Some(SigningKeyType::ClientSecret),
					..ClientOverrides::default()
				}),
		)
		.await;

	if let Err(e) = rejected {
		println!("Second registration rejected: {e}");
	}

	let stored = store.fetch(&ClientId::new("svc1")?).await?;

	println!("Store holds svc1: {}", stored.is_some());

	Ok(())
}
