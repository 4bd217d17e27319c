//! Registration orchestrator: secret validation, processing, and descriptor assembly.
//!
//! [`Registrar::register`] runs strictly in order: secret settings are validated against the
//! effective signing key type, the secret is derived and protected, and only then is the
//! descriptor built. A failure at any step returns before a descriptor exists.
//! [`Registrar::register_into`] additionally hands the result to a [`ClientStore`].

pub mod request;

pub use request::*;

// self
use crate::{
	_prelude::*,
	client::{ClientDefaults, ClientDescriptor, SensitiveString},
	obs::{self, RegistrationOutcome, RegistrationSpan, RegistrationStage},
	secret::{Diagnostic, SecretInput, SecretProcessor, SecretProtector},
	store::ClientStore,
};

/// Successful registration: the descriptor plus any non-fatal diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
	/// Assembled descriptor, ready for persistence.
	pub descriptor: ClientDescriptor,
	/// Warnings raised while validating secret settings.
	pub diagnostics: Vec<Diagnostic>,
}
impl Registration {
	/// Returns true when `diagnostic` was raised.
	pub fn has_diagnostic(&self, diagnostic: Diagnostic) -> bool {
		self.diagnostics.contains(&diagnostic)
	}
}

/// Builds client descriptors from registration requests.
///
/// The registrar holds the default skeleton and the optional protector; it keeps no
/// per-registration state, so one instance can serve concurrent callers.
#[derive(Clone, Default)]
pub struct Registrar {
	/// Skeleton every descriptor starts from.
	pub defaults: ClientDefaults,
	protector: Option<Arc<dyn SecretProtector>>,
}
impl Registrar {
	/// Creates a registrar without a protector.
	pub fn new(defaults: ClientDefaults) -> Self {
		Self { defaults, protector: None }
	}

	/// Protects every secret with `protector` before it is stored.
	pub fn with_protector(self, protector: impl 'static + SecretProtector) -> Self {
		self.with_shared_protector(Arc::new(protector))
	}

	/// Shares an existing protector handle.
	pub fn with_shared_protector(mut self, protector: Arc<dyn SecretProtector>) -> Self {
		self.protector = Some(protector);

		self
	}

	/// Returns true when a protector is configured.
	pub fn has_protector(&self) -> bool {
		self.protector.is_some()
	}

	/// Validates the request, processes its secret, and assembles the descriptor.
	pub fn register(&self, request: ClientRegistration) -> Result<Registration> {
		const STAGE: RegistrationStage = RegistrationStage::Register;

		let _span = RegistrationSpan::new(STAGE, &request.client_id).entered();

		obs::record_registration_outcome(STAGE, RegistrationOutcome::Attempt);

		let result = self.register_now(request);

		match &result {
			Ok(_) => obs::record_registration_outcome(STAGE, RegistrationOutcome::Success),
			Err(_e) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(error = %_e, "client registration rejected");

				obs::record_registration_outcome(STAGE, RegistrationOutcome::Failure);
			},
		}

		result
	}

	/// Registers the request and inserts the descriptor into `store`.
	///
	/// Nothing reaches the store when registration fails; a store rejection (e.g. a
	/// duplicate client id) is returned as [`Error::Storage`](crate::error::Error::Storage).
	pub async fn register_into(
		&self,
		store: &dyn ClientStore,
		request: ClientRegistration,
	) -> Result<Registration> {
		const STAGE: RegistrationStage = RegistrationStage::Persist;

		let registration = self.register(request)?;
		let span = RegistrationSpan::new(STAGE, &registration.descriptor.client_id);

		obs::record_registration_outcome(STAGE, RegistrationOutcome::Attempt);

		let stored = span.instrument(store.insert(registration.descriptor.clone())).await;

		match stored {
			Ok(()) => {
				obs::record_registration_outcome(STAGE, RegistrationOutcome::Success);

				Ok(registration)
			},
			Err(e) => {
				obs::record_registration_outcome(STAGE, RegistrationOutcome::Failure);

				Err(e.into())
			},
		}
	}

	fn register_now(&self, request: ClientRegistration) -> Result<Registration> {
		let ClientRegistration {
			client_id,
			client_name,
			client_secret,
			password,
			client_uri,
			logo_uri,
			overrides,
		} = request;
		let input = SecretInput::new(
			client_secret.as_ref().map(SensitiveString::expose),
			password.as_ref().map(SensitiveString::expose),
		);
		let processor = SecretProcessor::new(self.protector.as_deref());
		let diagnostics =
			processor.validate(&input, overrides.effective_signing_key_type(&self.defaults))?;

		for diagnostic in &diagnostics {
			obs::report_diagnostic(&client_id, *diagnostic);
		}

		let client_secret = processor.process(&input)?;
		let descriptor = ClientDescriptor::builder(client_id, client_name)
			.defaults(self.defaults.clone())
			.overrides(overrides)
			.client_uri(client_uri)
			.logo_uri(logo_uri)
			.client_secret(client_secret)
			.build()?;

		Ok(Registration { descriptor, diagnostics })
	}
}
impl Debug for Registrar {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Registrar")
			.field("defaults", &self.defaults)
			.field("has_protector", &self.has_protector())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		client::{ClientId, ClientName, ClientOverrides, SigningKeyType},
		error::Error,
		secret::{FnProtector, ProtectError, SecretError},
		store::MemoryStore,
	};

	fn request(id: &str) -> ClientRegistration {
		ClientRegistration::new(
			ClientId::new(id).expect("Client id fixture should be valid."),
			ClientName::new("Service One").expect("Client name fixture should be valid."),
		)
	}

	#[test]
	fn default_signing_key_type_participates_in_validation() {
		let defaults = ClientDefaults {
			identity_token_signing_key_type: SigningKeyType::ClientSecret,
			..ClientDefaults::default()
		};
		let registrar = Registrar::new(defaults);
		let err = registrar
			.register(request("svc1"))
			.expect_err("Default client_secret signing without a secret should fail.");

		assert!(matches!(err, Error::Secret(SecretError::MissingRequiredSecret)));

		let overrides = ClientOverrides {
			identity_token_signing_key_type: Some(SigningKeyType::Default),
			..ClientOverrides::default()
		};

		registrar
			.register(request("svc1").with_overrides(overrides))
			.expect("Overriding the signing key type should lift the requirement.");
	}

	#[test]
	fn protector_failure_prevents_descriptor() {
		let registrar = Registrar::default().with_protector(FnProtector::new(|_: &[u8]| {
			Err(ProtectError::new("kms unavailable"))
		}));
		let err = registrar
			.register(request("svc1").with_password("hunter2"))
			.expect_err("Protector failure should abort registration.");

		assert!(matches!(err, Error::Secret(SecretError::Protection(_))));
	}

	#[test]
	fn registrar_debug_hides_protector() {
		let registrar = Registrar::default().with_protector(FnProtector::new(|b: &[u8]| Ok(b.to_vec())));

		assert!(format!("{registrar:?}").contains("has_protector: true"));
	}

	#[tokio::test]
	async fn register_into_rejects_duplicates() {
		let registrar = Registrar::default();
		let store = MemoryStore::default();

		registrar
			.register_into(&store, request("svc1"))
			.await
			.expect("First registration should be stored.");

		let err = registrar
			.register_into(&store, request("svc1"))
			.await
			.expect_err("Duplicate client id should be rejected by the store.");

		assert!(matches!(err, Error::Storage(_)));
		assert_eq!(store.len(), 1);
	}
}
