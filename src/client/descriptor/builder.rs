// self
use crate::{
	_prelude::*,
	client::{
		AccessTokenType, ClientDefaults, ClientDescriptor, ClientId, ClientName, ClientSecret,
		Flow, SigningKeyType, TokenExpiration, TokenLifetime, TokenUsage,
	},
};

/// Errors raised while validating an assembled descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ClientDescriptorError {
	/// Identity tokens are signed with the client secret, but no secret was attached.
	#[error("Signing key type is client_secret but the descriptor has no client secret.")]
	MissingSigningSecret,
}

/// Caller-supplied settings layered over a [`ClientDefaults`] skeleton.
///
/// Every scalar is optional: `None` keeps the default. Lists are appended after the
/// defaults' collections, in the order given, without deduplication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOverrides {
	/// Overrides [`ClientDefaults::enabled`].
	pub enabled: Option<bool>,
	/// Overrides [`ClientDefaults::require_consent`].
	pub require_consent: Option<bool>,
	/// Overrides [`ClientDefaults::allow_remember_consent`].
	pub allow_remember_consent: Option<bool>,
	/// Overrides [`ClientDefaults::allow_local_login`].
	pub allow_local_login: Option<bool>,
	/// Overrides [`ClientDefaults::flow`].
	pub flow: Option<Flow>,
	/// Overrides [`ClientDefaults::access_token_type`].
	pub access_token_type: Option<AccessTokenType>,
	/// Overrides [`ClientDefaults::identity_token_lifetime`].
	pub identity_token_lifetime: Option<TokenLifetime>,
	/// Overrides [`ClientDefaults::access_token_lifetime`].
	pub access_token_lifetime: Option<TokenLifetime>,
	/// Overrides [`ClientDefaults::authorization_code_lifetime`].
	pub authorization_code_lifetime: Option<TokenLifetime>,
	/// Overrides [`ClientDefaults::absolute_refresh_token_lifetime`].
	pub absolute_refresh_token_lifetime: Option<TokenLifetime>,
	/// Overrides [`ClientDefaults::sliding_refresh_token_lifetime`].
	pub sliding_refresh_token_lifetime: Option<TokenLifetime>,
	/// Overrides [`ClientDefaults::refresh_token_usage`].
	pub refresh_token_usage: Option<TokenUsage>,
	/// Overrides [`ClientDefaults::refresh_token_expiration`].
	pub refresh_token_expiration: Option<TokenExpiration>,
	/// Overrides [`ClientDefaults::identity_token_signing_key_type`].
	pub identity_token_signing_key_type: Option<SigningKeyType>,
	/// Appended to [`ClientDefaults::redirect_uris`].
	pub redirect_uris: Vec<String>,
	/// Appended to [`ClientDefaults::post_logout_redirect_uris`].
	pub post_logout_redirect_uris: Vec<String>,
	/// Appended to [`ClientDefaults::identity_provider_restrictions`].
	pub identity_provider_restrictions: Vec<String>,
	/// Appended to [`ClientDefaults::scope_restrictions`].
	pub scope_restrictions: Vec<String>,
}
impl ClientOverrides {
	/// Signing key type that will be in effect once these overrides meet `defaults`.
	pub fn effective_signing_key_type(&self, defaults: &ClientDefaults) -> SigningKeyType {
		self.identity_token_signing_key_type.unwrap_or(defaults.identity_token_signing_key_type)
	}
}

/// Builder for [`ClientDescriptor`] values.
#[derive(Debug)]
pub struct ClientDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub client_id: ClientId,
	/// Display name for the descriptor being constructed.
	pub client_name: ClientName,
	/// Skeleton supplying every unset value.
	pub defaults: ClientDefaults,
	/// Caller overrides layered on the skeleton.
	pub overrides: ClientOverrides,
	/// Already-processed client secret.
	pub client_secret: Option<ClientSecret>,
	/// Optional client home page.
	pub client_uri: Option<Url>,
	/// Optional client logo.
	pub logo_uri: Option<Url>,
}
impl ClientDescriptorBuilder {
	/// Creates a new builder seeded with stock defaults and no overrides.
	pub fn new(client_id: ClientId, client_name: ClientName) -> Self {
		Self {
			client_id,
			client_name,
			defaults: ClientDefaults::default(),
			overrides: ClientOverrides::default(),
			client_secret: None,
			client_uri: None,
			logo_uri: None,
		}
	}

	/// Replaces the default skeleton.
	pub fn defaults(mut self, defaults: ClientDefaults) -> Self {
		self.defaults = defaults;

		self
	}

	/// Replaces the caller overrides.
	pub fn overrides(mut self, overrides: ClientOverrides) -> Self {
		self.overrides = overrides;

		self
	}

	/// Sets the processed client secret (or clears it with `None`).
	pub fn client_secret(mut self, secret: Option<ClientSecret>) -> Self {
		self.client_secret = secret;

		self
	}

	/// Sets the client home page.
	pub fn client_uri(mut self, url: Option<Url>) -> Self {
		self.client_uri = url;

		self
	}

	/// Sets the client logo.
	pub fn logo_uri(mut self, url: Option<Url>) -> Self {
		self.logo_uri = url;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ClientDescriptor, ClientDescriptorError> {
		let Self { client_id, client_name, defaults, overrides, client_secret, client_uri, logo_uri } =
			self;
		let descriptor = ClientDescriptor {
			client_id,
			client_name,
			client_secret,
			client_uri,
			logo_uri,
			enabled: overrides.enabled.unwrap_or(defaults.enabled),
			require_consent: overrides.require_consent.unwrap_or(defaults.require_consent),
			allow_remember_consent: overrides
				.allow_remember_consent
				.unwrap_or(defaults.allow_remember_consent),
			allow_local_login: overrides.allow_local_login.unwrap_or(defaults.allow_local_login),
			flow: overrides.flow.unwrap_or(defaults.flow),
			access_token_type: overrides.access_token_type.unwrap_or(defaults.access_token_type),
			identity_token_lifetime: overrides
				.identity_token_lifetime
				.unwrap_or(defaults.identity_token_lifetime),
			access_token_lifetime: overrides
				.access_token_lifetime
				.unwrap_or(defaults.access_token_lifetime),
			authorization_code_lifetime: overrides
				.authorization_code_lifetime
				.unwrap_or(defaults.authorization_code_lifetime),
			absolute_refresh_token_lifetime: overrides
				.absolute_refresh_token_lifetime
				.unwrap_or(defaults.absolute_refresh_token_lifetime),
			sliding_refresh_token_lifetime: overrides
				.sliding_refresh_token_lifetime
				.unwrap_or(defaults.sliding_refresh_token_lifetime),
			refresh_token_usage: overrides.refresh_token_usage.unwrap_or(defaults.refresh_token_usage),
			refresh_token_expiration: overrides
				.refresh_token_expiration
				.unwrap_or(defaults.refresh_token_expiration),
			identity_token_signing_key_type: overrides
				.identity_token_signing_key_type
				.unwrap_or(defaults.identity_token_signing_key_type),
			redirect_uris: append(defaults.redirect_uris, overrides.redirect_uris),
			post_logout_redirect_uris: append(
				defaults.post_logout_redirect_uris,
				overrides.post_logout_redirect_uris,
			),
			identity_provider_restrictions: append(
				defaults.identity_provider_restrictions,
				overrides.identity_provider_restrictions,
			),
			scope_restrictions: append(defaults.scope_restrictions, overrides.scope_restrictions),
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ClientDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), ClientDescriptorError> {
		if self.signs_with_client_secret() && self.client_secret.is_none() {
			return Err(ClientDescriptorError::MissingSigningSecret);
		}

		Ok(())
	}
}

fn append(mut base: Vec<String>, extra: Vec<String>) -> Vec<String> {
	base.extend(extra);

	base
}
