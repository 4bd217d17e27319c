//! Administrator-facing registration input.

// self
use crate::{
	_prelude::*,
	client::{
		AccessTokenType, ClientId, ClientName, ClientOverrides, Flow, SensitiveString,
		SigningKeyType, TokenExpiration, TokenLifetime, TokenUsage,
	},
	error::InputError,
};

/// One client registration request, independent of the front end that collected it.
///
/// Identifiers and lifetimes are validated while the request is constructed (or
/// deserialized); secret settings are validated by the [`Registrar`](crate::registrar::Registrar).
/// The JSON form is flat: override fields sit next to `client_id` and `client_name`, and
/// unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RegistrationFields")]
pub struct ClientRegistration {
	/// Opaque client identifier.
	pub client_id: ClientId,
	/// Display name.
	pub client_name: ClientName,
	/// Literal base64 client secret.
	pub client_secret: Option<SensitiveString>,
	/// Password hashed into the client secret; wins over `client_secret`.
	pub password: Option<SensitiveString>,
	/// Informational client home page.
	pub client_uri: Option<Url>,
	/// Informational client logo.
	pub logo_uri: Option<Url>,
	/// Optional settings layered over the registrar's defaults.
	pub overrides: ClientOverrides,
}
impl ClientRegistration {
	/// Creates a request carrying only the mandatory identity.
	pub fn new(client_id: ClientId, client_name: ClientName) -> Self {
		Self {
			client_id,
			client_name,
			client_secret: None,
			password: None,
			client_uri: None,
			logo_uri: None,
			overrides: ClientOverrides::default(),
		}
	}

	/// Parses a JSON request, reporting the path of the first offending field.
	pub fn from_json(payload: &str) -> Result<Self, InputError> {
		let mut de = serde_json::Deserializer::from_str(payload);

		Ok(serde_path_to_error::deserialize(&mut de)?)
	}

	/// Sets the literal base64 client secret.
	pub fn with_client_secret(mut self, secret: impl Into<SensitiveString>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Sets the password the client secret is derived from.
	pub fn with_password(mut self, password: impl Into<SensitiveString>) -> Self {
		self.password = Some(password.into());

		self
	}

	/// Sets the client home page.
	pub fn with_client_uri(mut self, url: Url) -> Self {
		self.client_uri = Some(url);

		self
	}

	/// Sets the client logo.
	pub fn with_logo_uri(mut self, url: Url) -> Self {
		self.logo_uri = Some(url);

		self
	}

	/// Replaces the optional settings.
	pub fn with_overrides(mut self, overrides: ClientOverrides) -> Self {
		self.overrides = overrides;

		self
	}
}

// Wire shape of a registration. Every key is a direct field so binding errors keep their path.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistrationFields {
	client_id: ClientId,
	client_name: ClientName,
	client_secret: Option<SensitiveString>,
	password: Option<SensitiveString>,
	client_uri: Option<Url>,
	logo_uri: Option<Url>,
	enabled: Option<bool>,
	require_consent: Option<bool>,
	allow_remember_consent: Option<bool>,
	allow_local_login: Option<bool>,
	flow: Option<Flow>,
	access_token_type: Option<AccessTokenType>,
	identity_token_lifetime: Option<TokenLifetime>,
	access_token_lifetime: Option<TokenLifetime>,
	authorization_code_lifetime: Option<TokenLifetime>,
	absolute_refresh_token_lifetime: Option<TokenLifetime>,
	sliding_refresh_token_lifetime: Option<TokenLifetime>,
	refresh_token_usage: Option<TokenUsage>,
	refresh_token_expiration: Option<TokenExpiration>,
	identity_token_signing_key_type: Option<SigningKeyType>,
	#[serde(default)]
	redirect_uris: Vec<String>,
	#[serde(default)]
	post_logout_redirect_uris: Vec<String>,
	#[serde(default)]
	identity_provider_restrictions: Vec<String>,
	#[serde(default)]
	scope_restrictions: Vec<String>,
}
impl From<RegistrationFields> for ClientRegistration {
	fn from(fields: RegistrationFields) -> Self {
		let RegistrationFields {
			client_id,
			client_name,
			client_secret,
			password,
			client_uri,
			logo_uri,
			enabled,
			require_consent,
			allow_remember_consent,
			allow_local_login,
			flow,
			access_token_type,
			identity_token_lifetime,
			access_token_lifetime,
			authorization_code_lifetime,
			absolute_refresh_token_lifetime,
			sliding_refresh_token_lifetime,
			refresh_token_usage,
			refresh_token_expiration,
			identity_token_signing_key_type,
			redirect_uris,
			post_logout_redirect_uris,
			identity_provider_restrictions,
			scope_restrictions,
		} = fields;

		Self {
			client_id,
			client_name,
			client_secret,
			password,
			client_uri,
			logo_uri,
			overrides: ClientOverrides {
				enabled,
				require_consent,
				allow_remember_consent,
				allow_local_login,
				flow,
				access_token_type,
				identity_token_lifetime,
				access_token_lifetime,
				authorization_code_lifetime,
				absolute_refresh_token_lifetime,
				sliding_refresh_token_lifetime,
				refresh_token_usage,
				refresh_token_expiration,
				identity_token_signing_key_type,
				redirect_uris,
				post_logout_redirect_uris,
				identity_provider_restrictions,
				scope_restrictions,
			},
		}
	}
}
