//! Registered client descriptor, its enumerations, and the default skeleton.
//!
//! A [`ClientDescriptor`] is assembled once per registration from a [`ClientDefaults`]
//! skeleton plus caller overrides (see [`builder`]). It is plain data: it owns no
//! handles and is serialized as-is by stores.

/// Builder API and override semantics for client descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	client::{ClientId, ClientName, ClientSecret},
};

macro_rules! def_enum {
	(
		$(#[$meta:meta])*
		$name:ident, $kind:literal {
			$($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(rename_all = "snake_case")]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
		}
		impl $name {
			/// Returns the stable wire label.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $label,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
		impl FromStr for $name {
			type Err = UnknownVariantError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($label => Ok(Self::$variant),)+
					_ => Err(UnknownVariantError { kind: $kind, value: s.to_owned() }),
				}
			}
		}
	};
}

def_enum! {
	/// Protocol flow the client is allowed to use.
	Flow, "flow" {
		/// Authorization Code flow.
		AuthorizationCode => "authorization_code",
		/// Implicit flow.
		Implicit => "implicit",
		/// Hybrid (code + id_token) flow.
		Hybrid => "hybrid",
		/// Client Credentials flow.
		ClientCredentials => "client_credentials",
		/// Resource Owner Password Credentials flow.
		ResourceOwner => "resource_owner",
		/// Provider-specific custom grant.
		Custom => "custom",
	}
}
def_enum! {
	/// Access token format issued to the client.
	AccessTokenType, "access token type" {
		/// Self-contained JWT.
		Jwt => "jwt",
		/// Reference token resolved through introspection.
		Reference => "reference",
	}
}
def_enum! {
	/// Refresh token handle reuse policy.
	TokenUsage, "token usage" {
		/// The handle stays the same across refreshes.
		ReUse => "re_use",
		/// A new handle is issued on every refresh.
		OneTimeOnly => "one_time_only",
	}
}
def_enum! {
	/// Refresh token expiration policy.
	TokenExpiration, "token expiration" {
		/// Lifetime slides forward on every refresh.
		Sliding => "sliding",
		/// Fixed lifetime from the original issuance.
		Absolute => "absolute",
	}
}
def_enum! {
	/// Key used to sign identity tokens for this client.
	SigningKeyType, "signing key type" {
		/// Provider-wide signing key.
		Default => "default",
		/// The client secret itself; requires a secret on the descriptor.
		ClientSecret => "client_secret",
	}
}

/// Error returned when parsing an enumeration from an unknown wire label.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown {kind}: {value}.")]
pub struct UnknownVariantError {
	/// Enumeration being parsed.
	pub kind: &'static str,
	/// Rejected input.
	pub value: String,
}

/// Error returned when a token lifetime falls outside `0..=i32::MAX` seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Token lifetime must be between 0 and {max} seconds, got {value}.")]
pub struct LifetimeError {
	/// Rejected number of seconds.
	pub value: i64,
	/// Largest accepted number of seconds.
	pub max: i64,
}

/// Non-negative token lifetime in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TokenLifetime(u32);
impl TokenLifetime {
	/// Largest accepted lifetime, in seconds.
	pub const MAX_SECONDS: i64 = i32::MAX as i64;

	const fn from_static(seconds: u32) -> Self {
		Self(seconds)
	}

	/// Validates a lifetime expressed in seconds.
	pub fn from_secs(seconds: i64) -> Result<Self, LifetimeError> {
		if (0..=Self::MAX_SECONDS).contains(&seconds) {
			Ok(Self(seconds as u32))
		} else {
			Err(LifetimeError { value: seconds, max: Self::MAX_SECONDS })
		}
	}

	/// Number of seconds.
	pub const fn as_secs(self) -> u32 {
		self.0
	}

	/// Lifetime as a [`time::Duration`].
	pub fn as_duration(self) -> time::Duration {
		time::Duration::seconds(self.0.into())
	}
}
impl TryFrom<i64> for TokenLifetime {
	type Error = LifetimeError;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		Self::from_secs(value)
	}
}
impl From<TokenLifetime> for i64 {
	fn from(value: TokenLifetime) -> Self {
		value.0.into()
	}
}

/// Default skeleton a descriptor is built from.
///
/// The [`Default`] impl carries the provider's stock client settings. Collections may be
/// pre-populated; overrides are appended after them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDefaults {
	/// Whether the client may request tokens.
	pub enabled: bool,
	/// Whether the consent screen is shown.
	pub require_consent: bool,
	/// Whether users may persist consent decisions.
	pub allow_remember_consent: bool,
	/// Whether local (non-federated) login is offered.
	pub allow_local_login: bool,
	/// Allowed protocol flow.
	pub flow: Flow,
	/// Access token format.
	pub access_token_type: AccessTokenType,
	/// Identity token lifetime.
	pub identity_token_lifetime: TokenLifetime,
	/// Access token lifetime.
	pub access_token_lifetime: TokenLifetime,
	/// Authorization code lifetime.
	pub authorization_code_lifetime: TokenLifetime,
	/// Maximum refresh token lifetime.
	pub absolute_refresh_token_lifetime: TokenLifetime,
	/// Sliding refresh token lifetime.
	pub sliding_refresh_token_lifetime: TokenLifetime,
	/// Refresh token reuse policy.
	pub refresh_token_usage: TokenUsage,
	/// Refresh token expiration policy.
	pub refresh_token_expiration: TokenExpiration,
	/// Identity token signing key.
	pub identity_token_signing_key_type: SigningKeyType,
	/// Allowed redirect URIs.
	pub redirect_uris: Vec<String>,
	/// Allowed post-logout redirect URIs.
	pub post_logout_redirect_uris: Vec<String>,
	/// External identity providers the client is restricted to.
	pub identity_provider_restrictions: Vec<String>,
	/// Scopes the client is restricted to.
	pub scope_restrictions: Vec<String>,
}
impl Default for ClientDefaults {
	fn default() -> Self {
		Self {
			enabled: true,
			require_consent: true,
			allow_remember_consent: true,
			allow_local_login: true,
			flow: Flow::Implicit,
			access_token_type: AccessTokenType::Jwt,
			identity_token_lifetime: TokenLifetime::from_static(300),
			access_token_lifetime: TokenLifetime::from_static(3_600),
			authorization_code_lifetime: TokenLifetime::from_static(300),
			absolute_refresh_token_lifetime: TokenLifetime::from_static(2_592_000),
			sliding_refresh_token_lifetime: TokenLifetime::from_static(1_296_000),
			refresh_token_usage: TokenUsage::OneTimeOnly,
			refresh_token_expiration: TokenExpiration::Absolute,
			identity_token_signing_key_type: SigningKeyType::Default,
			redirect_uris: Vec::new(),
			post_logout_redirect_uris: Vec::new(),
			identity_provider_restrictions: Vec::new(),
			scope_restrictions: Vec::new(),
		}
	}
}

/// Registered client configuration handed to the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDescriptor {
	/// Opaque client identifier.
	pub client_id: ClientId,
	/// Display name.
	pub client_name: ClientName,
	/// Processed client secret, if any.
	pub client_secret: Option<ClientSecret>,
	/// Informational home page of the client.
	pub client_uri: Option<Url>,
	/// Informational logo of the client.
	pub logo_uri: Option<Url>,
	/// Whether the client may request tokens.
	pub enabled: bool,
	/// Whether the consent screen is shown.
	pub require_consent: bool,
	/// Whether users may persist consent decisions.
	pub allow_remember_consent: bool,
	/// Whether local (non-federated) login is offered.
	pub allow_local_login: bool,
	/// Allowed protocol flow.
	pub flow: Flow,
	/// Access token format.
	pub access_token_type: AccessTokenType,
	/// Identity token lifetime.
	pub identity_token_lifetime: TokenLifetime,
	/// Access token lifetime.
	pub access_token_lifetime: TokenLifetime,
	/// Authorization code lifetime.
	pub authorization_code_lifetime: TokenLifetime,
	/// Maximum refresh token lifetime.
	pub absolute_refresh_token_lifetime: TokenLifetime,
	/// Sliding refresh token lifetime.
	pub sliding_refresh_token_lifetime: TokenLifetime,
	/// Refresh token reuse policy.
	pub refresh_token_usage: TokenUsage,
	/// Refresh token expiration policy.
	pub refresh_token_expiration: TokenExpiration,
	/// Identity token signing key.
	pub identity_token_signing_key_type: SigningKeyType,
	/// Allowed redirect URIs.
	pub redirect_uris: Vec<String>,
	/// Allowed post-logout redirect URIs.
	pub post_logout_redirect_uris: Vec<String>,
	/// External identity providers the client is restricted to.
	pub identity_provider_restrictions: Vec<String>,
	/// Scopes the client is restricted to.
	pub scope_restrictions: Vec<String>,
}
impl ClientDescriptor {
	/// Creates a new builder for the provided identity.
	pub fn builder(client_id: ClientId, client_name: ClientName) -> ClientDescriptorBuilder {
		ClientDescriptorBuilder::new(client_id, client_name)
	}

	/// Returns true when identity tokens are signed with the client secret.
	pub fn signs_with_client_secret(&self) -> bool {
		self.identity_token_signing_key_type == SigningKeyType::ClientSecret
	}
}
