//! Redacted wrappers for client secret material.

// crates.io
use base64::{
	DecodeError, Engine as _,
	alphabet,
	engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
// self
use crate::_prelude::*;

/// Standard-alphabet base64 that only accepts canonical, padded input.
pub(crate) const STRICT_BASE64: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

const GENERATED_SECRET_LEN: usize = 32;

/// Decodes `value` with [`STRICT_BASE64`], rejecting bad padding and foreign characters.
pub(crate) fn decode_strict(value: &str) -> Result<Vec<u8>, DecodeError> {
	STRICT_BASE64.decode(value)
}

/// Processed client secret as stored on a descriptor.
///
/// The value is always canonical base64: either a validated raw secret, a password digest,
/// or the output of a [`SecretProtector`](crate::secret::SecretProtector). Formatters redact
/// it so descriptors can be logged safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Parses an already-encoded secret, rejecting anything that is not canonical base64.
	pub fn parse(encoded: impl Into<String>) -> Result<Self, DecodeError> {
		let encoded = encoded.into();

		decode_strict(&encoded)?;

		Ok(Self(encoded))
	}

	/// Encodes raw secret bytes.
	pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
		Self(STRICT_BASE64.encode(bytes))
	}

	/// Mints a fresh random secret from 32 bytes of thread-local CSPRNG output.
	pub fn generate() -> Self {
		let bytes: [u8; GENERATED_SECRET_LEN] = rand::random();

		Self::from_bytes(bytes)
	}

	/// Returns the base64 value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Decodes the base64 value back into raw bytes.
	pub fn to_bytes(&self) -> Result<Vec<u8>, DecodeError> {
		decode_strict(&self.0)
	}
}
impl TryFrom<String> for ClientSecret {
	type Error = DecodeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl From<ClientSecret> for String {
	fn from(value: ClientSecret) -> Self {
		value.0
	}
}
impl AsRef<str> for ClientSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Raw sensitive input (literal secret or password) that must never reach logs.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SensitiveString(String);
impl SensitiveString {
	/// Wraps a sensitive string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl From<&str> for SensitiveString {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for SensitiveString {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for SensitiveString {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SensitiveString").field(&"<redacted>").finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = ClientSecret::parse("c2VjcmV0").expect("Fixture should be valid base64.");
		let raw = SensitiveString::new("hunter2");

		assert_eq!(format!("{secret:?}"), "ClientSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(format!("{raw:?}"), "SensitiveString(\"<redacted>\")");
	}

	#[test]
	fn strict_decoding_rejects_malformed_input() {
		assert!(decode_strict("not-base64!!").is_err());
		assert!(decode_strict("c2VjcmV0MQ").is_err(), "Missing padding must be rejected.");
		assert!(decode_strict("c2VjcmV0MR==").is_err(), "Non-canonical trailing bits must fail.");
		assert_eq!(
			decode_strict("c2VjcmV0MQ==").expect("Padded input should decode."),
			b"secret1".to_vec()
		);
	}

	#[test]
	fn generated_secrets_are_distinct_and_decodable() {
		let first = ClientSecret::generate();
		let second = ClientSecret::generate();

		assert_ne!(first, second);
		assert_eq!(
			first.to_bytes().expect("Generated secret should decode.").len(),
			GENERATED_SECRET_LEN
		);
	}

	#[test]
	fn deserialization_enforces_base64() {
		let secret: ClientSecret =
			serde_json::from_str("\"c2VjcmV0\"").expect("Valid secret should deserialize.");

		assert_eq!(secret.expose(), "c2VjcmV0");
		assert!(serde_json::from_str::<ClientSecret>("\"not-base64!!\"").is_err());
	}
}
