//! Validation and transformation of client secret input.

// crates.io
use base64::DecodeError;
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	client::{ClientSecret, SigningKeyType, credential},
	secret::{Diagnostic, ProtectError, SecretProtector},
};

/// Fatal secret configuration and protection failures.
#[derive(Debug, ThisError)]
pub enum SecretError {
	/// The signing key type requires a client secret, but none was supplied.
	#[error("No client secret specified but signing key specified as client secret.")]
	MissingRequiredSecret,
	/// The supplied client secret is not canonical base64.
	#[error("Client secret is not a base64 encoded string.")]
	InvalidSecretEncoding {
		/// Underlying decoder failure.
		#[from]
		source: DecodeError,
	},
	/// The configured protector rejected the secret.
	#[error(transparent)]
	Protection(#[from] ProtectError),
}

/// Normalized secret input: a literal base64 secret and/or a password.
///
/// Secrets are trimmed and passwords are kept verbatim; in both cases an empty value counts
/// as absent.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretInput<'a> {
	secret: Option<&'a str>,
	password: Option<&'a str>,
}
impl<'a> SecretInput<'a> {
	/// Normalizes raw secret and password input.
	pub fn new(secret: Option<&'a str>, password: Option<&'a str>) -> Self {
		Self {
			secret: secret.map(str::trim).filter(|s| !s.is_empty()),
			password: password.filter(|p| !p.is_empty()),
		}
	}

	/// Literal secret, if supplied.
	pub fn secret(&self) -> Option<&'a str> {
		self.secret
	}

	/// Password, if supplied.
	pub fn password(&self) -> Option<&'a str> {
		self.password
	}

	/// Returns true when neither a secret nor a password was supplied.
	pub fn is_empty(&self) -> bool {
		self.secret.is_none() && self.password.is_none()
	}
}
impl Debug for SecretInput<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SecretInput")
			.field("secret", &self.secret.map(|_| "<redacted>"))
			.field("password", &self.password.map(|_| "<redacted>"))
			.finish()
	}
}

/// Validates secret settings and produces the stored secret value.
#[derive(Clone, Copy, Default)]
pub struct SecretProcessor<'p> {
	protector: Option<&'p dyn SecretProtector>,
}
impl<'p> SecretProcessor<'p> {
	/// Creates a processor with an optional protector.
	pub fn new(protector: Option<&'p dyn SecretProtector>) -> Self {
		Self { protector }
	}

	/// Creates a processor that protects every secret with `protector`.
	pub fn protected(protector: &'p dyn SecretProtector) -> Self {
		Self::new(Some(protector))
	}

	/// Returns true when a protector is configured.
	pub fn has_protector(&self) -> bool {
		self.protector.is_some()
	}

	/// Checks secret settings against the effective signing key type.
	///
	/// Client-secret signing requires a literal secret; a password alone does not satisfy it.
	/// Runs even when no secret was supplied so the missing-protector warning is reported
	/// consistently. Returns the non-fatal diagnostics on success.
	pub fn validate(
		&self,
		input: &SecretInput<'_>,
		signing_key_type: SigningKeyType,
	) -> Result<Vec<Diagnostic>, SecretError> {
		if input.secret.is_none() && signing_key_type == SigningKeyType::ClientSecret {
			return Err(SecretError::MissingRequiredSecret);
		}
		if let Some(secret) = input.secret {
			credential::decode_strict(secret)?;
		}

		let mut diagnostics = Vec::new();

		if input.secret.is_some() && input.password.is_some() {
			diagnostics.push(Diagnostic::PasswordOverridesSecret);
		}
		if self.protector.is_none() {
			diagnostics.push(Diagnostic::NoProtector);
		}

		Ok(diagnostics)
	}

	/// Derives the stored secret.
	///
	/// A password always wins over a literal secret and is replaced by its SHA-256 digest.
	/// With a protector, the working secret's raw bytes are protected and re-encoded;
	/// without one, the working secret is returned unchanged.
	pub fn process(&self, input: &SecretInput<'_>) -> Result<Option<ClientSecret>, SecretError> {
		let working = match (input.secret, input.password) {
			(None, None) => return Ok(None),
			(_, Some(password)) => {
				#[cfg(feature = "tracing")]
				tracing::debug!("deriving client secret from password");

				ClientSecret::from_bytes(hash_password(password))
			},
			(Some(secret), None) => ClientSecret::parse(secret)?,
		};
		let Some(protector) = self.protector else {
			return Ok(Some(working));
		};
		let protected = protector.protect(&working.to_bytes()?)?;

		#[cfg(feature = "tracing")]
		tracing::debug!(protected_len = protected.len(), "protected client secret");

		Ok(Some(ClientSecret::from_bytes(protected)))
	}
}
impl Debug for SecretProcessor<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SecretProcessor").field("has_protector", &self.has_protector()).finish()
	}
}

/// SHA-256 digest of the password's UTF-8 bytes.
pub fn hash_password(password: &str) -> [u8; 32] {
	Sha256::digest(password.as_bytes()).into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::secret::FnProtector;

	// base64(SHA-256("hunter2"))
	const HUNTER2_HASH: &str = "9S+9MrKzuG/4jvbEkGKChfSCrxXdyylUH5S89Saj9sc=";

	fn xor() -> FnProtector<impl Fn(&[u8]) -> Result<Vec<u8>, ProtectError> + Send + Sync> {
		FnProtector::new(|bytes: &[u8]| Ok(bytes.iter().map(|b| b ^ 0xFF).collect()))
	}

	#[test]
	fn valid_secret_without_protector_passes_through() {
		let processor = SecretProcessor::default();
		let input = SecretInput::new(Some("c2VjcmV0MQ=="), None);
		let diagnostics = processor
			.validate(&input, SigningKeyType::Default)
			.expect("Valid base64 secret should pass validation.");
		let secret = processor
			.process(&input)
			.expect("Processing should succeed.")
			.expect("Secret should be present.");

		assert_eq!(secret.expose(), "c2VjcmV0MQ==");
		assert_eq!(diagnostics, [Diagnostic::NoProtector]);
	}

	#[test]
	fn password_is_hashed_and_overrides_secret() {
		let processor = SecretProcessor::default();
		let input = SecretInput::new(Some("c2VjcmV0MQ=="), Some("hunter2"));
		let diagnostics = processor
			.validate(&input, SigningKeyType::Default)
			.expect("Secret and password together should pass validation.");
		let secret = processor
			.process(&input)
			.expect("Processing should succeed.")
			.expect("Password should derive a secret.");

		assert_eq!(secret.expose(), HUNTER2_HASH);
		assert_eq!(diagnostics, [Diagnostic::PasswordOverridesSecret, Diagnostic::NoProtector]);
	}

	#[test]
	fn empty_input_yields_absent_secret() {
		let processor = SecretProcessor::default();
		let input = SecretInput::new(Some("   "), Some(""));

		assert!(input.is_empty());
		assert!(processor.process(&input).expect("Processing should succeed.").is_none());
		assert!(matches!(
			processor.validate(&input, SigningKeyType::ClientSecret),
			Err(SecretError::MissingRequiredSecret)
		));
	}

	#[test]
	fn password_alone_does_not_satisfy_client_secret_signing() {
		let processor = SecretProcessor::default();
		let input = SecretInput::new(None, Some("hunter2"));

		assert!(matches!(
			processor.validate(&input, SigningKeyType::ClientSecret),
			Err(SecretError::MissingRequiredSecret)
		));
		assert_eq!(
			processor
				.validate(&input, SigningKeyType::Default)
				.expect("A password is enough without client-secret signing."),
			[Diagnostic::NoProtector]
		);
	}

	#[test]
	fn malformed_secret_is_rejected_even_with_password() {
		let processor = SecretProcessor::default();
		let input = SecretInput::new(Some("not-base64!!"), Some("hunter2"));

		assert!(matches!(
			processor.validate(&input, SigningKeyType::ClientSecret),
			Err(SecretError::InvalidSecretEncoding { .. })
		));
	}

	#[test]
	fn protector_wraps_decoded_bytes() {
		let protector = xor();
		let processor = SecretProcessor::protected(&protector);
		let input = SecretInput::new(Some("AAEC"), None);
		let diagnostics = processor
			.validate(&input, SigningKeyType::Default)
			.expect("Valid base64 secret should pass validation.");
		let secret = processor
			.process(&input)
			.expect("Processing should succeed.")
			.expect("Secret should be present.");

		assert!(diagnostics.is_empty());
		// [0x00, 0x01, 0x02] ^ 0xFF = [0xFF, 0xFE, 0xFD]
		assert_eq!(secret.expose(), "//79");
	}

	#[test]
	fn protector_failure_aborts_processing() {
		let failing = FnProtector::new(|_: &[u8]| Err(ProtectError::new("kms unavailable")));
		let processor = SecretProcessor::protected(&failing);
		let input = SecretInput::new(None, Some("hunter2"));

		assert!(matches!(processor.process(&input), Err(SecretError::Protection(_))));
	}

	#[test]
	fn password_hash_is_deterministic() {
		assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
		assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
	}

	#[test]
	fn input_debug_redacts_values() {
		let input = SecretInput::new(Some("c2VjcmV0"), Some("hunter2"));
		let rendered = format!("{input:?}");

		assert!(!rendered.contains("hunter2"));
		assert!(!rendered.contains("c2VjcmV0"));
	}
}
