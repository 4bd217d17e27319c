//! Registrar-level error types shared across secret handling, descriptors, and stores.

// self
use crate::{
	_prelude::*,
	client::{ClientDescriptorError, IdentifierError, LifetimeError},
	secret::SecretError,
	store::StoreError,
};

/// Registrar-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical registrar error exposed by public APIs.
///
/// Every variant is fatal: it is raised before a descriptor is assembled (or, for
/// [`Error::Storage`], before the descriptor is acknowledged by the store). Non-fatal
/// findings travel as [`Diagnostic`](crate::secret::Diagnostic) values instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Client secret settings are invalid or the protector failed.
	#[error(transparent)]
	Secret(#[from] SecretError),
	/// Administrator input could not be bound or failed field validation.
	#[error(transparent)]
	Input(#[from] InputError),
	/// The assembled descriptor violates a cross-field invariant.
	#[error(transparent)]
	Descriptor(#[from] ClientDescriptorError),
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		StoreError,
	),
}

/// Input binding and field validation failures.
#[derive(Debug, ThisError)]
pub enum InputError {
	/// Client identifier or display name is invalid.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),
	/// A token lifetime is outside the accepted range.
	#[error(transparent)]
	Lifetime(#[from] LifetimeError),
	/// Registration payload could not be deserialized.
	#[error("Registration input is malformed at `{path}`.")]
	Json {
		/// Path to the field that failed to deserialize.
		path: String,
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for InputError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Json { path, source: e.into_inner() }
	}
}
impl From<IdentifierError> for Error {
	fn from(e: IdentifierError) -> Self {
		Self::Input(e.into())
	}
}
impl From<LifetimeError> for Error {
	fn from(e: LifetimeError) -> Self {
		Self::Input(e.into())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn store_error_converts_into_registrar_error_with_source() {
		let store_error = StoreError::Backend { message: "database unreachable".into() };
		let error: Error = store_error.clone().into();

		assert!(matches!(error, Error::Storage(_)));
		assert!(error.to_string().contains("database unreachable"));

		let source = StdError::source(&error)
			.expect("Registrar error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn identifier_errors_surface_as_input_errors() {
		let error: Error = IdentifierError::Empty { kind: "Client id" }.into();

		assert!(matches!(error, Error::Input(InputError::Identifier(_))));
		assert_eq!(error.to_string(), "Client id cannot be empty.");
	}
}
