//! Secret protection contract that lets callers wrap secret bytes before storage.

// self
use crate::_prelude::*;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a [`SecretProtector`].
#[derive(Debug, ThisError)]
#[error("Secret protector failed: {message}.")]
pub struct ProtectError {
	/// Human-readable error payload.
	pub message: String,
	/// Underlying failure, when the protector wraps another library.
	#[source]
	pub source: Option<BoxError>,
}
impl ProtectError {
	/// Creates an error without an underlying source.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), source: None }
	}

	/// Wraps an underlying failure.
	pub fn with_source(
		message: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self { message: message.into(), source: Some(Box::new(src)) }
	}
}

/// Transforms raw secret bytes (e.g., envelope encryption) before they are stored.
///
/// The registrar calls [`protect`](Self::protect) at most once per registration, and only
/// when a secret or password was supplied. Implementations must be safe to call from
/// concurrent registrations.
pub trait SecretProtector
where
	Self: Send + Sync,
{
	/// Returns the protected form of `secret`.
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError>;
}
impl<T> SecretProtector for &T
where
	T: ?Sized + SecretProtector,
{
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError> {
		(**self).protect(secret)
	}
}
impl<T> SecretProtector for Arc<T>
where
	T: ?Sized + SecretProtector,
{
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError> {
		(**self).protect(secret)
	}
}
impl<T> SecretProtector for Box<T>
where
	T: ?Sized + SecretProtector,
{
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError> {
		(**self).protect(secret)
	}
}

/// Adapts a closure into a [`SecretProtector`].
#[derive(Clone)]
pub struct FnProtector<F>(F);
impl<F> FnProtector<F>
where
	F: Fn(&[u8]) -> Result<Vec<u8>, ProtectError> + Send + Sync,
{
	/// Wraps the provided closure.
	pub fn new(f: F) -> Self {
		Self(f)
	}
}
impl<F> SecretProtector for FnProtector<F>
where
	F: Fn(&[u8]) -> Result<Vec<u8>, ProtectError> + Send + Sync,
{
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError> {
		(self.0)(secret)
	}
}
impl<F> Debug for FnProtector<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnProtector(..)")
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	fn reverse() -> FnProtector<impl Fn(&[u8]) -> Result<Vec<u8>, ProtectError> + Send + Sync> {
		FnProtector::new(|bytes: &[u8]| Ok(bytes.iter().rev().copied().collect()))
	}

	fn run<P>(protector: P) -> Vec<u8>
	where
		P: SecretProtector,
	{
		protector.protect(&[1, 2, 3]).expect("Borrowed protector should succeed.")
	}

	#[test]
	fn closures_and_smart_pointers_protect_identically() {
		let direct = reverse();
		let shared: Arc<dyn SecretProtector> = Arc::new(reverse());
		let boxed: Box<dyn SecretProtector> = Box::new(reverse());
		let expected = vec![3, 2, 1];

		assert_eq!(direct.protect(&[1, 2, 3]).expect("Closure protector should succeed."), expected);
		assert_eq!(shared.protect(&[1, 2, 3]).expect("Arc protector should succeed."), expected);
		assert_eq!(boxed.protect(&[1, 2, 3]).expect("Box protector should succeed."), expected);
		assert_eq!(run(&direct), expected);
	}

	#[test]
	fn protect_error_exposes_source() {
		let io = std::io::Error::other("kms unavailable");
		let err = ProtectError::with_source("wrap failed", io);

		assert_eq!(err.to_string(), "Secret protector failed: wrap failed.");
		assert_eq!(
			StdError::source(&err).expect("Wrapped error should be exposed as source.").to_string(),
			"kms unavailable"
		);
		assert!(StdError::source(&ProtectError::new("plain")).is_none());
	}
}
