//! Optional observability helpers for registrations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `client_registrar.register` with
//!   the `stage` and `client_id` fields, and one `WARN` event per [`Diagnostic`].
//! - Enable `metrics` to increment the `client_registrar_registration_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`, and
//!   `client_registrar_diagnostic_total` labeled by `code`.
//!
//! [`Diagnostic`]: crate::secret::Diagnostic

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Registration stages observed by the registrar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationStage {
	/// Validation, secret processing, and descriptor assembly.
	Register,
	/// Hand-off of the assembled descriptor to a store.
	Persist,
}
impl RegistrationStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationStage::Register => "register",
			RegistrationStage::Persist => "persist",
		}
	}
}
impl Display for RegistrationStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationOutcome {
	/// Entry to a registrar helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RegistrationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RegistrationOutcome::Attempt => "attempt",
			RegistrationOutcome::Success => "success",
			RegistrationOutcome::Failure => "failure",
		}
	}
}
impl Display for RegistrationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
