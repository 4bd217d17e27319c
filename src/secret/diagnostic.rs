//! Non-fatal findings reported alongside a successful registration.

// self
use crate::_prelude::*;

/// Warning raised while validating secret settings.
///
/// Diagnostics never change control flow or the produced descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
	/// No secret protector was configured; secrets are stored as plain base64.
	NoProtector,
	/// Both a literal secret and a password were supplied; the password wins.
	PasswordOverridesSecret,
}
impl Diagnostic {
	/// Returns a stable code suitable for log fields and metric labels.
	pub const fn code(self) -> &'static str {
		match self {
			Diagnostic::NoProtector => "no_protector",
			Diagnostic::PasswordOverridesSecret => "password_overrides_secret",
		}
	}

	/// Human-readable warning text.
	pub const fn message(self) -> &'static str {
		match self {
			Diagnostic::NoProtector => "No client secret protector set.",
			Diagnostic::PasswordOverridesSecret =>
				"Both a client secret and a password were supplied; the literal secret was discarded in favor of the password hash.",
		}
	}
}
impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.message())
	}
}
