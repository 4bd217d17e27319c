// self
use crate::{
	obs::{RegistrationOutcome, RegistrationStage},
	secret::Diagnostic,
};

/// Records a registration outcome via the global metrics recorder (when enabled).
pub fn record_registration_outcome(stage: RegistrationStage, outcome: RegistrationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"client_registrar_registration_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}

/// Counts a reported diagnostic via the global metrics recorder (when enabled).
pub fn record_diagnostic(diagnostic: Diagnostic) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("client_registrar_diagnostic_total", "code" => diagnostic.code())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = diagnostic;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_registration_outcome(RegistrationStage::Register, RegistrationOutcome::Failure);
		record_diagnostic(Diagnostic::NoProtector);
	}
}
