// self
use crate::{
	_prelude::*,
	obs::{self, RegistrationStage},
	secret::Diagnostic,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRegistration<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRegistration<F> = F;

/// A span builder used by the registrar.
#[derive(Clone, Debug)]
pub struct RegistrationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RegistrationSpan {
	/// Creates a new span tagged with the provided stage + client identifier.
	pub fn new(stage: RegistrationStage, client_id: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("client_registrar.register", stage = stage.as_str(), client_id);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, client_id);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> RegistrationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			RegistrationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			RegistrationSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRegistration<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`RegistrationSpan::entered`].
pub struct RegistrationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for RegistrationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("RegistrationSpanGuard(..)")
	}
}

/// Surfaces a diagnostic as a `WARN` event (when tracing is enabled) and a counter tick.
pub fn report_diagnostic(client_id: &str, diagnostic: Diagnostic) {
	#[cfg(feature = "tracing")]
	tracing::warn!(client_id, code = diagnostic.code(), "{}", diagnostic.message());
	#[cfg(not(feature = "tracing"))]
	let _ = client_id;

	obs::record_diagnostic(diagnostic);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn registration_span_noop_without_subscriber() {
		let _guard = RegistrationSpan::new(RegistrationStage::Register, "svc1").entered();

		report_diagnostic("svc1", Diagnostic::NoProtector);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RegistrationSpan::new(RegistrationStage::Persist, "svc1");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
