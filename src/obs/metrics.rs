// self
use crate::{flows::FlowKind, obs::DecodeOutcome};

/// Records an issued redirect via the global metrics recorder (when enabled).
pub fn record_redirect(flow: FlowKind) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("dnt_connect_redirect_total", "flow" => flow.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = flow;
	}
}

/// Records a decode outcome via the global metrics recorder (when enabled).
pub fn record_decode_outcome(outcome: DecodeOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("dnt_connect_decode_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
