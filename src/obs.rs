//! Optional observability helpers for handshake operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `dnt_connect.handshake` with the `flow`
//!   (bounce/signon) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `dnt_connect_redirect_total` counter for every issued
//!   redirect (labeled by `flow`) and `dnt_connect_decode_total` for every decoded callback
//!   (labeled by `outcome`).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, token::DecodeResult};

/// Decode outcomes observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeOutcome {
	/// Tag verified; payload trusted.
	Authenticated,
	/// Structurally sound but the tag did not verify.
	Unverified,
	/// Structurally invalid at some layer.
	Malformed,
}
impl DecodeOutcome {
	/// Classifies a [`DecodeResult`].
	pub fn of(result: &DecodeResult) -> Self {
		match result {
			DecodeResult::Authenticated(_) => DecodeOutcome::Authenticated,
			DecodeResult::Unverified(_) => DecodeOutcome::Unverified,
			DecodeResult::Malformed(_) => DecodeOutcome::Malformed,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DecodeOutcome::Authenticated => "authenticated",
			DecodeOutcome::Unverified => "unverified",
			DecodeOutcome::Malformed => "malformed",
		}
	}
}
impl Display for DecodeOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
