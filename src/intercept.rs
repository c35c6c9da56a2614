//! Per-request interception: redirect to the provider, or validate a returned token.

// self
use crate::{
	_prelude::*,
	error::Rejection,
	flows::{Connect, FlowKind},
	obs::HandshakeSpan,
	token::DecodeResult,
};

/// Snapshot of an inbound request's own absolute URL (scheme + host + original path and query).
///
/// Hosts build one per request; the URL doubles as the return address when the interceptor
/// issues a redirect, so the provider sends the user back to exactly where they started.
#[derive(Clone, Debug)]
pub struct InboundRequest {
	url: Url,
}
impl InboundRequest {
	/// Wraps the request's reconstructed absolute URL.
	pub fn new(url: Url) -> Self {
		Self { url }
	}

	/// The request's own URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Extracts the callback pair when both fields are present.
	///
	/// Values come back percent-decoded by the query parser; the codec tolerates that, matching
	/// how the provider's SDKs double-decode.
	pub fn callback_params(&self) -> Option<(String, String)> {
		let mut data = None;
		let mut hmac = None;

		for (key, value) in self.url.query_pairs() {
			match key.as_ref() {
				"data" => data = Some(value.into_owned()),
				"hmac" => hmac = Some(value.into_owned()),
				_ => {},
			}
		}

		data.zip(hmac)
	}
}
impl From<Url> for InboundRequest {
	fn from(url: Url) -> Self {
		Self::new(url)
	}
}

/// Instruction handed back to the host for one request.
///
/// The host owns the mapping to HTTP semantics (status codes, response bodies); the core only
/// supplies the classification.
#[derive(Debug)]
pub enum Action {
	/// Send the user to the provider at this URL.
	Redirect(Url),
	/// The callback token verified; the payload can be trusted.
	Authenticated(Value),
	/// The callback token was rejected; any decrypted payload was discarded.
	Rejected(Rejection),
}

/// Per-request state machine deciding between the redirect and validation branches.
///
/// Stateless across requests; each request is handled exactly once and nothing loops or
/// retries. The flow is fixed at construction, never inferred from the request.
#[derive(Clone, Debug)]
pub struct Interceptor {
	connect: Connect,
	flow: FlowKind,
}
impl Interceptor {
	/// Binds a client to a flow.
	pub fn new(connect: Connect, flow: FlowKind) -> Self {
		Self { connect, flow }
	}

	/// Flow this interceptor redirects into.
	pub fn flow(&self) -> FlowKind {
		self.flow
	}

	/// Handles one inbound request.
	///
	/// Malformed or tampered callback input always comes back as [`Action::Rejected`]; the
	/// error arm is reachable only from redirect-URL construction, which is config-grade and
	/// cannot be triggered by request data.
	pub fn handle(&self, request: &InboundRequest) -> Result<Action> {
		let _guard = HandshakeSpan::new(self.flow, "intercept").entered();

		let Some((data, hmac)) = request.callback_params() else {
			let url = self.connect.authorize_url(self.flow, request.url().as_str())?;

			return Ok(Action::Redirect(url));
		};

		let action = match self.connect.decode(&data, &hmac) {
			DecodeResult::Authenticated(payload) => Action::Authenticated(payload),
			DecodeResult::Unverified(_) => Action::Rejected(Rejection::VerificationFailed),
			DecodeResult::Malformed(error) => Action::Rejected(Rejection::Malformed(error)),
		};

		Ok(action)
	}
}
