//! Flow kinds and the [`Connect`] client facade: construction, redirect-URL building, and the
//! decode entry points a host calls directly.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, Iv, SharedKey},
	error::ConfigError,
	intercept::Interceptor,
	obs::{self, HandshakeSpan},
	token::{DecodeResult, Payload, Token, TokenCodec},
};

/// Default provider base the redirect flows are rooted at.
pub const DEFAULT_PROVIDER_BASE: &str = "https://www.dnt.no/connect";

/// Provider-defined flow variants, distinguished only by URL path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Silent authentication check; the provider bounces the user straight back.
	Bounce,
	/// Interactive sign-on.
	Signon,
}
impl FlowKind {
	/// Returns the literal path segment for the flow.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Bounce => "bounce",
			FlowKind::Signon => "signon",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Handshake client bound to one provider-issued `(client, key)` pair.
///
/// Immutable after construction and cheap to clone; share one instance freely across concurrent
/// requests. The client never reads ambient environment state; credentials arrive through
/// [`Connect::new`].
#[derive(Clone, Debug)]
pub struct Connect {
	client_id: ClientId,
	codec: TokenCodec,
	base: Url,
}
impl Connect {
	/// Creates a client from the provider-issued client name and base64 key.
	///
	/// Fails fast when the name is empty or unsafe for a query string, or when the key does not
	/// decode to exactly 32 bytes.
	pub fn new(client_id: impl AsRef<str>, base64_key: &str) -> Result<Self, ConfigError> {
		let client_id = ClientId::new(client_id)?;
		let key = SharedKey::from_base64(base64_key)?;
		let base =
			Url::parse(DEFAULT_PROVIDER_BASE).map_err(|_| ConfigError::InvalidProviderBase)?;

		Ok(Self { client_id, codec: TokenCodec::new(key), base })
	}

	/// Overrides the provider base URL, e.g. for a staging environment.
	pub fn with_provider_base(mut self, base: Url) -> Result<Self, ConfigError> {
		if base.cannot_be_a_base() {
			return Err(ConfigError::InvalidProviderBase);
		}

		self.base = base;

		Ok(self)
	}

	/// Client name sent in plaintext on every redirect.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Builds the redirect URL that starts a flow.
	///
	/// Seals `{ redirect_url, timestamp: now }` under a fresh IV and formats
	/// `{base}/{flow}/?client={id}&data={data}&hmac={hmac}`. The `data`/`hmac` values are
	/// percent-escaped already, so the query is assembled verbatim.
	pub fn authorize_url(&self, flow: FlowKind, return_url: impl Into<String>) -> Result<Url> {
		let _guard = HandshakeSpan::new(flow, "authorize_url").entered();
		let payload = Payload::for_redirect(return_url);
		let Token { data, hmac } = self.codec.encode(&payload, &Iv::generate())?;
		let raw = format!(
			"{}/{}/?client={}&data={data}&hmac={hmac}",
			self.base.as_str().trim_end_matches('/'),
			flow.as_str(),
			self.client_id.as_ref(),
		);
		let url = Url::parse(&raw).map_err(|source| Error::UrlBuild { source })?;

		obs::record_redirect(flow);

		Ok(url)
	}

	/// Bounce variant of [`Connect::authorize_url`].
	pub fn bounce_url(&self, return_url: impl Into<String>) -> Result<Url> {
		self.authorize_url(FlowKind::Bounce, return_url)
	}

	/// Signon variant of [`Connect::authorize_url`].
	pub fn signon_url(&self, return_url: impl Into<String>) -> Result<Url> {
		self.authorize_url(FlowKind::Signon, return_url)
	}

	/// Decodes a callback `data`/`hmac` pair into a typed outcome.
	pub fn decode(&self, data: &str, hmac: &str) -> DecodeResult {
		let result = self.codec.decode(data, hmac);

		obs::record_decode_outcome(obs::DecodeOutcome::of(&result));

		result
	}

	/// Decodes straight from raw query pairs.
	///
	/// Fails with [`Error::MissingQueryField`] when either field is absent; prefer the
	/// interceptor, which checks presence and falls back to a redirect instead.
	pub fn decode_query<I, K, V>(&self, pairs: I) -> Result<DecodeResult>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut data = None;
		let mut hmac = None;

		for (key, value) in pairs {
			match key.as_ref() {
				"data" => data = Some(value.into()),
				"hmac" => hmac = Some(value.into()),
				_ => {},
			}
		}

		let data = data.ok_or(Error::MissingQueryField { field: "data" })?;
		let hmac = hmac.ok_or(Error::MissingQueryField { field: "hmac" })?;

		Ok(self.decode(&data, &hmac))
	}

	/// Wires this client into a host request pipeline for the given flow.
	pub fn interceptor(&self, flow: FlowKind) -> Interceptor {
		Interceptor::new(self.clone(), flow)
	}
}
