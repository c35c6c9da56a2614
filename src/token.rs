//! Token codec: JSON payloads in, percent-encoded `data`/`hmac` query values out, and the
//! verified decode path back.

// self
use crate::{
	_prelude::*,
	auth::{Iv, SharedKey},
	crypto::{BLOCK_LEN, Cipher},
	error::MalformedToken,
	wire,
};

/// Outbound handshake payload.
///
/// Field order is the canonical JSON order the provider signs; do not reorder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
	/// Absolute URL the provider redirects the user back to.
	pub redirect_url: String,
	/// Unix seconds at which the payload was built.
	pub timestamp: i64,
}
impl Payload {
	/// Builds a payload for the given return address, stamped with the current time.
	pub fn for_redirect(redirect_url: impl Into<String>) -> Self {
		Self {
			redirect_url: redirect_url.into(),
			timestamp: OffsetDateTime::now_utc().unix_timestamp(),
		}
	}
}

/// Wire token: two independent query-string values derived from one `(plaintext, iv)` pair.
///
/// Tokens have no persistence; they exist only within one redirect round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// Percent-encoded base64 of `iv ‖ ciphertext`.
	pub data: String,
	/// Percent-encoded base64 of the 64-byte authentication tag.
	pub hmac: String,
}

/// Outcome of decoding a callback token.
#[derive(Debug)]
pub enum DecodeResult {
	/// Decryption succeeded and the tag verified; the payload can be trusted.
	Authenticated(Value),
	/// Decryption succeeded but the tag did not verify; the payload must not be trusted.
	Unverified(Value),
	/// The token was structurally invalid at some layer.
	Malformed(MalformedToken),
}
impl DecodeResult {
	/// True when the token authenticated.
	pub fn is_authenticated(&self) -> bool {
		matches!(self, DecodeResult::Authenticated(_))
	}

	/// Returns the payload when the token authenticated.
	pub fn authenticated(self) -> Option<Value> {
		match self {
			DecodeResult::Authenticated(payload) => Some(payload),
			_ => None,
		}
	}
}

/// Composes the cipher and wire layers into the provider's encode/decode contract.
#[derive(Clone, Debug)]
pub struct TokenCodec {
	cipher: Cipher,
}
impl TokenCodec {
	/// Builds a codec over the shared key.
	pub fn new(key: SharedKey) -> Self {
		Self { cipher: Cipher::new(key) }
	}

	/// Serializes and seals a payload under a caller-supplied IV.
	///
	/// Both output strings derive from the same `(plaintext, iv)` pair. The IV must be fresh;
	/// reuse across distinct plaintexts breaks CBC confidentiality.
	pub fn encode<T>(&self, payload: &T, iv: &Iv) -> Result<Token>
	where
		T: ?Sized + Serialize,
	{
		let plaintext =
			serde_json::to_vec(payload).map_err(|source| Error::PayloadSerialize { source })?;
		let mut sealed = iv.as_bytes().to_vec();

		sealed.extend_from_slice(&self.cipher.encrypt(&plaintext, iv));

		Ok(Token {
			data: wire::encode_param(&sealed),
			hmac: wire::encode_param(&self.cipher.mac(&plaintext, iv)),
		})
	}

	/// Decodes a callback `data`/`hmac` pair into a typed outcome.
	///
	/// Structural damage at any layer (percent/base64 encoding, token length, cipher padding,
	/// JSON parsing) reports [`DecodeResult::Malformed`]. An undecodable or mismatching tag
	/// reports [`DecodeResult::Unverified`] with the payload attached. Never panics and never
	/// returns an error.
	pub fn decode(&self, data: &str, hmac: &str) -> DecodeResult {
		match self.try_decode(data, hmac) {
			Ok(result) => result,
			Err(error) => DecodeResult::Malformed(error),
		}
	}

	fn try_decode(&self, data: &str, hmac: &str) -> Result<DecodeResult, MalformedToken> {
		let sealed = wire::decode_param(data)?;

		if sealed.len() < Iv::LEN + BLOCK_LEN {
			return Err(MalformedToken::Truncated { len: sealed.len() });
		}

		let (head, body) = sealed.split_at(Iv::LEN);
		let iv = Iv::from_slice(head)?;
		let plaintext = self.cipher.decrypt(body, &iv)?;
		let payload = parse_payload(&plaintext)?;
		let verified = wire::decode_param(hmac)
			.is_ok_and(|tag| self.cipher.verify_mac(&plaintext, &iv, &tag));

		if verified {
			Ok(DecodeResult::Authenticated(payload))
		} else {
			Ok(DecodeResult::Unverified(payload))
		}
	}
}

fn parse_payload(plaintext: &[u8]) -> Result<Value, MalformedToken> {
	let mut deserializer = serde_json::Deserializer::from_slice(plaintext);
	let payload = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| MalformedToken::PayloadParse { source })?;

	deserializer.end().map_err(|source| MalformedToken::PayloadTrailing { source })?;

	Ok(payload)
}
