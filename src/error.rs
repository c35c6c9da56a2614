//! Error types shared across the handshake client, token codec, and interceptor.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem raised at construction.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Decode-path API was invoked without a required query field.
	#[error("Query is missing the `{field}` field.")]
	MissingQueryField {
		/// Name of the absent query field.
		field: &'static str,
	},
	/// Outbound payload could not be serialized to JSON.
	#[error("Payload could not be serialized to JSON.")]
	PayloadSerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Assembled redirect URL failed to parse.
	#[error("Redirect URL could not be assembled.")]
	UrlBuild {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Configuration and validation failures raised while constructing a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Client identifier was empty.
	#[error("Client identifier cannot be empty.")]
	EmptyClientId,
	/// Client identifier contains whitespace; it is interpolated into a URL query in plaintext.
	#[error("Client identifier contains whitespace.")]
	ClientIdWhitespace,
	/// Client identifier exceeded the allowed character count.
	#[error("Client identifier exceeds {max} characters.")]
	ClientIdTooLong {
		/// Maximum permitted character count.
		max: usize,
	},
	/// Key is not valid base64.
	#[error("Key is not valid base64.")]
	KeyDecode {
		/// Underlying decoding failure.
		#[source]
		source: base64::DecodeError,
	},
	/// Key decoded to the wrong number of bytes.
	#[error("Key must decode to {expected} bytes, got {len}.")]
	KeyLength {
		/// Byte count fixed by the cipher and MAC choice.
		expected: usize,
		/// Byte count the supplied secret decoded to.
		len: usize,
	},
	/// Provider base URL cannot carry the flow path segments.
	#[error("Provider base URL cannot be a base for flow paths.")]
	InvalidProviderBase,
}

/// Structural damage detected while decoding a callback token.
///
/// Every variant is recoverable: the codec reports it inside
/// [`DecodeResult::Malformed`](crate::token::DecodeResult::Malformed) instead of crashing the
/// request.
#[derive(Debug, ThisError)]
pub enum MalformedToken {
	/// Token value is not valid base64 after percent-decoding.
	#[error("Token value is not valid base64.")]
	Base64 {
		/// Underlying decoding failure.
		#[source]
		source: base64::DecodeError,
	},
	/// Decoded token is too short to carry an IV plus one cipher block.
	#[error("Token carries {len} bytes, fewer than one IV plus one cipher block.")]
	Truncated {
		/// Byte count the token decoded to.
		len: usize,
	},
	/// Ciphertext body is not a whole number of cipher blocks.
	#[error("Ciphertext length {len} is not a multiple of the cipher block size.")]
	UnalignedCiphertext {
		/// Byte count of the ciphertext body.
		len: usize,
	},
	/// Cipher padding was invalid after decryption.
	#[error("Ciphertext padding is invalid.")]
	Padding,
	/// Decrypted bytes are not valid JSON.
	#[error("Decrypted payload is not valid JSON.")]
	PayloadParse {
		/// Structured parsing failure, including the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Decrypted bytes continued past the end of the JSON document.
	#[error("Decrypted payload carries bytes after the JSON document.")]
	PayloadTrailing {
		/// Underlying parsing failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Reasons the interceptor rejects a callback.
///
/// Kept distinct so hosts can log a possible tampering attempt ([`Rejection::VerificationFailed`])
/// separately from garbage input.
#[derive(Debug, ThisError)]
pub enum Rejection {
	/// Token decoded cleanly but its HMAC tag did not verify; the payload was discarded.
	#[error("HMAC verification failed.")]
	VerificationFailed,
	/// Token was structurally invalid.
	#[error(transparent)]
	Malformed(#[from] MalformedToken),
}
