//! Shared 256-bit secret that drives both the cipher and the MAC.

// crates.io
use base64::Engine as _;
// self
use crate::{_prelude::*, error::ConfigError, wire};

/// Redacted 32-byte key decoded from the provider-issued base64 secret.
///
/// The same key is reused for encryption and authentication; that is the provider's scheme, and
/// deriving independent subkeys would break wire compatibility.
#[derive(Clone)]
pub struct SharedKey([u8; Self::LEN]);
impl SharedKey {
	/// Raw key length fixed by the cipher and MAC choice.
	pub const LEN: usize = 32;

	/// Decodes a provider-issued base64 secret.
	///
	/// Issued keys come without padding, so decoding accepts both padded and unpadded input.
	pub fn from_base64(encoded: &str) -> Result<Self, ConfigError> {
		let bytes = wire::BASE64_LENIENT
			.decode(encoded)
			.map_err(|source| ConfigError::KeyDecode { source })?;
		let len = bytes.len();
		let raw = <[u8; Self::LEN]>::try_from(bytes)
			.map_err(|_| ConfigError::KeyLength { expected: Self::LEN, len })?;

		Ok(Self(raw))
	}

	pub(crate) fn as_bytes(&self) -> &[u8; Self::LEN] {
		&self.0
	}
}
impl Debug for SharedKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SharedKey").field(&"<redacted>").finish()
	}
}
impl Display for SharedKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
