//! Per-encryption initialization vectors.

// crates.io
use rand::RngCore;
// self
use crate::error::MalformedToken;

/// 16 random bytes that randomize each CBC encryption so identical plaintexts yield different
/// ciphertexts.
///
/// An IV is generated immediately before encryption and must never be reused with the same key
/// across different plaintexts. It is not secret; it travels prepended to the ciphertext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Iv([u8; Self::LEN]);
impl Iv {
	/// Vector length fixed by the cipher block size.
	pub const LEN: usize = 16;

	/// Draws a fresh vector from the thread-local CSPRNG.
	///
	/// Safe to call concurrently from any number of requests; values are independent per call.
	pub fn generate() -> Self {
		let mut raw = [0_u8; Self::LEN];

		rand::rng().fill_bytes(&mut raw);

		Self(raw)
	}

	/// Reconstructs the vector prefixed to a decoded token.
	pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedToken> {
		let raw = <[u8; Self::LEN]>::try_from(bytes)
			.map_err(|_| MalformedToken::Truncated { len: bytes.len() })?;

		Ok(Self(raw))
	}

	/// Raw bytes view.
	pub fn as_bytes(&self) -> &[u8; Self::LEN] {
		&self.0
	}
}
