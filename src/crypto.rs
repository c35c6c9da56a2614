//! Raw symmetric primitives: AES-256-CBC with PKCS#7 padding, and HMAC-SHA-512 computed over
//! `iv ‖ plaintext`. Both are driven by the single provider-issued key.

// crates.io
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use hmac::{Hmac, Mac};
use sha2::Sha512;
// self
use crate::{
	auth::{Iv, SharedKey},
	error::MalformedToken,
};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha512 = Hmac<Sha512>;

/// Cipher block size in bytes.
pub const BLOCK_LEN: usize = 16;
/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 64;

/// Symmetric encrypt/decrypt and MAC operations bound to one [`SharedKey`].
#[derive(Clone, Debug)]
pub struct Cipher {
	key: SharedKey,
}
impl Cipher {
	/// Binds the primitives to a key.
	pub fn new(key: SharedKey) -> Self {
		Self { key }
	}

	/// Encrypts with CBC and PKCS#7 padding; output length is always a whole number of blocks.
	///
	/// Deterministic for a fixed `(key, iv, plaintext)` triple. The IV must be fresh per
	/// plaintext.
	pub fn encrypt(&self, plaintext: &[u8], iv: &Iv) -> Vec<u8> {
		Aes256CbcEnc::new(self.key.as_bytes().into(), iv.as_bytes().into())
			.encrypt_padded_vec_mut::<Pkcs7>(plaintext)
	}

	/// Decrypts a ciphertext body (the IV prefix already stripped).
	///
	/// Empty or unaligned input is rejected up front; invalid padding after decryption reports
	/// [`MalformedToken::Padding`]. Never panics.
	pub fn decrypt(&self, ciphertext: &[u8], iv: &Iv) -> Result<Vec<u8>, MalformedToken> {
		if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
			return Err(MalformedToken::UnalignedCiphertext { len: ciphertext.len() });
		}

		Aes256CbcDec::new(self.key.as_bytes().into(), iv.as_bytes().into())
			.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
			.map_err(|_| MalformedToken::Padding)
	}

	/// Computes the HMAC-SHA-512 tag over `iv ‖ plaintext`. Deterministic.
	pub fn mac(&self, plaintext: &[u8], iv: &Iv) -> [u8; TAG_LEN] {
		let mut tag = [0_u8; TAG_LEN];

		tag.copy_from_slice(&self.keyed_mac(plaintext, iv).finalize().into_bytes());

		tag
	}

	/// Recomputes the tag and compares in constant time.
	///
	/// A tag of the wrong length verifies false rather than erroring.
	pub fn verify_mac(&self, plaintext: &[u8], iv: &Iv, tag: &[u8]) -> bool {
		self.keyed_mac(plaintext, iv).verify_slice(tag).is_ok()
	}

	fn keyed_mac(&self, plaintext: &[u8], iv: &Iv) -> HmacSha512 {
		// HMAC accepts keys of any length, so a 32-byte key can never trip InvalidLength.
		let mut mac = HmacSha512::new_from_slice(self.key.as_bytes())
			.expect("HMAC accepts keys of any length.");

		mac.update(iv.as_bytes());
		mac.update(plaintext);

		mac
	}
}
