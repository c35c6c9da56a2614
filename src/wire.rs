//! Wire-format layers shared by key parsing and token transport: base64 plus the
//! `encodeURIComponent`-compatible percent escaping the provider expects in query strings.

// crates.io
use base64::{
	Engine,
	alphabet,
	engine::{
		DecodePaddingMode,
		general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
	},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::error::MalformedToken;

/// Decoder matching how the provider treats base64: padding optional, non-zero trailing bits
/// accepted. Issued keys are 43 characters with no padding and a non-zero final bit pair, which
/// a strict decoder rejects.
pub(crate) const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new()
		.with_decode_allow_trailing_bits(true)
		.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);
/// Characters escaped by `encodeURIComponent`: everything but alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Encodes raw bytes as padded base64, then percent-escapes the result for use as a query value.
pub fn encode_param(bytes: &[u8]) -> String {
	utf8_percent_encode(&STANDARD.encode(bytes), COMPONENT).to_string()
}

/// Reverses [`encode_param`]: percent-decodes, then base64-decodes leniently.
///
/// Already-unescaped input passes through the percent layer untouched, so values extracted by a
/// query parser that decodes eagerly are accepted as well.
pub fn decode_param(value: &str) -> Result<Vec<u8>, MalformedToken> {
	let unescaped = percent_decode_str(value).collect::<Vec<_>>();

	BASE64_LENIENT.decode(unescaped).map_err(|source| MalformedToken::Base64 { source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn param_round_trips_raw_bytes() {
		let bytes = (0_u8..=255).collect::<Vec<_>>();
		let encoded = encode_param(&bytes);
		let decoded = decode_param(&encoded).expect("Encoded parameter should decode.");

		assert_eq!(decoded, bytes);
	}

	#[test]
	fn base64_specials_are_percent_escaped() {
		// 0xFB 0xEF 0xBE encodes to "++++"; the fourth byte forces "=" padding.
		let encoded = encode_param(&[0xFB, 0xEF, 0xBE, 0x3E]);

		assert!(!encoded.contains('+'));
		assert!(!encoded.contains('/'));
		assert!(!encoded.contains('='));
		assert!(encoded.contains("%2B"));
		assert!(encoded.contains("%3D"));
	}

	#[test]
	fn unescaped_input_is_accepted() {
		let bytes = vec![0xFB, 0xEF, 0xBE];
		let plain = STANDARD.encode(&bytes);
		let decoded = decode_param(&plain).expect("Unescaped base64 should decode.");

		assert_eq!(decoded, bytes);
	}

	#[test]
	fn lenient_decoder_accepts_unpadded_trailing_bits() {
		// 43 characters, no padding, final bit pair non-zero; strict decoders reject this.
		let issued = "dfadfe1242fdsffdg33q43sdfgdasfadsfsfdasdfwd";

		assert_eq!(
			BASE64_LENIENT.decode(issued).expect("Issued key should decode leniently.").len(),
			32,
		);
		assert!(STANDARD.decode(issued).is_err());
	}

	#[test]
	fn invalid_base64_is_reported() {
		assert!(matches!(decode_param("@@@@"), Err(MalformedToken::Base64 { .. })));
	}
}
