//! Fixed-vector regression against the provider's published key, IV, ciphertext, and tag.

// crates.io
use serde::Serialize;
use serde_json::Value;
// self
use dnt_connect::{
	auth::{Iv, SharedKey},
	crypto::Cipher,
	token::{DecodeResult, Token, TokenCodec},
	wire,
};

const REFERENCE_KEY: &str = "dfadfe1242fdsffdg33q43sdfgdasfadsfsfdasdfwd";
const REFERENCE_IV: &str = "FDVC0Adh8UEFaeVXwUNHEw==";
const REFERENCE_PLAINTEXT: &str = r#"{"order_id":104,"total_price":103.45,"products":[{"id":"123","name":"Product #1","price":12.95},{"id":"137","name":"Product #2","price":82.95}]}"#;
const REFERENCE_CIPHERTEXT: &str = "2akbLLpz4+x/g3ZOLnCh8i8TU3ZBeqU1xHdIOIh6tNxyha8DF9LBl2j3QcwQ3bhG2Ms6D1scBx84uBgDjCdEZJmzkfNTsZQLMFC1akX4ja+p7UJcjgIAoVRO61evPjfRtUMFK89ZNjcglUiITsZGfXBd0cz5P1aC8qIZ86XFE1ec5RyKPmCYPW8qrmwlRPivTIfyYFPcx6ZvZf8KFJMgKg==";
const REFERENCE_SEALED: &str = "FDVC0Adh8UEFaeVXwUNHE9mpGyy6c+Psf4N2Ti5wofIvE1N2QXqlNcR3SDiIerTccoWvAxfSwZdo90HMEN24RtjLOg9bHAcfOLgYA4wnRGSZs5HzU7GUCzBQtWpF+I2vqe1CXI4CAKFUTutXrz430bVDBSvPWTY3IJVIiE7GRn1wXdHM+T9WgvKiGfOlxRNXnOUcij5gmD1vKq5sJUT4r0yH8mBT3Memb2X/ChSTICo=";
const REFERENCE_TAG: &str =
	"d72bOEwOpR0bJ6I1aq8KbfDMh0/ZO6RCaG669QjuXXzs2Gef/tzc+IqcsFBBWSzNmujiBQc8HJG8+pZj4DaJ0A==";
const COUNTEREXAMPLE_TAG: &str =
	"AKMvNyM6MKg8BFfWtLWSDrPRHmIZzfU8DOo/np3SQC9RXVj4JqpfpYz6nXzoUEa5Hp//a12sOmsAzdc+3S/Lug==";

#[derive(Serialize)]
struct Product {
	id: &'static str,
	name: &'static str,
	price: f64,
}
#[derive(Serialize)]
struct Order {
	order_id: u32,
	total_price: f64,
	products: Vec<Product>,
}

fn reference_order() -> Order {
	Order {
		order_id: 104,
		total_price: 103.45,
		products: vec![
			Product { id: "123", name: "Product #1", price: 12.95 },
			Product { id: "137", name: "Product #2", price: 82.95 },
		],
	}
}

fn reference_key() -> SharedKey {
	SharedKey::from_base64(REFERENCE_KEY).expect("Reference key should decode.")
}

fn reference_iv() -> Iv {
	let raw = wire::decode_param(REFERENCE_IV).expect("Reference IV should decode.");

	Iv::from_slice(&raw).expect("Reference IV should be 16 bytes.")
}

/// Percent-escapes a base64 fixture the way `encodeURIComponent` would, independently of
/// [`wire::encode_param`] so the two implementations check each other.
fn component_escape(value: &str) -> String {
	value.replace('+', "%2B").replace('/', "%2F").replace('=', "%3D")
}

#[test]
fn payload_serialization_matches_the_published_plaintext() {
	let serialized =
		serde_json::to_string(&reference_order()).expect("Reference order should serialize.");

	assert_eq!(serialized, REFERENCE_PLAINTEXT);
}

#[test]
fn encryption_reproduces_the_published_ciphertext() {
	let cipher = Cipher::new(reference_key());
	let ciphertext = cipher.encrypt(REFERENCE_PLAINTEXT.as_bytes(), &reference_iv());
	let expected =
		wire::decode_param(REFERENCE_CIPHERTEXT).expect("Published ciphertext should decode.");

	assert_eq!(ciphertext, expected);
	assert_eq!(ciphertext.len() % 16, 0);
}

#[test]
fn decryption_reproduces_the_published_plaintext() {
	let cipher = Cipher::new(reference_key());
	let ciphertext =
		wire::decode_param(REFERENCE_CIPHERTEXT).expect("Published ciphertext should decode.");
	let plaintext = cipher
		.decrypt(&ciphertext, &reference_iv())
		.expect("Published ciphertext should decrypt.");

	assert_eq!(plaintext, REFERENCE_PLAINTEXT.as_bytes());
}

#[test]
fn mac_reproduces_the_published_tag() {
	let cipher = Cipher::new(reference_key());
	let tag = cipher.mac(REFERENCE_PLAINTEXT.as_bytes(), &reference_iv());
	let expected = wire::decode_param(REFERENCE_TAG).expect("Published tag should decode.");

	assert_eq!(tag.as_slice(), expected);
	assert!(cipher.verify_mac(REFERENCE_PLAINTEXT.as_bytes(), &reference_iv(), &expected));
}

#[test]
fn verification_rejects_the_published_counterexamples() {
	let cipher = Cipher::new(reference_key());
	let wrong_tag =
		wire::decode_param(COUNTEREXAMPLE_TAG).expect("Counterexample tag should decode.");

	assert!(!cipher.verify_mac(REFERENCE_PLAINTEXT.as_bytes(), &reference_iv(), &wrong_tag));

	let published = wire::decode_param(REFERENCE_TAG).expect("Published tag should decode.");
	let other_plaintext = r#"{"foo":"baz"}"#;

	assert!(!cipher.verify_mac(other_plaintext.as_bytes(), &reference_iv(), &published));
}

#[test]
fn encode_emits_the_published_escaped_parameters() {
	let codec = TokenCodec::new(reference_key());
	let token =
		codec.encode(&reference_order(), &reference_iv()).expect("Order should encode.");

	assert_eq!(
		token,
		Token {
			data: component_escape(REFERENCE_SEALED),
			hmac: component_escape(REFERENCE_TAG),
		},
	);
}

#[test]
fn decode_authenticates_the_published_token() {
	let codec = TokenCodec::new(reference_key());
	let payload = codec
		.decode(&component_escape(REFERENCE_SEALED), &component_escape(REFERENCE_TAG))
		.authenticated()
		.expect("Published token should authenticate.");
	let expected: Value =
		serde_json::from_str(REFERENCE_PLAINTEXT).expect("Published plaintext should parse.");

	assert_eq!(payload, expected);
}

#[test]
fn decode_accepts_unescaped_parameters() {
	// Query parsers hand values back already percent-decoded; decode tolerates both layers.
	let codec = TokenCodec::new(reference_key());

	assert!(codec.decode(REFERENCE_SEALED, REFERENCE_TAG).is_authenticated());
}

#[test]
fn decode_with_the_wrong_tag_is_unverified() {
	let codec = TokenCodec::new(reference_key());

	match codec.decode(REFERENCE_SEALED, COUNTEREXAMPLE_TAG) {
		DecodeResult::Unverified(payload) => assert_eq!(payload["order_id"], 104),
		other => panic!("Expected Unverified, got {other:?}."),
	}
}
