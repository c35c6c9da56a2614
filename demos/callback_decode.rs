//! Simulates the provider's callback leg: a token comes back on the return address and the
//! interceptor classifies it as authenticated, tampered, or garbage.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use dnt_connect::{
	flows::{Connect, FlowKind},
	intercept::{Action, InboundRequest},
};

fn callback(return_url: &str, data: &str, hmac: &str) -> Result<InboundRequest> {
	let mut url = Url::parse(return_url)?;

	url.query_pairs_mut().append_pair("data", data).append_pair("hmac", hmac);

	Ok(InboundRequest::new(url))
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let connect = Connect::new("demo-client", "ZGVtby1zZWNyZXQta2V5LWRlbW8tc2VjcmV0LWtleSE=")?;
	let interceptor = connect.interceptor(FlowKind::Bounce);
	let redirect = connect.bounce_url("https://app.example.com/members")?;
	let pair = |needle: &str| {
		redirect
			.query_pairs()
			.find(|(key, _)| key == needle)
			.map(|(_, value)| value.into_owned())
	};
	let data = pair("data").expect("Built URL always carries data.");
	let hmac = pair("hmac").expect("Built URL always carries hmac.");

	// Happy path: the provider echoes a valid pair back to the return address.
	match interceptor.handle(&callback("https://app.example.com/members", &data, &hmac)?)? {
		Action::Authenticated(payload) => println!("Authenticated payload: {payload}."),
		other => println!("Unexpected action: {other:?}."),
	}

	// Tampered tag: structurally fine, fails verification.
	let mut tampered = hmac.clone().into_bytes();

	tampered[0] ^= 0x01;

	let tampered = String::from_utf8(tampered)?;

	match interceptor.handle(&callback("https://app.example.com/members", &data, &tampered)?)? {
		Action::Rejected(reason) => println!("Tampered callback rejected: {reason}."),
		other => println!("Unexpected action: {other:?}."),
	}

	// Garbage data: rejected as malformed, never a crash.
	match interceptor.handle(&callback("https://app.example.com/members", "@@@", "@@@")?)? {
		Action::Rejected(reason) => println!("Garbage callback rejected: {reason}."),
		other => println!("Unexpected action: {other:?}."),
	}

	Ok(())
}
