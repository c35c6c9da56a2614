//! Walks through starting a sign-on flow: building the redirect URL by hand, then letting the
//! interceptor derive the same redirect from a bare inbound request.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use dnt_connect::{
	flows::{Connect, FlowKind},
	intercept::{Action, InboundRequest},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let connect = Connect::new("demo-client", "ZGVtby1zZWNyZXQta2V5LWRlbW8tc2VjcmV0LWtleSE=")?;
	let url = connect.signon_url("https://app.example.com/members")?;

	println!("Send your user to {url}.");

	// Wired into a request pipeline, the interceptor spots that no callback values are present
	// and issues the redirect itself, using the request's own URL as the return address.
	let interceptor = connect.interceptor(FlowKind::Signon);
	let request =
		InboundRequest::new(Url::parse("https://app.example.com/members?tab=hikes")?);

	match interceptor.handle(&request)? {
		Action::Redirect(target) => println!("Interceptor redirects to {target}."),
		other => println!("Unexpected action: {other:?}."),
	}

	Ok(())
}
