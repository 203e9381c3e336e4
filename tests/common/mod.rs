#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every fixture in this module"
)]

use httpmock::MockServer;
use iex_client_sdk::auth::Credentials;
use iex_client_sdk::executor::Config;

pub const PUBLISHABLE: &str = "pk_2b9304a97a554d2fa79cb55ab2c926ca";
pub const SECRET: &str = "sk_d633383f74a04a4b8b1e3bd8ab71b399";

/// Token-auth configuration against the mock server.
#[must_use]
pub fn config(server: &MockServer) -> Config {
    Config::builder()
        .host(format!("{}/", server.base_url()))
        .credentials(Credentials::new(PUBLISHABLE, SECRET))
        .build()
}

/// Signed-request configuration against the mock server.
#[must_use]
pub fn signed_config(server: &MockServer) -> Config {
    Config::builder()
        .host(format!("{}/", server.base_url()))
        .credentials(Credentials::new(PUBLISHABLE, SECRET))
        .sign_requests(true)
        .build()
}

/// Configuration with an empty publishable token, for the token-absent cases.
#[must_use]
pub fn anonymous_config(server: &MockServer) -> Config {
    Config::builder()
        .host(format!("{}/", server.base_url()))
        .credentials(Credentials::new("", ""))
        .build()
}
