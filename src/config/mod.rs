//! Endpoint configuration for the wallet daemon connection.

mod loader;

pub use loader::{get_default_config, load_configuration, write_config_to};

use url::Url;

/// Connection settings for the wallet daemon.
///
/// Constructed once, immutable for the lifetime of a client instance, and
/// shared read-only by all calls made through it.
#[derive(Clone)]
pub struct EndpointConfig {
    /// JSON-RPC endpoint of the daemon.
    pub url: Url,
    /// HTTP Basic username.
    pub username: String,
    /// HTTP Basic password.
    pub password: String,
}

impl EndpointConfig {
    pub fn new(url: Url, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url,
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password never ends up in debug output or logs.
impl std::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_password() {
        let config = EndpointConfig::new(
            Url::parse("http://127.0.0.1:8332/").unwrap(),
            "rpcuser",
            "hunter2",
        );
        let rendered = format!("{config:?}");
        assert!(rendered.contains("rpcuser"));
        assert!(!rendered.contains("hunter2"));
    }
}
