//! HTTP server configuration object and helpers.

use std::net::{IpAddr, SocketAddr};

use engage_local::settings::{RuntimeEnvironment, ServerSettings};

/// Values the server needs once settings have been resolved.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: RuntimeEnvironment,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and environment.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, environment: RuntimeEnvironment) -> Self {
        Self {
            bind_addr,
            environment,
        }
    }

    /// Resolve the configuration from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured host is not an IP literal.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, std::net::AddrParseError> {
        let (ip, port): (IpAddr, u16) = settings.bind_addr()?;
        Ok(Self::new(
            SocketAddr::new(ip, port),
            settings.runtime_environment(),
        ))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
