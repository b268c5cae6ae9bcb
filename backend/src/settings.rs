//! Server settings loaded via OrthoConfig.
//!
//! Values come from `ENGAGE_*` environment variables, configuration files,
//! and command-line flags, merged by `ortho_config`. Numeric settings carry defaults in the
//! derive; the host falls back through [`ServerSettings::host`].

use std::net::IpAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Interface bound when no host is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port bound when no port is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Generator seed used when residents are requested without a seed.
pub const DEFAULT_EXAMPLE_SEED: u64 = 42;

/// Environment name that exposes internal error details.
const DEVELOPMENT: &str = "development";

/// Deployment mode derived from `ENGAGE_ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    /// Internal error messages are included in 500 responses.
    Development,
    /// Internal error messages are masked.
    Production,
}

impl RuntimeEnvironment {
    /// Whether 500 responses should carry the underlying error message.
    #[must_use]
    pub const fn exposes_error_details(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Configuration values for the HTTP server and its example dataset.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENGAGE")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Deployment environment name; `development` exposes error details.
    pub environment: Option<String>,
    /// Number of generated residents appended to the dataset.
    #[ortho_config(default = 0)]
    pub example_residents: usize,
    /// Seed for the resident generator.
    #[ortho_config(default = 42)]
    pub example_seed: u64,
    /// JSON dataset file replacing the built-in dataset.
    pub dataset_path: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            environment: None,
            example_residents: 0,
            example_seed: DEFAULT_EXAMPLE_SEED,
            dataset_path: None,
        }
    }
}

impl ServerSettings {
    /// Return the configured host, falling back to [`DEFAULT_HOST`].
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Parse the host into an address the listener can bind.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<(IpAddr, u16), std::net::AddrParseError> {
        let ip = self.host().parse::<IpAddr>()?;
        Ok((ip, self.port()))
    }

    /// Classify the configured environment name.
    #[must_use]
    pub fn runtime_environment(&self) -> RuntimeEnvironment {
        match self.environment.as_deref() {
            Some(DEVELOPMENT) => RuntimeEnvironment::Development,
            _ => RuntimeEnvironment::Production,
        }
    }

    /// Return the generator seed.
    #[must_use]
    pub const fn example_seed(&self) -> u64 {
        self.example_seed
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "ENGAGE_HOST",
        "ENGAGE_PORT",
        "ENGAGE_ENVIRONMENT",
        "ENGAGE_EXAMPLE_RESIDENTS",
        "ENGAGE_EXAMPLE_SEED",
        "ENGAGE_DATASET_PATH",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("engage-local")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.example_seed(), DEFAULT_EXAMPLE_SEED);
        assert_eq!(settings.runtime_environment(), RuntimeEnvironment::Production);
        assert_eq!(settings.example_residents, 0);
        assert!(settings.dataset_path.is_none());
    }

    #[rstest]
    fn loaded_defaults_match_default_impl() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let loaded = load_from_empty_args();
        let built = ServerSettings::default();
        assert_eq!(loaded.port, built.port);
        assert_eq!(loaded.example_seed, built.example_seed);
        assert_eq!(loaded.example_residents, built.example_residents);
        assert_eq!(loaded.host, built.host);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ENGAGE_HOST", Some("127.0.0.1".to_owned())),
            ("ENGAGE_PORT", Some("8081".to_owned())),
            ("ENGAGE_ENVIRONMENT", Some("development".to_owned())),
            ("ENGAGE_EXAMPLE_RESIDENTS", Some("12".to_owned())),
            ("ENGAGE_EXAMPLE_SEED", Some("7".to_owned())),
            ("ENGAGE_DATASET_PATH", Some("/tmp/community.json".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            ("127.0.0.1".parse::<IpAddr>().expect("ip"), 8081)
        );
        assert_eq!(settings.runtime_environment(), RuntimeEnvironment::Development);
        assert_eq!(settings.example_residents, 12);
        assert_eq!(settings.example_seed(), 7);
        assert_eq!(
            settings.dataset_path,
            Some(PathBuf::from("/tmp/community.json"))
        );
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("production"), false)]
    #[case(Some("Development"), false)]
    #[case(Some("development"), true)]
    fn only_development_exposes_details(#[case] name: Option<&str>, #[case] exposes: bool) {
        let settings = ServerSettings {
            environment: name.map(str::to_owned),
            ..ServerSettings::default()
        };
        assert_eq!(
            settings.runtime_environment().exposes_error_details(),
            exposes
        );
    }

    #[rstest]
    fn hostnames_are_rejected_by_bind_addr() {
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            ..ServerSettings::default()
        };
        assert!(settings.bind_addr().is_err());
    }
}
