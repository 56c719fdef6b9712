//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::application::{ConcurrencyPolicy, SessionOptions};
use crate::infrastructure::credentials::StoreLatency;

pub(super) const APP_NAME: &str = "brewcard";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "brewcard";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Session behaviour.
    #[serde(default)]
    pub session: SessionConfig,

    /// Simulated backend latency.
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Demo account settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Session configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Handling of a request made while another is pending.
    #[serde(default)]
    pub concurrency: ConcurrencyPolicy,

    /// Sign the caller in after a successful registration.
    #[serde(default)]
    pub sign_in_after_register: bool,
}

impl From<SessionConfig> for SessionOptions {
    fn from(config: SessionConfig) -> Self {
        Self {
            concurrency: config.concurrency,
            sign_in_after_register: config.sign_in_after_register,
        }
    }
}

/// Simulated round-trip times, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Sign-in round trip.
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,

    /// Account creation round trip.
    #[serde(default = "default_register_ms")]
    pub register_ms: u64,

    /// Saved-session check at startup.
    #[serde(default = "default_restore_ms")]
    pub restore_ms: u64,
}

impl LatencyConfig {
    /// Latency with every delay disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login_ms: 0,
            register_ms: 0,
            restore_ms: 0,
        }
    }

    /// Per-operation delays for the credential store.
    ///
    /// Member lookup is part of a restore, which `restore_ms` already covers,
    /// so it answers immediately.
    #[must_use]
    pub const fn credential_store(&self) -> StoreLatency {
        StoreLatency {
            authenticate: Duration::from_millis(self.login_ms),
            register: Duration::from_millis(self.register_ms),
            lookup: Duration::ZERO,
        }
    }

    /// Delay of the saved-session check.
    #[must_use]
    pub const fn restore(&self) -> Duration {
        Duration::from_millis(self.restore_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            register_ms: default_register_ms(),
            restore_ms: default_restore_ms(),
        }
    }
}

/// Demo account configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Print the demo credentials on the sign-in screen.
    #[serde(default = "default_true")]
    pub show_credentials: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_credentials: true,
        }
    }
}

const fn default_login_ms() -> u64 {
    1000
}

const fn default_register_ms() -> u64 {
    1000
}

const fn default_restore_ms() -> u64 {
    500
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(concurrency) = args.concurrency {
            self.session.concurrency = concurrency;
        }
        if let Some(sign_in) = args.sign_in_after_register {
            self.session.sign_in_after_register = sign_in;
        }
        if args.no_latency {
            self.latency = LatencyConfig::none();
        }
    }

    /// Session manager switches from the `[session]` section.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        self.session.into()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            session: SessionConfig::default(),
            latency: LatencyConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_sections() {
        let toml_content = r#"
            log_level = "debug"

            [session]
            concurrency = "latest-wins"
            sign_in_after_register = true

            [latency]
            login_ms = 250
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.session.concurrency, ConcurrencyPolicy::LatestWins);
        assert!(config.session.sign_in_after_register);
        assert_eq!(config.latency.login_ms, 250);
        assert_eq!(config.latency.register_ms, 1000);

        let store = config.latency.credential_store();
        assert_eq!(store.authenticate, Duration::from_millis(250));
        assert_eq!(store.register, Duration::from_millis(1000));
        assert!(config.demo.show_credentials);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.session.concurrency, ConcurrencyPolicy::Reject);
        assert!(!config.session.sign_in_after_register);
        assert_eq!(
            config.latency.credential_store(),
            StoreLatency {
                authenticate: Duration::from_millis(1000),
                register: Duration::from_millis(1000),
                lookup: Duration::ZERO,
            }
        );
        assert_eq!(config.latency.restore(), Duration::from_millis(500));
    }

    #[test]
    fn test_args_override_config() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "brewcard",
            "--log-level",
            "warn",
            "--concurrency",
            "latest-wins",
            "--no-latency",
            "demo",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.session.concurrency, ConcurrencyPolicy::LatestWins);
        assert_eq!(config.latency.credential_store(), StoreLatency::default());
        assert!(!config.session_options().sign_in_after_register);
    }
}
