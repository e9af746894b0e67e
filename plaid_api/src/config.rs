//! Client configuration: credentials, base URL, and HTTP transport options.
//!
//! A [`Config`] is partial. The client holds one as its read-only defaults and
//! callers may pass another per call; [`resolve`] merges the two into a
//! [`ResolvedConfig`] that has everything a request needs.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::Error;

/// API host used when neither the call nor the defaults name one.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.plaid.com";

/// Hosted API environments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// Test credentials and fake institutions. This is the default.
    #[default]
    Sandbox,
    Development,
    Production,
}

impl Environment {
    /// Base URL of the environment's API host.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => DEFAULT_BASE_URL,
            Environment::Development => "https://development.plaid.com",
            Environment::Production => "https://production.plaid.com",
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(Error::InvalidEnvironment(s.to_string())),
        }
    }
}

/// TLS protocol versions that can be pinned as a lower or upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlsVersion {
    Tls1_2,
    Tls1_3,
}

impl TlsVersion {
    pub(crate) fn to_reqwest(self) -> reqwest::tls::Version {
        match self {
            TlsVersion::Tls1_2 => reqwest::tls::Version::TLS_1_2,
            TlsVersion::Tls1_3 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

impl FromStr for TlsVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_start_matches("tls").trim_start_matches('v') {
            "1.2" | "1_2" | "12" => Ok(TlsVersion::Tls1_2),
            "1.3" | "1_3" | "13" => Ok(TlsVersion::Tls1_3),
            _ => Err(Error::InvalidSetting {
                name: "tls_version",
                value: s.to_string(),
            }),
        }
    }
}

/// HTTP-level tuning applied when the request is built. Unset fields keep the
/// transport's own defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Total time allowed for the request, from connect to end of body.
    pub timeout: Option<Duration>,
    /// Time allowed to establish the connection.
    pub connect_timeout: Option<Duration>,
    /// Time allowed between reads of the response.
    pub read_timeout: Option<Duration>,
    pub min_tls_version: Option<TlsVersion>,
    pub max_tls_version: Option<TlsVersion>,
}

impl TransportOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_min_tls_version(mut self, version: TlsVersion) -> Self {
        self.min_tls_version = Some(version);
        self
    }

    pub fn with_max_tls_version(mut self, version: TlsVersion) -> Self {
        self.max_tls_version = Some(version);
        self
    }

    /// Returns a copy where every field set in `over` replaces this one's.
    pub fn merge(&self, over: &TransportOptions) -> TransportOptions {
        TransportOptions {
            timeout: over.timeout.or(self.timeout),
            connect_timeout: over.connect_timeout.or(self.connect_timeout),
            read_timeout: over.read_timeout.or(self.read_timeout),
            min_tls_version: over.min_tls_version.or(self.min_tls_version),
            max_tls_version: over.max_tls_version.or(self.max_tls_version),
        }
    }

    pub(crate) fn apply(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.read_timeout {
            builder = builder.read_timeout(timeout);
        }
        if let Some(version) = self.min_tls_version {
            builder = builder.min_tls_version(version.to_reqwest());
        }
        if let Some(version) = self.max_tls_version {
            builder = builder.max_tls_version(version.to_reqwest());
        }
        builder
    }
}

/// Partial client configuration. Any field may be unset; see [`resolve`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub base_url: Option<String>,
    /// Sent as the `Plaid-Version` header when set.
    pub api_version: Option<String>,
    pub transport: TransportOptions,
}

impl Config {
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_environment(self, environment: Environment) -> Self {
        self.with_base_url(environment.base_url())
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }

    /// Reads defaults from the process environment.
    ///
    /// - `PLAID_CLIENT_ID`, `PLAID_SECRET`
    /// - `PLAID_BASE_URL`, or `PLAID_ENV` (`sandbox`, `development`, `production`)
    /// - `PLAID_VERSION`
    /// - `PLAID_TIMEOUT_SECS`, `PLAID_RECV_TIMEOUT_SECS`
    ///
    /// Unset variables leave the field unset. Missing credentials are not an
    /// error here; they are reported when a call tries to resolve them.
    pub fn from_env() -> Result<Config, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match (var("PLAID_BASE_URL"), var("PLAID_ENV")) {
            (Some(url), _) => Some(url),
            (None, Some(env)) => Some(env.parse::<Environment>()?.base_url().to_string()),
            (None, None) => None,
        };

        let transport = TransportOptions {
            timeout: parse_secs("PLAID_TIMEOUT_SECS", var("PLAID_TIMEOUT_SECS"))?,
            read_timeout: parse_secs("PLAID_RECV_TIMEOUT_SECS", var("PLAID_RECV_TIMEOUT_SECS"))?,
            ..TransportOptions::default()
        };

        Ok(Config {
            client_id: var("PLAID_CLIENT_ID"),
            secret: var("PLAID_SECRET"),
            base_url,
            api_version: var("PLAID_VERSION"),
            transport,
        })
    }
}

fn parse_secs(name: &'static str, value: Option<String>) -> Result<Option<Duration>, Error> {
    value
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| Error::InvalidSetting { name, value: v })
        })
        .transpose()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Configuration with every required field present. Only [`resolve`] builds one.
#[derive(Clone)]
pub struct ResolvedConfig {
    pub(crate) client_id: String,
    pub(crate) secret: String,
    pub(crate) base_url: Url,
    pub(crate) api_version: Option<String>,
    pub(crate) transport: TransportOptions,
}

impl ResolvedConfig {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn transport(&self) -> &TransportOptions {
        &self.transport
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Merges a per-call configuration over the defaults.
///
/// Each field set in `overrides` wins; transport options merge field by field.
/// Blank strings count as unset. Fails with [`Error::MissingCredential`] when
/// `client_id` or `secret` is still absent afterwards. `defaults` is never modified.
pub fn resolve(overrides: Option<&Config>, defaults: &Config) -> Result<ResolvedConfig, Error> {
    let pick = |field: fn(&Config) -> &Option<String>| -> Option<String> {
        overrides
            .and_then(|o| non_empty(field(o)))
            .or_else(|| non_empty(field(defaults)))
    };

    let client_id = pick(|c| &c.client_id).ok_or(Error::MissingCredential("client_id"))?;
    let secret = pick(|c| &c.secret).ok_or(Error::MissingCredential("secret"))?;
    let base_url = pick(|c| &c.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = Url::parse(&base_url)?;

    let transport = match overrides {
        Some(o) => defaults.transport.merge(&o.transport),
        None => defaults.transport.clone(),
    };

    Ok(ResolvedConfig {
        client_id,
        secret,
        base_url,
        api_version: pick(|c| &c.api_version),
        transport,
    })
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn defaults() -> Config {
        Config::default()
            .with_client_id("default-id")
            .with_secret("default-secret")
    }

    #[test]
    fn resolve_uses_defaults_when_no_override() {
        let resolved = resolve(None, &defaults()).unwrap();
        assert_eq!(resolved.client_id, "default-id");
        assert_eq!(resolved.secret, "default-secret");
        assert_eq!(resolved.base_url.as_str(), "https://sandbox.plaid.com/");
        assert!(resolved.api_version.is_none());
    }

    #[test]
    fn override_fields_win() {
        let over = Config::default()
            .with_secret("call-secret")
            .with_environment(Environment::Production);
        let resolved = resolve(Some(&over), &defaults()).unwrap();
        assert_eq!(resolved.client_id, "default-id");
        assert_eq!(resolved.secret, "call-secret");
        assert_eq!(resolved.base_url.host_str(), Some("production.plaid.com"));
    }

    #[test]
    fn missing_secret_fails() {
        let defaults = Config::default().with_client_id("id");
        let err = resolve(None, &defaults).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("secret")));
    }

    #[test]
    fn missing_client_id_fails_even_with_override() {
        let over = Config::default().with_secret("s");
        let err = resolve(Some(&over), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("client_id")));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let over = Config::default().with_client_id("");
        let resolved = resolve(Some(&over), &defaults()).unwrap();
        assert_eq!(resolved.client_id, "default-id");
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let over = Config::default().with_client_id("  ").with_secret("\t");
        let resolved = resolve(Some(&over), &defaults()).unwrap();
        assert_eq!(resolved.client_id(), "default-id");
        assert_eq!(resolved.secret, "default-secret");
    }

    #[test]
    fn blank_credential_without_default_fails() {
        let defaults = Config::default().with_client_id("id").with_secret(" ");
        let err = resolve(None, &defaults).unwrap_err();
        assert!(matches!(err, Error::MissingCredential("secret")));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let over = Config::default().with_base_url("not a url");
        let err = resolve(Some(&over), &defaults()).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn resolve_does_not_touch_defaults() {
        let defaults = defaults();
        let before = defaults.clone();
        let over = Config::default().with_client_id("other");
        resolve(Some(&over), &defaults).unwrap();
        assert_eq!(defaults, before);
    }

    #[test]
    fn transport_merges_field_by_field() {
        let base = TransportOptions::default()
            .with_timeout(Duration::from_secs(30))
            .with_min_tls_version(TlsVersion::Tls1_2);
        let over = TransportOptions::default().with_timeout(Duration::from_secs(5));
        let merged = base.merge(&over);
        assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
        assert_eq!(merged.min_tls_version, Some(TlsVersion::Tls1_2));
        assert_eq!(merged.read_timeout, None);
    }

    #[test]
    fn environment_parsing() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn tls_version_parsing() {
        assert_eq!("1.2".parse::<TlsVersion>().unwrap(), TlsVersion::Tls1_2);
        assert_eq!("TLSv1.3".parse::<TlsVersion>().unwrap(), TlsVersion::Tls1_3);
        assert!("1.1".parse::<TlsVersion>().is_err());
    }

    #[test]
    fn from_lookup_reads_all_vars() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PLAID_CLIENT_ID", "env-id"),
            ("PLAID_SECRET", "env-secret"),
            ("PLAID_ENV", "development"),
            ("PLAID_VERSION", "2020-09-14"),
            ("PLAID_TIMEOUT_SECS", "12"),
            ("PLAID_RECV_TIMEOUT_SECS", "4"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.client_id.as_deref(), Some("env-id"));
        assert_eq!(config.base_url.as_deref(), Some("https://development.plaid.com"));
        assert_eq!(config.api_version.as_deref(), Some("2020-09-14"));
        assert_eq!(config.transport.timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.transport.read_timeout, Some(Duration::from_secs(4)));
    }

    #[test]
    fn from_lookup_base_url_beats_env() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PLAID_BASE_URL", "http://localhost:9999"),
            ("PLAID_ENV", "production"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
        assert!(config.secret.is_none());
    }

    #[test]
    fn from_lookup_rejects_bad_timeout() {
        let err = Config::from_lookup(|k| {
            (k == "PLAID_TIMEOUT_SECS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { name: "PLAID_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn debug_redacts_secret() {
        let printed = format!("{:?}", defaults());
        assert!(!printed.contains("default-secret"));
        let resolved = resolve(None, &defaults()).unwrap();
        assert!(!format!("{:?}", resolved).contains("default-secret"));
    }
}
