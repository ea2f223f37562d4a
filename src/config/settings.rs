//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_EVENT_CHANNEL_CAPACITY,
    DEFAULT_MAIL_FROM, DEFAULT_MAIL_TO, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SMTP_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub event_channel_capacity: usize,
    pub mail: MailSettings,
}

/// Settings for the optional change-alert mailer
#[derive(Clone)]
pub struct MailSettings {
    /// Whether the service sends alerts at all
    pub enabled: bool,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub(crate) smtp_pass: Option<String>,
    pub smtp_tls: bool,
    /// Skip server certificate validation (demo relays only)
    pub accept_invalid_certs: bool,
    pub from: String,
    pub to: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("event_channel_capacity", &self.event_channel_capacity)
            .field("mail", &self.mail)
            .finish()
    }
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("enabled", &self.enabled)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &"[REDACTED]")
            .field("smtp_tls", &self.smtp_tls)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            mail: MailSettings::default(),
        }
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: None,
            smtp_pass: None,
            smtp_tls: true,
            accept_invalid_certs: false,
            from: DEFAULT_MAIL_FROM.to_string(),
            to: DEFAULT_MAIL_TO.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            event_channel_capacity: parse_var("EVENT_CHANNEL_CAPACITY")
                .unwrap_or(DEFAULT_EVENT_CHANNEL_CAPACITY),
            mail: MailSettings::from_env(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl MailSettings {
    fn from_env() -> Self {
        Self {
            enabled: flag_var("MAIL_ENABLED").unwrap_or(false),
            smtp_host: env::var("SMTP_HOST").ok().filter(|h| !h.is_empty()),
            smtp_port: parse_var("SMTP_PORT").unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_pass: env::var("SMTP_PASS").ok(),
            smtp_tls: flag_var("SMTP_TLS").unwrap_or(true),
            accept_invalid_certs: flag_var("SMTP_ACCEPT_INVALID_CERTS").unwrap_or(false),
            from: env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
            to: env::var("MAIL_TO").unwrap_or_else(|_| DEFAULT_MAIL_TO.to_string()),
        }
    }

    /// Whether a relay is configured; otherwise alerts are only logged.
    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }

    /// SMTP credentials, when both user and password are set.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.smtp_user, &self.smtp_pass) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        }
    }

    /// Set the SMTP password.
    pub fn with_password(mut self, pass: impl Into<String>) -> Self {
        self.smtp_pass = Some(pass.into());
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn flag_var(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| v == "true" || v == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config {
            database_url: "postgres://user:secret@db/contacts".to_string(),
            mail: MailSettings {
                smtp_user: Some("mailer".to_string()),
                ..MailSettings::default()
            }
            .with_password("hunter2"),
            ..Config::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credentials_require_user_and_password() {
        let mail = MailSettings {
            smtp_user: Some("mailer".to_string()),
            ..MailSettings::default()
        };
        assert!(mail.credentials().is_none());

        let mail = mail.with_password("pw");
        assert_eq!(
            mail.credentials(),
            Some(("mailer".to_string(), "pw".to_string()))
        );
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
