use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_RECIPIENT: &str = "info@tenacare.com.au";
pub const DEFAULT_SUBJECT: &str = "New Contact Form Message";
pub const DEFAULT_THANK_YOU_PATH: &str = "thank-you.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    StartTls,
    Wrapper,
    None,
}

impl SmtpTls {
    pub fn default_port(self) -> u16 {
        match self {
            SmtpTls::StartTls => 587,
            SmtpTls::Wrapper => 465,
            SmtpTls::None => 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub tls: SmtpTls,
    pub credentials: Option<(String, String)>,
}

/// How outgoing contact mail leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTransport {
    /// Hand the message to the local `sendmail` binary, like a classic host `mail()` call.
    Sendmail,
    Smtp(SmtpSettings),
    /// Only log the message. Meant for local development.
    Log,
}

impl fmt::Display for MailTransport {
    // never print credentials
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailTransport::Sendmail => write!(f, "sendmail"),
            MailTransport::Smtp(settings) => write!(f, "smtp://{}:{}", settings.host, settings.port),
            MailTransport::Log => write!(f, "log"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub recipient: String,
    pub subject: String,
    pub mail_from: Option<String>,
    pub transport: MailTransport,
    pub site_root: PathBuf,
    pub thank_you_path: String,
    pub bind_address: SocketAddr,
    pub sentry_dsn: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // empty values count as unset, same as a blank line in .env
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let recipient = get("CONTACT_RECIPIENT").unwrap_or_else(|| DEFAULT_RECIPIENT.to_string());
        if recipient.parse::<lettre::Address>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_RECIPIENT",
                reason: format!("'{}' is not an email address", recipient),
            });
        }

        let mail_from = get("MAIL_FROM");
        if let Some(from) = &mail_from {
            if from.parse::<lettre::message::Mailbox>().is_err() {
                return Err(ConfigError::InvalidValue {
                    var: "MAIL_FROM",
                    reason: format!("'{}' is not a mailbox", from),
                });
            }
        }

        let transport = match get("MAIL_TRANSPORT").as_deref().unwrap_or("sendmail") {
            "sendmail" => MailTransport::Sendmail,
            "log" => MailTransport::Log,
            "smtp" => MailTransport::Smtp(smtp_settings(&get)?),
            other => {
                return Err(ConfigError::InvalidValue {
                    var: "MAIL_TRANSPORT",
                    reason: format!("expected sendmail, smtp or log, got '{}'", other),
                })
            }
        };

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;

        Ok(SiteConfig {
            recipient,
            subject: get("CONTACT_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            mail_from,
            transport,
            site_root: PathBuf::from(get("SITE_ROOT").unwrap_or_else(|| "site".to_string())),
            thank_you_path: get("THANK_YOU_PATH").unwrap_or_else(|| DEFAULT_THANK_YOU_PATH.to_string()),
            bind_address,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

fn smtp_settings<G>(get: &G) -> Result<SmtpSettings, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let host = get("SMTP_HOST").ok_or(ConfigError::MissingVar("SMTP_HOST"))?;

    let tls = match get("SMTP_TLS").as_deref().unwrap_or("starttls") {
        "starttls" => SmtpTls::StartTls,
        "tls" => SmtpTls::Wrapper,
        "none" => SmtpTls::None,
        other => {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_TLS",
                reason: format!("expected starttls, tls or none, got '{}'", other),
            })
        }
    };

    let port = match get("SMTP_PORT") {
        Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            var: "SMTP_PORT",
            reason: e.to_string(),
        })?,
        None => tls.default_port(),
    };

    let credentials = match (get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
        (Some(user), Some(pass)) => Some((user, pass)),
        (None, None) => None,
        _ => {
            return Err(ConfigError::InvalidValue {
                var: "SMTP_USERNAME",
                reason: "SMTP_USERNAME and SMTP_PASSWORD must be set together".to_string(),
            })
        }
    };

    Ok(SmtpSettings { host, port, tls, credentials })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
        assert_eq!(config.subject, DEFAULT_SUBJECT);
        assert_eq!(config.thank_you_path, DEFAULT_THANK_YOU_PATH);
        assert_eq!(config.transport, MailTransport::Sendmail);
        assert_eq!(config.site_root, PathBuf::from("site"));
        assert_eq!(config.bind_address.port(), 3000);
        assert!(config.mail_from.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn smtp_requires_host() {
        let err = config_from(&[("MAIL_TRANSPORT", "smtp")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SMTP_HOST")));
    }

    #[test]
    fn smtp_port_follows_tls_mode() {
        let config = config_from(&[
            ("MAIL_TRANSPORT", "smtp"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_TLS", "tls"),
        ])
        .unwrap();
        match config.transport {
            MailTransport::Smtp(settings) => {
                assert_eq!(settings.port, 465);
                assert_eq!(settings.tls, SmtpTls::Wrapper);
                assert!(settings.credentials.is_none());
            }
            other => panic!("expected smtp transport, got {:?}", other),
        }
    }

    #[test]
    fn half_configured_credentials_are_rejected() {
        let err = config_from(&[
            ("MAIL_TRANSPORT", "smtp"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_USERNAME", "relay"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "SMTP_USERNAME", .. }));
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let err = config_from(&[("MAIL_TRANSPORT", "carrier-pigeon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "MAIL_TRANSPORT", .. }));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("CONTACT_SUBJECT", "   "), ("MAIL_FROM", "")]).unwrap();
        assert_eq!(config.subject, DEFAULT_SUBJECT);
        assert!(config.mail_from.is_none());
    }

    #[test]
    fn transport_display_hides_credentials() {
        let config = config_from(&[
            ("MAIL_TRANSPORT", "smtp"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_USERNAME", "relay"),
            ("SMTP_PASSWORD", "hunter2"),
        ])
        .unwrap();
        assert_eq!(config.transport.to_string(), "smtp://mail.example.com:587");
    }

    #[test]
    fn bad_recipient_is_rejected() {
        let err = config_from(&[("CONTACT_RECIPIENT", "not an address")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "CONTACT_RECIPIENT", .. }));
    }
}
