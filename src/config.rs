// Environment-backed application configuration

/// SMTP settings for the email collaborator
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_name: String,
    pub from_email: String,
}

/// Application configuration, read once at startup
///
/// The token signing secret has no default: startup fails without an
/// explicit TOKEN_SECRET rather than silently running with an insecure
/// fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub database_url: String,
    pub token_secret: String,
    pub email: EmailConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("HOST", "0.0.0.0"),
            port: optional("PORT", "8080"),
            database_url: required("DATABASE_URL")?,
            token_secret: required("TOKEN_SECRET")?,
            email: EmailConfig {
                smtp_host: optional("SMTP_HOST", "localhost"),
                smtp_port: optional("SMTP_PORT", "587").parse().unwrap_or(587),
                smtp_username: optional("SMTP_USERNAME", ""),
                smtp_password: optional("SMTP_PASSWORD", ""),
                from_name: optional("EMAIL_FROM_NAME", "Leadership Values"),
                from_email: optional("EMAIL_FROM_ADDRESS", "no-reply@localhost"),
            },
        })
    }
}
