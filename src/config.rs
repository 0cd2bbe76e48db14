use std::env;
use std::time::Duration;

/// Built-in HipChat v2 room notification endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.hipchat.com/v2/room/{room}/notification";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Process-wide settings loaded from environment variables.
///
/// Per-project values (token, room, flags) live in the option store and are
/// read fresh for every event; these are only the installation defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout applied to every notification request
    pub timeout: Duration,
    /// Endpoint template used when a project does not override it
    pub default_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = env::var("HIPCHAT_TIMEOUT")
            .ok()
            .and_then(|v| parse_timeout(&v))
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let default_endpoint = match env::var("HIPCHAT_DEFAULT_ENDPOINT") {
            Ok(endpoint) if !endpoint.trim().is_empty() => {
                if !has_room_placeholder(&endpoint) {
                    return Err(ConfigError::MissingRoomPlaceholder);
                }
                endpoint
            }
            _ => DEFAULT_ENDPOINT.to_string(),
        };

        Ok(Self {
            timeout,
            default_endpoint,
        })
    }
}

/// Parses a timeout in seconds; fractions are allowed, zero and negatives are not
fn parse_timeout(value: &str) -> Option<Duration> {
    let secs: f64 = value.trim().parse().ok()?;
    if secs.is_finite() && secs > 0.0 {
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    }
}

/// Endpoint templates accept `{room}` or the legacy `%s` placeholder
pub fn has_room_placeholder(template: &str) -> bool {
    template.contains("{room}") || template.contains("%s")
}

#[derive(Debug)]
pub enum ConfigError {
    MissingRoomPlaceholder,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingRoomPlaceholder => write!(
                f,
                "HIPCHAT_DEFAULT_ENDPOINT must contain a {{room}} placeholder"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
