use std::time::Duration;

use crate::client::error::ConfigError;

/// Base path of the REST API when `LOGI_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Configuration for the console client
///
/// Values are baked in at build time since the console runs in the browser and has no
/// process environment to read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base path prepended to every API endpoint, without a trailing slash.
    pub api_base: String,

    /// How often the notification badge is refreshed (seconds).
    pub notification_poll_interval_secs: u64,

    /// Rows per page for a freshly mounted list view.
    pub default_page_size: u32,

    /// Page sizes offered by the paginator, ascending.
    pub page_size_options: Vec<u32>,
}

impl ClientConfig {
    /// Build the configuration from build-time environment variables
    ///
    /// Reads `LOGI_API_BASE`, `LOGI_NOTIFICATION_POLL_SECS` and `LOGI_DEFAULT_PAGE_SIZE`,
    /// falling back to the defaults for any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("LOGI_API_BASE"),
            option_env!("LOGI_NOTIFICATION_POLL_SECS"),
            option_env!("LOGI_DEFAULT_PAGE_SIZE"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        poll_secs: Option<&str>,
        page_size: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(api_base) = api_base {
            let trimmed = api_base.trim().trim_end_matches('/');
            if trimmed.is_empty() && !api_base.trim().starts_with('/') {
                return Err(ConfigError::InvalidEnvValue {
                    var: "LOGI_API_BASE".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            config.api_base = trimmed.to_string();
        }

        if let Some(poll_secs) = poll_secs {
            config.notification_poll_interval_secs =
                parse_positive("LOGI_NOTIFICATION_POLL_SECS", poll_secs)?;
        }

        if let Some(page_size) = page_size {
            let page_size = parse_positive("LOGI_DEFAULT_PAGE_SIZE", page_size)?;
            config.default_page_size = u32::try_from(page_size).map_err(|_| {
                ConfigError::InvalidEnvValue {
                    var: "LOGI_DEFAULT_PAGE_SIZE".to_string(),
                    reason: "too large".to_string(),
                }
            })?;
        }

        if !config.page_size_options.contains(&config.default_page_size) {
            config.page_size_options.push(config.default_page_size);
            config.page_size_options.sort_unstable();
        }

        Ok(config)
    }

    /// Get notification poll interval as Duration
    pub fn notification_poll_interval(&self) -> Duration {
        Duration::from_secs(self.notification_poll_interval_secs)
    }
}

fn parse_positive(var: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notification_poll_interval_secs: 60,
            default_page_size: 10,
            page_size_options: vec![5, 10, 25, 50],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::client::{config::ClientConfig, error::ConfigError};

    #[test]
    /// Expected: unset variables keep the defaults
    fn defaults_when_unset() {
        let config = ClientConfig::from_values(None, None, None).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.notification_poll_interval(), Duration::from_secs(60));
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    /// Expected: trailing slash removed from the API base
    fn trims_api_base() {
        let config = ClientConfig::from_values(Some("https://logi.example/api/"), None, None).unwrap();

        assert_eq!(config.api_base, "https://logi.example/api");
    }

    #[test]
    /// Expected: a custom default page size is offered by the paginator
    fn custom_page_size_is_added_to_options() {
        let config = ClientConfig::from_values(None, None, Some("20")).unwrap();

        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.page_size_options, vec![5, 10, 20, 25, 50]);
    }

    #[test]
    /// Expected: Err(InvalidEnvValue) for zero or non-numeric values
    fn rejects_invalid_numbers() {
        let zero = ClientConfig::from_values(None, Some("0"), None);
        let garbage = ClientConfig::from_values(None, None, Some("ten"));

        assert!(matches!(
            zero,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "LOGI_NOTIFICATION_POLL_SECS"
        ));
        assert!(matches!(
            garbage,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "LOGI_DEFAULT_PAGE_SIZE"
        ));
    }
}
