use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("invalid postal code")]
    InvalidPostalCode,

    #[error("postal code not found")]
    PostalCodeNotFound,

    #[error("invalid location")]
    InvalidLocation,

    #[error("weather not found for location")]
    WeatherNotFound,

    #[error("invalid weather API key")]
    InvalidApiKey,

    #[error("unexpected status {status} from {service}")]
    UnexpectedStatus { service: &'static str, status: u16 },

    #[error("request to {service} failed: {source}")]
    Upstream {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Expected outcome of a lookup; safe to report to the caller.
    Domain,
    Upstream,
    Configuration,
    Io,
}

impl WeatherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WeatherError::InvalidPostalCode
            | WeatherError::PostalCodeNotFound
            | WeatherError::InvalidLocation
            | WeatherError::WeatherNotFound => ErrorCategory::Domain,
            WeatherError::InvalidApiKey
            | WeatherError::UnexpectedStatus { .. }
            | WeatherError::Upstream { .. }
            | WeatherError::Decode { .. } => ErrorCategory::Upstream,
            WeatherError::ConfigError { .. }
            | WeatherError::InvalidConfigValueError { .. }
            | WeatherError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WeatherError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_classified_as_domain() {
        assert!(WeatherError::InvalidPostalCode.is_domain());
        assert!(WeatherError::PostalCodeNotFound.is_domain());
        assert!(WeatherError::InvalidLocation.is_domain());
        assert!(WeatherError::WeatherNotFound.is_domain());
    }

    #[test]
    fn test_api_key_failure_is_not_a_domain_error() {
        assert_eq!(WeatherError::InvalidApiKey.category(), ErrorCategory::Upstream);
        assert!(!WeatherError::UnexpectedStatus {
            service: "WeatherAPI",
            status: 503
        }
        .is_domain());
    }

    #[test]
    fn test_config_errors_category() {
        let err = WeatherError::MissingConfigError {
            field: "weather_api.api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "Missing required configuration: weather_api.api_key"
        );
    }
}
