use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("Service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Page returned no content: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Markup did not have the expected shape
    #[error("Unexpected page structure: {message}")]
    PageStructure { message: String },

    // Input errors
    #[error("Invalid day value '{value}': expected an integer")]
    InvalidDay { value: String },

    #[error("Invalid banzuke '{value}': {reason}")]
    InvalidBanzuke { value: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page structure error (expected table or heading missing)
    pub fn page_structure(message: impl Into<String>) -> Self {
        Self::PageStructure {
            message: message.into(),
        }
    }

    /// Create an invalid day error
    pub fn invalid_day(value: impl Into<String>) -> Self {
        Self::InvalidDay {
            value: value.into(),
        }
    }

    /// Create an invalid banzuke error
    pub fn invalid_banzuke(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBanzuke {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Bad user-supplied schedule parameters
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDay { .. } | AppError::InvalidBanzuke { .. }
        )
    }

    /// Failure while talking to the results site
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiNoData { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Page fetched fine but the expected table or heading was missing
    pub fn is_structure_error(&self) -> bool {
        matches!(self, AppError::PageStructure { .. })
    }
}
