use thiserror::Error;

/// Errors returned by the upstream OpenStreetMap clients.
#[derive(Debug, Error)]
pub enum OsmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder returned zero matches for the town.
    #[error("town not found: {0}")]
    TownNotFound(String),

    /// The upstream service answered with a non-2xx status.
    #[error("{service} returned status {status}")]
    Upstream { service: &'static str, status: u16 },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric field in the response failed to parse.
    #[error("invalid numeric field {field} in {service} response")]
    InvalidNumber {
        service: &'static str,
        field: &'static str,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
