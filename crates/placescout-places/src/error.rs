use thiserror::Error;

/// Errors returned by the places provider client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered with an application-level status other than
    /// the ones the endpoint treats as success.
    #[error("{endpoint} returned status {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: String,
        message: String,
    },

    /// A detail lookup reported success but carried no `result` object.
    #[error("details for place {place_id} had no result")]
    MissingResult { place_id: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
