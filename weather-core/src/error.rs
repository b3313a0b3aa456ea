use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("City parameter is required.")]
    MissingCity,
}

/// Failures talking to the upstream provider. A non-success HTTP status is
/// not an error here; see [`crate::provider::ProviderReply::Rejected`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Built from a `reqwest::Error` with its URL stripped; the URL carries `appid`.
    #[error("Failed to reach weather provider: {0}")]
    Transport(reqwest::Error),

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Weather provider response contained no weather conditions")]
    MissingConditions,
}

impl ProviderError {
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("No dummy record configured for default location '{0}'")]
    MissingDummyRecord(String),
}
