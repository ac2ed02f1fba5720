use thiserror::Error;

/// Failure modes of a single weather lookup.
///
/// Deliberately only two kinds: the caller either supplied nothing to look
/// up, or the lookup itself failed after dispatch. Transport errors,
/// non-success statuses and unparsable bodies are all `Lookup`; callers get
/// the cause chain for diagnostics but no finer public taxonomy. Neither
/// kind is retried here; retrying is the caller issuing a new call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The city name was empty. Detected before any request is built.
    #[error("no city name was provided")]
    InvalidInput,

    /// The request was dispatched but no complete reading came back.
    #[error("weather lookup for '{city}' failed")]
    Lookup {
        city: String,
        #[source]
        source: anyhow::Error,
    },
}

impl FetchError {
    /// The city the failed lookup was for, when one was dispatched.
    pub fn city(&self) -> Option<&str> {
        match self {
            FetchError::InvalidInput => None,
            FetchError::Lookup { city, .. } => Some(city),
        }
    }
}
