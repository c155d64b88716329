use ::scraper::error::SelectorErrorKind;

/// All errors that can occur during PlusLiga scraping operations.
#[derive(thiserror::Error, Debug)]
pub enum PlusLigaError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The teams index page yielded no season links. Nothing downstream
    /// can run without a season catalog, so this aborts the whole run.
    #[error("no seasons found on the teams index page")]
    NoSeasonsFound,

    /// Failed to write a CSV output file.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while creating output directories or files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for PlusLigaError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        PlusLigaError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlusLigaError>;
