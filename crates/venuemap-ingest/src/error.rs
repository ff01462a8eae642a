use thiserror::Error;

/// Ingestion-level failures. Individual malformed rows are dropped
/// silently; only these run-level conditions surface to the user.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error fetching source workbook: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("could not read source workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("no rows found in the source workbook")]
    EmptySource,

    #[error("no valid locations found in the source data")]
    NoValidLocations,
}
