//! Spreadsheet-to-location ingestion pipeline.
//!
//! Fetches a workbook from its configured URL, decodes the first sheet into
//! [`RawRow`]s, and normalizes each row into a [`venuemap_core::Location`].
//! Rows whose coordinates cannot be recovered are dropped; the run as a
//! whole either yields the full ordered collection or a single
//! [`IngestError`].

pub mod client;
pub mod coord;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use client::SourceClient;
pub use coord::parse_coordinate;
pub use error::IngestError;
pub use normalize::normalize_row;
pub use pipeline::{load_locations, locations_from_rows};
pub use types::{CellValue, RawRow};
