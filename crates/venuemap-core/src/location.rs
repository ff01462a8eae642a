//! Canonical location records and the marker descriptors derived from them.

use serde::{Deserialize, Serialize};

/// A venue location as produced by the ingestion pipeline.
///
/// Immutable once constructed; the full collection is replaced atomically
/// when ingestion is re-run. `name` doubles as the selection identifier in
/// the location list and on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name. May be empty when the source row had no resolvable
    /// name column; such rows are still accepted as long as their
    /// coordinates are valid.
    pub name: String,
    /// Street address, empty when absent from the source.
    pub address: String,
    /// Presenter credited for this venue, empty when absent.
    pub presenter: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `None` means the location has no playback affordance.
    pub video_url: Option<String>,
}

impl Location {
    /// Builds the map-widget marker descriptor for this location.
    #[must_use]
    pub fn marker(&self) -> Marker {
        let mut content = self.address.clone();
        if !self.presenter.is_empty() {
            if !content.is_empty() {
                content.push_str(" | ");
            }
            content.push_str("Presented by ");
            content.push_str(&self.presenter);
        }
        Marker {
            position: [self.latitude, self.longitude],
            label: self.name.clone(),
            content,
        }
    }
}

/// Marker descriptor consumed by the map widget: a `[lat, lng]` position
/// plus popup label and content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: [f64; 2],
    pub label: String,
    pub content: String,
}
