//! Selection and playback state for one viewing session.
//!
//! A single [`Session`] instance is driven by discrete UI events: the user
//! clicks a location (in the list or on the map), the video element reports
//! readiness or failure, or the user dismisses the video panel. Events are
//! handled one at a time; there is no queuing and a new selection always
//! supersedes whatever video state came before it.

use crate::location::Location;

/// Fixed user-facing message shown when a video fails to load.
pub const PLAYBACK_ERROR_MESSAGE: &str = "Could not load the video. Please try again later.";

/// The observable state of a session, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet.
    Idle,
    /// A location is selected but no video is shown.
    SelectedNoVideo,
    /// A video was requested and the element has not confirmed readiness.
    VideoLoading,
    /// The video element confirmed the first frame; panel stays visible
    /// until dismissed or superseded.
    VideoReady,
    /// The video element reported a load failure.
    PlaybackError,
}

/// Selection/playback state machine.
///
/// Invariants, by construction:
/// - a video URL is only ever set together with a selected location;
/// - the loading flag is only set while a video URL is present;
/// - a playback error sticks until the next selection.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<Location>,
    video_url: Option<String>,
    video_loading: bool,
    error: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Location> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    #[must_use]
    pub fn is_video_loading(&self) -> bool {
        self.video_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Derives the current [`Phase`] from the field cross-product.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.video_loading {
            Phase::VideoLoading
        } else if self.video_url.is_some() {
            if self.error.is_some() {
                Phase::PlaybackError
            } else {
                Phase::VideoReady
            }
        } else if self.selected.is_some() {
            Phase::SelectedNoVideo
        } else {
            Phase::Idle
        }
    }

    /// Handles a click on a location in the list or on its map marker.
    ///
    /// Clears any prior error. When the location carries a video URL the
    /// panel enters the loading state; otherwise any previous video state
    /// is dropped and only the selection highlight remains.
    pub fn select_location(&mut self, location: &Location) {
        tracing::debug!(name = %location.name, has_video = location.video_url.is_some(), "location selected");
        self.error = None;
        match &location.video_url {
            Some(url) => {
                self.video_url = Some(url.clone());
                self.video_loading = true;
            }
            None => {
                self.video_url = None;
                self.video_loading = false;
            }
        }
        self.selected = Some(location.clone());
    }

    /// The video element decoded its first frame.
    ///
    /// Meaningful only while a load is pending; a stray callback after a
    /// dismissal or failure is ignored.
    pub fn video_loaded(&mut self) {
        if self.video_loading {
            self.video_loading = false;
        }
    }

    /// The video element reported a load error.
    ///
    /// Ignored when no video is shown; otherwise sets the fixed playback
    /// error message and keeps the selection and video URL so the panel
    /// can display the failure in place.
    pub fn video_failed(&mut self) {
        if self.video_url.is_some() {
            tracing::warn!(url = self.video_url.as_deref(), "video failed to load");
            self.error = Some(PLAYBACK_ERROR_MESSAGE.to_string());
            self.video_loading = false;
        }
    }

    /// The user closed the video panel. The selection highlight persists,
    /// as does any error message until the next selection.
    pub fn dismiss_video(&mut self) {
        self.video_url = None;
        self.video_loading = false;
    }
}
