use std::net::SocketAddr;

/// Process-wide configuration, resolved once at startup from the
/// environment. See [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the spreadsheet the location collection is ingested from.
    pub source_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}
