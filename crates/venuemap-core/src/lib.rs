pub mod app_config;
pub mod config;
pub mod location;
pub mod session;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use location::{Location, Marker};
pub use session::{Phase, Session, PLAYBACK_ERROR_MESSAGE};
