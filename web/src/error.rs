use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid widget configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("navigation update failed: {0}")]
    Navigation(String),
    #[error("map rendering failed: {0}")]
    Render(String),
    #[error("{0} was not provided; wrap the widgets in <MapSyncProvider>")]
    MissingContext(&'static str),
}
