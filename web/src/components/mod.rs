pub mod error;
pub mod error_boundary;
pub mod loading;
pub mod map_sync_provider;

pub use error_boundary::MapErrorBoundary;
pub use map_sync_provider::MapSyncProvider;
