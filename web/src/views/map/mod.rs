pub mod filter_item;
pub mod map_client;
pub mod map_event_item;
pub mod map_marker;
pub mod util;

pub use filter_item::FilterItem;
pub use map_client::MapClient;
pub use map_event_item::MapEventItem;
