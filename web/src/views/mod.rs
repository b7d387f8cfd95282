pub mod event_map;
pub mod map;
pub mod not_found;
