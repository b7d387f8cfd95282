pub mod event_date;
