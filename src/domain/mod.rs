pub mod booking;
pub mod listing;
pub mod review;
pub mod types;
