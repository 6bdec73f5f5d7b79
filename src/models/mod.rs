pub mod auth;
pub mod booking;
pub mod config;
pub mod listing;
pub mod review;
