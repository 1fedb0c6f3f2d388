pub mod config;
pub mod error;
pub mod network;
pub mod reports;
pub mod types;
