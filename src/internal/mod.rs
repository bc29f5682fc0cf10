pub mod config;
pub mod error;
pub mod formatter;
pub mod input;
pub mod logger;
pub mod models;
