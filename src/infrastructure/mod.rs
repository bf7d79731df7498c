// Infrastructure layer - configuration and formatting adapters
pub mod config;
pub mod number_format;
