//! Command implementations

pub mod config;
pub mod simple;
pub mod words;

pub use config::PlayConfig;
pub use simple::run_simple;
pub use words::write_words;
