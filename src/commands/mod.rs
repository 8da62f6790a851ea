//! Command implementations

mod co_author;
mod config;
mod show;
mod source;

pub use co_author::co_author;
pub use config::config;
pub use show::show;
