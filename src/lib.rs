//! cotemplate - Commit message templates with co-author trailers
//!
//! This library buffers a commit message template losslessly and extracts
//! the identity named by its `Co-Authored-By:` trailer.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod template;

pub use error::TemplateError;
pub use template::{CO_AUTHOR_TRAILER, Template};
