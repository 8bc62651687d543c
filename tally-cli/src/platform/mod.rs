//! Terminal-facing output helpers

pub mod cli;

pub use cli::write_error_with_source;
