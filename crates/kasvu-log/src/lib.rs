//! Leveled logging to stderr.
//!
//! Records are filtered per target (a `module_path!()`) using the same syntax as
//! `RUST_LOG`: a base level followed by comma separated `target=level` overrides.
//! Logging is a no-op until [`init`] or [`init_with_filters`] has been called.

#[macro_use]
mod log;
mod error;
pub mod fmt;

pub use error::LogError;
pub use fmt::{LogFmt, LogFmtBuilder, LogSpec, SegmentSpec};

pub type Result<T> = core::result::Result<T, LogError>;

pub use log::*;
