//! # archcraft-error
//!
//! Unified error handling for archcraft.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. CredentialMissing, NetworkFailed)
//! - **ErrorStatus**: how to treat it (Permanent or Temporary, derived from the kind)
//! - **Context**: the operation plus key/value pairs that locate the cause
//! - **Source**: the underlying error, wrapped instead of leaked
//!
//! ## Usage
//!
//! ```rust
//! use archcraft_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NetworkFailed, "connection reset")
//!         .with_operation("openai::run")
//!         .with_context("model", "gpt-5.2-2025-12-11"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, archcraft_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, callers above only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the archcraft Error
pub type Result<T> = std::result::Result<T, Error>;
