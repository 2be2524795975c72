//! Error types for the depot release-distribution server.
//!
//! This crate provides the foundation error types used throughout the depot
//! workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow a wrapper struct pattern for clean error handling:
//! - Each concern gets its own struct (`ConfigError`, `EnumerationError`, ...)
//! - Structured concerns add a `*ErrorKind` enum for specific conditions
//! - All errors use `#[track_caller]` for automatic source location capture
//! - `DepotError` boxes the kind enum and converts from every concern
//!
//! All error types are `Clone`: the catalog cache memoizes a build outcome
//! (success or failure) in a single slot and hands copies to every caller.
//!
//! # Examples
//!
//! ```
//! use depot_error::{DepotResult, NotFoundError};
//!
//! fn open_asset() -> DepotResult<String> {
//!     Err(NotFoundError::new("asset no longer exists"))?
//! }
//!
//! match open_asset() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod enumeration;
mod error;
mod not_found;
mod not_implemented;
mod stream;

pub use config::ConfigError;
pub use enumeration::{EnumerationError, EnumerationErrorKind};
pub use error::{DepotError, DepotErrorKind, DepotResult};
pub use not_found::NotFoundError;
pub use not_implemented::NotImplementedError;
pub use stream::StreamError;
