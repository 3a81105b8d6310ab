//! [`Error`], [`ErrorKind`] and [`Result`] for request handlers.

mod http_error;
mod pg_error;
mod service_error;

pub use http_error::{Error, ErrorKind, OrNotFound, Result};
