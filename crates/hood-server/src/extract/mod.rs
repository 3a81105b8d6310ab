//! Request extractors that reject with the JSON [`Error`] body.
//!
//! The wrappers in [`reject`] are drop-in replacements for their axum
//! counterparts. [`Lang`] and [`PgPool`] read the language segment and a
//! pooled database connection; [`Cookies`] reads the request cookies.
//!
//! [`Error`]: crate::handler::Error

mod cookies;
mod lang;
mod pg_pool;
pub mod reject;

pub use crate::extract::cookies::Cookies;
pub use crate::extract::lang::Lang;
pub use crate::extract::pg_pool::PgPool;
pub use crate::extract::reject::{Form, Json, Multipart, Path, Query};
