//! `rqlite-http` is an async HTTP client for the rqlite distributed
//! database.
//!
//! The crate wraps rqlite's JSON API with ergonomic methods:
//! - [`RqliteClient::ping`]
//! - [`RqliteClient::query`]
//! - [`RqliteClient::execute`]
//! - [`RqliteClient::query_with_params`]
//! - [`RqliteClient::query_as`] (typed row mapping via [`FromRow`])

mod client;
mod decode;
mod encode;
mod error;
mod flags;
mod options;
mod params;
mod types;
mod value;
mod wire;

pub mod row_map;

pub use client::RqliteClient;
pub use decode::decode_cell;
pub use error::RqliteError;
pub use flags::DbFlags;
pub use options::ClientOptions;
pub use params::Parameter;
pub use row_map::{map_rows, Binding, FromRow};
pub use types::{QueryResult, QueryResultSet};
pub use value::Value;

pub type Result<T> = std::result::Result<T, RqliteError>;
