//! Adapter for the classic place web-service dialect.
//!
//! The classic dialect speaks GET requests with the API key as a query
//! parameter, encodes field selections as a comma-separated token list,
//! and wraps every response in a `status`/`error_message` envelope around
//! a snake_case result graph.

pub mod client;
pub mod fields;
pub mod normalize;
pub mod types;

pub use client::ClassicBackend;
pub use fields::FieldList;
