//! Adapter for the v1 place dialect.
//!
//! The v1 dialect authenticates with an `X-Goog-Api-Key` header, encodes
//! field selections as a bitmask rendered into the `X-Goog-FieldMask`
//! header (`*` is the all-fields wildcard), and returns a camelCase result
//! graph with an rpc-status error envelope.

pub mod client;
pub mod fields;
pub mod normalize;
pub mod types;

pub use client::V1Backend;
pub use fields::FieldMask;
