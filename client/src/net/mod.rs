//! Networking modules for the careers REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs single HTTP exchanges, `api` maps endpoints to typed
//! calls, and `types` defines the wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
