//! Networking modules for the publisher endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single timeline fetch and `types` defines the wire
//! schema and asset URL resolution.

pub mod api;
pub mod types;
