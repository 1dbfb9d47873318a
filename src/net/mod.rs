//! Networking modules for the authentication HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` classifies their failures, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
