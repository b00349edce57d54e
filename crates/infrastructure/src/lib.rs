//! Resolver Audit Infrastructure Layer
//!
//! System adapters behind the application ports.
pub mod system;
