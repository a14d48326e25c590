//! Endpoint handlers, one module per backend.
//!
//! Each handler follows the same shape: normalize the inbound request
//! (rejecting structurally invalid input before any backend call), invoke
//! the backend through [`crate::rpc::invoke`], then translate the outcome
//! into an HTTP status plus the uniform envelope.

pub mod orders;
pub mod users;
