//! Backend service schema — message shapes and generated gRPC bindings.
//!
//! The backends own their schema; the gateway compiles the same contract
//! into typed bindings ahead of time. Messages are hand-tagged prost
//! structs, and the client/server code is generated by `build.rs` with
//! `tonic_build::manual` (standard protobuf wire format, no `.proto` file).

pub mod order;
pub mod user;
