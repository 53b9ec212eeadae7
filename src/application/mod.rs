//! Application layer: the operations the SDK offers and the client that runs
//! them against the gateway.
//!
//! Operations are plain values implementing `Operation`; the client wraps them
//! in a request envelope, sends it over a `Transport` and hands each result
//! back to the operation that produced it.

pub mod client;
pub mod operation;
pub mod operations;
