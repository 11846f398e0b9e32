//! HTTP integration layer for the murmur validation engine.
//!
//! The request-binding side of validation: a body extractor that runs the
//! shared [`Validator`](murmur_core::validation::Validator) before handler
//! code executes, and the error type that turns rule violations into
//! client-facing JSON responses.

pub mod error;
pub mod extract;
