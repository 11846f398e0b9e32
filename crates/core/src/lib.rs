//! Domain logic for the murmur social backend.
//!
//! Pure logic only: no database access, no web types, no I/O. The API
//! crate layers HTTP concerns on top of the types defined here.

pub mod error;
pub mod hashtags;
pub mod naming;
pub mod validation;
