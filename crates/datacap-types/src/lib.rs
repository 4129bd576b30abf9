//! Shared types and adapter traits for the Datacap user/privilege subsystem.
//!
//! This crate contains the types shared between the privilege facade and the
//! adapter implementations. Keeping the adapter traits here lets adapter
//! crates compile independently of the feature crates.

pub mod error;
pub mod prelude;
pub mod rights_adapter;
pub mod types;
pub mod user_adapter;

// vim: ts=4
