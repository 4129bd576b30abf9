//! User privilege facade for the Datacap platform.
//!
//! Wraps one row of the user-information store behind named privilege
//! predicates: system-level admin attributes and project-level design
//! rights. The storage and rights lookups are injected as adapters, so the
//! facade itself performs no I/O beyond a single memoized record load.

pub mod user;

pub use user::UserContext;

// vim: ts=4
