//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns,
//! currently request tracing and access logging.

pub mod trace;

pub use trace::Trace;
