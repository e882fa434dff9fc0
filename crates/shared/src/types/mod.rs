//! Common types used across the application.

pub mod envelope;
pub mod id;

pub use envelope::{Envelope, EnvelopeStatus};
pub use id::*;
