//! Domain models for the vet-clinic client.
//!
//! These are transient view-model copies of backend state. JSON field names
//! follow the backend; Rust field names are English.

mod clinical;
mod employee;
mod envelope;

pub use clinical::*;
pub use employee::*;
pub use envelope::*;
