//! Wire-format contracts shared between the HR frontend and the REST backend.
//!
//! Everything here mirrors backend JSON one-to-one: resource rows, the
//! create/update payloads, and the pagination envelope. The frontend never
//! invents identifiers or derived fields; the server stays authoritative.

pub mod domain;
pub mod shared;
pub mod system;
