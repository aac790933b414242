//! Domain logic for the video records service.
//!
//! Everything here is pure: field and payload validation, identifier
//! parsing, the resolution tier enumeration and timestamp formatting. No
//! I/O, no async.

pub mod error;
pub mod resolution;
pub mod timestamp;
pub mod types;
pub mod validation;
