//! Static, read-only reference datasets consumed by the generators.
//!
//! Everything here is compiled into the binary and immutable, so a single
//! engine can serve concurrent generation calls without locking.

pub mod files;
pub mod finance;
pub mod geo;
pub mod internet;
pub mod lorem;
pub mod names;
