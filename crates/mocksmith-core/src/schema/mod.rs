//! Schema data model, structural validation, and resource limits.

pub mod field;
pub mod limits;
pub mod validate;

pub use field::{FieldDescriptor, FieldKind, Schema};
