pub mod config;
pub mod error;
pub mod generate;
pub mod reference;
pub mod schema;
pub mod telemetry;

// Re-export key types for convenience
pub use config::EngineConfig;
pub use error::{MocksmithError, Result};
pub use generate::{Engine, Record, Value};
pub use schema::{FieldDescriptor, FieldKind, Schema};
