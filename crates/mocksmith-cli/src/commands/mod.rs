pub mod check;
pub mod generate;
pub mod preview;

use std::path::Path;

use anyhow::{Context, Result};
use mocksmith_core::Schema;

/// Read and decode a schema JSON file.
pub fn read_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;
    let schema: Schema = serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode schema file {}", path.display()))?;
    Ok(schema)
}
