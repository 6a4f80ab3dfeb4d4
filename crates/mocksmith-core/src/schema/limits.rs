//! # Resource Limit Validator
//!
//! Two static computations over the schema tree, run before any value is
//! generated. They are the engine's defense against adversarial schemas:
//! generation itself has no timeout, so unbounded cost must be impossible to
//! express, not merely interrupted.
//!
//! - **Field count**: one per descriptor, recursing into `object.fields` and
//!   into an `array`'s item descriptor (counted once; it is one schema node
//!   regardless of how many instances it will produce).
//! - **Projected items**: what generation would actually materialize. Arrays
//!   multiply their element count by their item's projection, objects sum
//!   their children, and the per-record total is multiplied by the requested
//!   record count.

use crate::config::EngineConfig;
use crate::error::{MocksmithError, Result};
use crate::schema::field::{FieldDescriptor, FieldKind, Schema};

/// Run both limit checks, failing fast on the first violation.
pub fn check_limits(schema: &Schema, records: usize, config: &EngineConfig) -> Result<()> {
    let total_fields = count_fields(schema);
    if total_fields > config.max_fields {
        return Err(MocksmithError::FieldLimitExceeded {
            total: total_fields,
            limit: config.max_fields,
        });
    }

    let per_record = projected_items(schema, config);
    let combined = per_record.saturating_mul(records);
    if combined > config.max_projected_items {
        return Err(MocksmithError::ItemLimitExceeded {
            per_record,
            records,
            combined,
            limit: config.max_projected_items,
        });
    }

    Ok(())
}

/// Total schema nodes, counted recursively.
pub fn count_fields(schema: &Schema) -> usize {
    schema.values().map(field_count).sum()
}

fn field_count(field: &FieldDescriptor) -> usize {
    1 + match &field.kind {
        FieldKind::Object { fields } => count_fields(fields),
        FieldKind::Array {
            item: Some(item), ..
        } => field_count(item),
        _ => 0,
    }
}

/// Items one record of this schema would materialize.
pub fn projected_items(schema: &Schema, config: &EngineConfig) -> usize {
    schema
        .values()
        .fold(0usize, |acc, f| acc.saturating_add(field_items(f, config)))
}

fn field_items(field: &FieldDescriptor, config: &EngineConfig) -> usize {
    match &field.kind {
        FieldKind::Object { fields } => projected_items(fields, config),
        FieldKind::Array {
            item: Some(item),
            count,
            ..
        } => count
            .unwrap_or(config.default_array_count)
            .saturating_mul(field_items(item, config)),
        FieldKind::Array {
            item: None,
            pick_count,
            ..
        } => pick_count.unwrap_or(0),
        _ => 1,
    }
}
