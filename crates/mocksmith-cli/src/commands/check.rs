use std::path::Path;

use anyhow::{Context, Result};

use mocksmith_core::schema::{limits, validate};
use mocksmith_core::{config, EngineConfig};

use crate::args::CheckArgs;

pub fn run(args: &CheckArgs) -> Result<()> {
    let file_config = config::read_config(Path::new("."))?;
    let engine_config = file_config
        .as_ref()
        .map(config::MocksmithConfig::engine_config)
        .unwrap_or_else(EngineConfig::default);

    let schema = super::read_schema(&args.schema)?;

    validate::validate_schema(&schema).context("Schema validation failed")?;

    let total_fields = limits::count_fields(&schema);
    let per_record = limits::projected_items(&schema, &engine_config);
    limits::check_limits(&schema, args.count, &engine_config).context("Limit check failed")?;

    println!("Schema OK: {}", args.schema.display());
    println!(
        "  fields:          {} (limit {})",
        total_fields, engine_config.max_fields
    );
    println!(
        "  items/record:    {}",
        per_record
    );
    println!(
        "  items @ count {}: {} (limit {})",
        args.count,
        per_record * args.count,
        engine_config.max_projected_items
    );

    Ok(())
}
