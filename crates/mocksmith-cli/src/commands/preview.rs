use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use mocksmith_core::{Engine, EngineConfig};

use crate::args::PreviewArgs;

/// Values longer than this are truncated in the table.
const CELL_WIDTH: usize = 40;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let schema = super::read_schema(&args.schema)?;

    let engine = Engine::new(EngineConfig::default());
    let records = engine
        .generate(&schema, args.count)
        .context("Generation failed")?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(schema.keys().collect::<Vec<_>>());
    for record in &records {
        let row: Vec<String> = record.values().map(|v| truncate(&v.to_string())).collect();
        table.add_row(row);
    }

    println!("{}", table);
    Ok(())
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= CELL_WIDTH {
        value.to_string()
    } else {
        let head: String = value.chars().take(CELL_WIDTH - 1).collect();
        format!("{}…", head)
    }
}
