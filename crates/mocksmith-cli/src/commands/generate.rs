use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use mocksmith_core::{config, Engine, EngineConfig};

use crate::args::GenerateArgs;

const DEFAULT_COUNT: usize = 100;

pub fn run(args: &GenerateArgs) -> Result<()> {
    // Load optional mocksmith.toml config
    let file_config = config::read_config(Path::new("."))?;

    let mut engine_config = file_config
        .as_ref()
        .map(config::MocksmithConfig::engine_config)
        .unwrap_or_else(EngineConfig::default);
    if args.seed.is_some() {
        engine_config.seed = args.seed;
    }

    let count = args
        .count
        .or_else(|| file_config.as_ref().and_then(|c| c.generate.count))
        .unwrap_or(DEFAULT_COUNT);

    let schema = super::read_schema(&args.schema)?;
    tracing::debug!(count, seed = ?engine_config.seed, "resolved generation settings");

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Generating {} records...", count));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let engine = Engine::new(engine_config);
    let records = engine
        .generate(&schema, count)
        .context("Generation failed")?;

    pb.finish_with_message(format!("Generating {} records... done", records.len()));

    let json = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(json.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            println!("Wrote {} records to {}", records.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
