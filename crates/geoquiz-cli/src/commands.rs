use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use geoquiz_cli::play::run_play;
use geoquiz_cli::resources::{ResourcePaths, load_records, load_setups};
use geoquiz_cli::summary::schema_table;
use geoquiz_core::{LogRenderer, MapSession};
use geoquiz_schema::{build_schema, load_regions, write_country_schema};

use crate::cli::{BuildSchemaArgs, ResourceArgs};

pub fn run_play_command(args: &ResourceArgs) -> Result<()> {
    let paths = ResourcePaths::resolve(args.schema.as_deref(), args.style.as_deref());
    let setups = load_setups(&paths)?;
    let mut session = MapSession::new(setups, LogRenderer).context("starting quiz session")?;

    println!("{}", geoquiz_cli::play::HELP);
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    run_play(&mut session, stdin, &mut stdout)
}

pub fn run_countries(args: &ResourceArgs) -> Result<()> {
    let paths = ResourcePaths::resolve(args.schema.as_deref(), args.style.as_deref());
    let records = load_records(&paths)?;
    println!("{}", schema_table(&records));
    Ok(())
}

pub fn run_build_schema(args: &BuildSchemaArgs) -> Result<usize> {
    let regions = load_regions(&args.regions)
        .with_context(|| format!("loading regions {}", args.regions.display()))?;
    let built = build_schema(regions);
    for (sovereignty, region) in &built.hidden {
        tracing::info!(%sovereignty, %region, "hidden: too small to draw");
    }
    write_country_schema(&args.output, &built.records)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Wrote {} countries to {} ({} regions hidden)",
        built.records.len(),
        args.output.display(),
        built.hidden.len()
    );
    Ok(built.records.len())
}
