//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::batch::batch_distances_sequential;
use crate::cost::CostModel;
use crate::distance::{min_edit_distance, min_edit_distance_bytes, CostTable};

#[cfg(feature = "parallel")]
use crate::batch::batch_distances;

use super::args::{Cli, CostArgs, Commands};
use super::config::{resolve_config, ConfigSource};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Commands::Distance {
            source,
            target,
            costs,
            bytes,
            table,
        } => {
            let (costs, _) = effective_costs(config_path.as_deref(), &costs)?;
            cmd_distance(&source, &target, &costs, bytes, table)
        }
        Commands::Batch {
            input,
            costs,
            sequential,
        } => {
            let (costs, _) = effective_costs(config_path.as_deref(), &costs)?;
            cmd_batch(input, &costs, sequential)
        }
        Commands::Config { costs, json } => {
            let (model, source) = effective_costs(config_path.as_deref(), &costs)?;
            if json {
                println!("{}", cost_model_json(&model)?);
                Ok(())
            } else {
                cmd_config(&model, &source)
            }
        }
    }
}

/// Resolve the cost model: CLI flags, then config file, then defaults.
pub fn effective_costs(
    config_path: Option<&Path>,
    overrides: &CostArgs,
) -> Result<(CostModel, ConfigSource)> {
    let (file_config, source) = resolve_config(config_path)?;
    let model = file_config
        .merge_with_cli(&overrides.as_overrides())
        .to_cost_model()
        .context("Invalid cost model")?;

    log::info!("using cost model {} (from {})", model, source);
    Ok((model, source))
}

/// Distance command
fn cmd_distance(
    source: &str,
    target: &str,
    costs: &CostModel,
    bytes: bool,
    table: bool,
) -> Result<()> {
    if table {
        let grid = if bytes {
            CostTable::build(source.as_bytes(), target.as_bytes(), costs)?
        } else {
            CostTable::from_strs(source, target, costs)?
        };

        print!("{}", grid);
        println!();
        println!("{}", grid.distance().to_string().green().bold());
        return Ok(());
    }

    let distance = if bytes {
        min_edit_distance_bytes(source.as_bytes(), target.as_bytes(), costs)?
    } else {
        min_edit_distance(source, target, costs)?
    };

    println!("{}", distance);
    Ok(())
}

/// Batch command
fn cmd_batch(input: Option<PathBuf>, costs: &CostModel, sequential: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            run_batch(BufReader::new(file), &mut writer, costs, sequential)
        }
        None => {
            let stdin = io::stdin();
            run_batch(stdin.lock(), &mut writer, costs, sequential)
        }
    }
}

/// Read tab-separated pairs from `reader` and write one distance per line.
///
/// Blank lines are skipped. A line without a tab aborts the batch.
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    costs: &CostModel,
    sequential: bool,
) -> Result<()> {
    let mut pairs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        if let Some(pair) = parse_batch_line(&line, index + 1)? {
            pairs.push(pair);
        }
    }

    let results = if sequential {
        batch_distances_sequential(&pairs, costs)
    } else {
        parallel_distances(&pairs, costs)
    };

    for ((source, target), result) in pairs.iter().zip(results) {
        let distance = result.with_context(|| format!("Failed on pair {:?} -> {:?}", source, target))?;
        writeln!(writer, "{}", distance)?;
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn parallel_distances(
    pairs: &[(String, String)],
    costs: &CostModel,
) -> Vec<crate::error::Result<usize>> {
    batch_distances(pairs, costs)
}

#[cfg(not(feature = "parallel"))]
fn parallel_distances(
    pairs: &[(String, String)],
    costs: &CostModel,
) -> Vec<crate::error::Result<usize>> {
    batch_distances_sequential(pairs, costs)
}

/// Parse one `source<TAB>target` line. Returns `None` for blank lines.
pub fn parse_batch_line(line: &str, line_number: usize) -> Result<Option<(String, String)>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }

    match line.split_once('\t') {
        Some((source, target)) => Ok(Some((source.to_string(), target.to_string()))),
        None => bail!(
            "line {}: expected tab-separated source and target",
            line_number
        ),
    }
}

/// Render the cost model as pretty-printed JSON.
pub fn cost_model_json(costs: &CostModel) -> Result<String> {
    serde_json::to_string_pretty(costs).context("Failed to serialize cost model")
}

/// Config command
fn cmd_config(costs: &CostModel, source: &ConfigSource) -> Result<()> {
    println!("{}", "Cost Model".bold().underline());
    println!();
    println!("  Source:  {}", source.to_string().cyan());
    println!("  Insert:  {}", costs.insert_cost().to_string().green());
    println!("  Delete:  {}", costs.delete_cost().to_string().green());
    println!("  Replace: {}", costs.replace_cost().to_string().green());

    if !costs.is_metric() {
        println!();
        println!(
            "  {}: replace cost exceeds insert + delete cost",
            "Warning".yellow()
        );
    }

    Ok(())
}
