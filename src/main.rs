// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use dspace_harvest::utils::logging::{
    format_error, format_info, format_label, format_success, format_warning,
};
use dspace_harvest::{
    Config, DspaceClient, ExportFormat, Exporter, FlatRecord, HarvestError, Harvester, SearchMode,
    TranslationTable, Validator, extract_all_uuids, extract_uuid,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dspace_harvest")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Harvest and export metadata from a DSpace repository", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the discovery index
    Search {
        query: String,

        #[arg(short, long, value_enum, default_value_t = SearchMode::Collections)]
        mode: SearchMode,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract flattened metadata for the selected items
    Extract {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item's metadata with translated labels
    View {
        /// Item UUID or any URL containing it
        item: String,

        /// Also print the untouched API response
        #[arg(long)]
        raw: bool,
    },

    /// Export the selected items to a JSON or XLSX file
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the repository API answers
    Verify,
}

#[derive(Args)]
struct SelectionArgs {
    /// Item UUIDs or URLs containing them
    items: Vec<String>,

    /// File whose UUIDs are added to the selection
    #[arg(long, value_name = "FILE")]
    ids_file: Option<PathBuf>,

    /// Select every hit of this search
    #[arg(short, long)]
    query: Option<String>,

    #[arg(short, long, value_enum, default_value_t = SearchMode::Collections)]
    mode: SearchMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dspace_harvest::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let labels = Arc::new(TranslationTable::with_overrides(&config.labels));
    let client =
        DspaceClient::new(&config.repository, labels).context("Failed to create API client")?;
    let harvester = Harvester::new(client, &config.extraction);

    let outcome = match cli.command {
        Commands::Search { query, mode, json } => cmd_search(&harvester, &query, mode, json).await,
        Commands::Extract { selection, json } => cmd_extract(&harvester, &selection, json).await,
        Commands::View { item, raw } => cmd_view(&harvester, &item, raw).await,
        Commands::Export {
            selection,
            format,
            output,
        } => cmd_export(&harvester, &config, &selection, format, output).await,
        Commands::Verify => cmd_verify(&harvester).await,
    };

    match outcome {
        Err(err) if is_no_selection(&err) => {
            eprintln!("{}", format_error("No se seleccionó ningún documento"));
            std::process::exit(1);
        }
        other => other,
    }
}

fn is_no_selection(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<HarvestError>(),
        Some(HarvestError::NoSelection)
    )
}

async fn cmd_search(harvester: &Harvester, query: &str, mode: SearchMode, json: bool) -> Result<()> {
    Validator::validate_query(query)?;

    let results = harvester.client().search(query, mode).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", format_warning(&format!("No results for \"{}\"", query)));
        return Ok(());
    }

    println!("{}", format_info(&format!("{} result(s)", results.len())));
    for (idx, item) in results.iter().enumerate() {
        println!(
            "{:>4}. {}",
            idx + 1,
            Validator::truncate_text(&item.title, 100)
        );
        println!("      {}", item.uuid);
        println!("      {}", item.item_api_url);
    }

    Ok(())
}

async fn cmd_extract(harvester: &Harvester, selection: &SelectionArgs, json: bool) -> Result<()> {
    let uuids = resolve_selection(harvester, selection).await?;
    let outcome = harvester.extract(&uuids).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
        return Ok(());
    }

    for record in &outcome.records {
        print_record(record);
    }

    println!(
        "{}",
        format_success(&format!(
            "{} extracted, {} failed",
            outcome.stats.items_fetched, outcome.stats.items_failed
        ))
    );
    Ok(())
}

async fn cmd_view(harvester: &Harvester, item: &str, raw: bool) -> Result<()> {
    let uuid = extract_uuid(item)?;
    let document = harvester
        .client()
        .fetch_item(&uuid)
        .await
        .context("Error al consultar la API")?;

    println!("{} {}", format_label("API"), document.api_url);

    if document.translated.is_empty() {
        println!("{}", format_warning("El ítem no tiene metadatos visibles"));
    }

    for (label, entries) in &document.translated {
        println!("{}", format_label(label));
        for entry in entries {
            let value = entry.value.as_deref().unwrap_or("");
            match entry.language.as_deref() {
                Some(lang) if !lang.is_empty() => println!("  - {} [{}]", value, lang),
                _ => println!("  - {}", value),
            }
        }
    }

    if raw {
        println!("{}", serde_json::to_string_pretty(&document.raw)?);
    }

    Ok(())
}

async fn cmd_export(
    harvester: &Harvester,
    config: &Config,
    selection: &SelectionArgs,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let format = format.unwrap_or(config.export.default_format);
    let output = output.unwrap_or_else(|| config.export.output_dir.clone());

    let uuids = resolve_selection(harvester, selection).await?;
    let outcome = harvester.extract(&uuids).await?;

    let exporter = Exporter::new(output)?;
    let path = exporter.write(format, &outcome.records)?;

    println!(
        "{}",
        format_success(&format!(
            "{} records written to {}",
            outcome.records.len(),
            path.display()
        ))
    );
    Ok(())
}

async fn cmd_verify(harvester: &Harvester) -> Result<()> {
    let check = harvester.client().verify().await;
    println!("{}", check.format());

    if !check.is_healthy() {
        return Err(anyhow::anyhow!(
            "Repository API at {} is not healthy",
            harvester.client().base_url()
        ));
    }
    Ok(())
}

async fn resolve_selection(harvester: &Harvester, selection: &SelectionArgs) -> Result<Vec<String>> {
    let mut uuids = selection.items.clone();

    if let Some(path) = &selection.ids_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let found = extract_all_uuids(&content);
        info!("Read {} UUIDs from {}", found.len(), path.display());
        uuids.extend(found);
    }

    if let Some(query) = &selection.query {
        Validator::validate_query(query)?;
        let hits = harvester.client().search(query, selection.mode).await;
        uuids.extend(hits.into_iter().map(|hit| hit.uuid));
    }

    Ok(uuids)
}

fn print_record(record: &FlatRecord) {
    println!("\n{} {}", format_label("UUID"), record.uuid());

    if let Some(message) = record.error_message() {
        println!("  {}", format_error(message));
        return;
    }

    if record.is_empty() {
        println!("  {}", format_warning("Sin metadatos visibles"));
        return;
    }

    for (label, value) in record.fields() {
        println!("  {}: {}", format_label(label), value.joined());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_is_recognised() {
        let err: anyhow::Error = HarvestError::NoSelection.into();
        assert!(is_no_selection(&err));

        let other: anyhow::Error = HarvestError::Validation("bad".to_string()).into();
        assert!(!is_no_selection(&other));

        let plain = anyhow::anyhow!("No items selected");
        assert!(!is_no_selection(&plain));
    }
}
