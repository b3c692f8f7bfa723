use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use analyze_redirects::output::report;
use analyze_redirects::output::writer::write_rules_file;
use analyze_redirects::redirect_analyzer::{RedirectAnalyzer, RedirectRecord};
use analyze_redirects::utils::logger::init_logger;

/// Analyze old/new URL mappings and generate RedirectMatch rules
#[derive(Debug, Parser)]
#[command(name = "analyze-redirects", version, about)]
struct Cli {
    /// Path to JSON file with URL mappings (Old_URL and New_URL)
    #[arg(short, long)]
    file: PathBuf,

    /// Path to output the generated redirects file
    #[arg(short, long, default_value = "./dist/redirects.txt")]
    output: PathBuf,

    /// Only analyze redirects without generating an output file
    #[arg(short, long)]
    analyze_only: bool,

    /// Suppress console output
    #[arg(short, long)]
    silent: bool,

    /// Destination URL to prefer when a conflicting mapping includes it
    #[arg(short, long)]
    priority_url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = init_logger("logs");

    if !cli.silent {
        println!("Resolved file path: {}", cli.file.display());
    }

    let records = load_mappings(&cli.file, cli.silent)?;

    let mut analyzer = RedirectAnalyzer::new();
    if let Some(priority) = &cli.priority_url {
        analyzer = analyzer.with_priority_url(priority.clone());
    }
    let analysis = analyzer.analyze(&records);

    if !cli.silent && !cli.analyze_only {
        report::print_rules(&analysis);
    }

    if !cli.analyze_only {
        write_rules_file(&analysis.processed, &cli.output)?;
        if !cli.silent {
            println!("{}", "Generated redirects written to:".green());
            println!("{}", cli.output.display().to_string().cyan());
        }
    }

    if !cli.silent {
        report::print_analysis(&analysis);
    }

    Ok(())
}

/// Loads the mapping file into redirect records.
///
/// The analyzer itself never reads ambient state; whatever dataset
/// should be analyzed is loaded here and passed in explicitly.
fn load_mappings(path: &Path, silent: bool) -> Result<Vec<RedirectRecord>> {
    if !silent {
        println!("Loading file: {}", path.display());
    }
    info!("Loading mapping file: {}", path.display());

    let data = fs::read_to_string(path)
        .with_context(|| format!("Error reading JSON file at {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Error parsing JSON mappings in {}", path.display()))
}
