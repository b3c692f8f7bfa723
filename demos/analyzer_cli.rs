use anyhow::{anyhow, Result};
use analyze_redirects::redirect_analyzer::{RedirectAnalyzer, RedirectRecord};
use std::env;
use std::fs;

fn main() -> Result<()> {
    // Get mapping file from command line argument
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <mappings.json> [priority-url]", args[0]);
        return Err(anyhow!("Missing mappings file argument"));
    }

    let data = fs::read_to_string(&args[1])?;
    let records: Vec<RedirectRecord> = serde_json::from_str(&data)?;

    println!("Processing {} mappings from: {}", records.len(), args[1]);

    let mut analyzer = RedirectAnalyzer::new();
    if let Some(priority) = args.get(2) {
        analyzer = analyzer.with_priority_url(priority.clone());
    }

    let start = std::time::Instant::now();
    let analysis = analyzer.analyze(&records);
    let duration = start.elapsed();

    println!("\nResults:");
    println!("Rules generated: {}", analysis.processed.len());
    println!("Duplicate keys: {}", analysis.duplicates.len());
    println!("Conflicting keys: {}", analysis.conflicts.len());

    if !analysis.conflicts.is_empty() {
        println!("\nConflicting mappings:");
        for (i, (key, destinations)) in analysis.conflicts.iter().enumerate() {
            println!("  {}. {}", i + 1, key);
            for destination in destinations {
                println!("     -> {}", destination);
            }
        }
    }

    if !analysis.wildcard_suggestions.is_empty() {
        println!("\nWildcard suggestions:");
        for suggestion in &analysis.wildcard_suggestions {
            println!("  - {}", suggestion);
        }
    }

    println!("\nProcessing time: {:?}", duration);

    Ok(())
}
