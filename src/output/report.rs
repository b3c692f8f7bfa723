use colored::Colorize;

use crate::redirect_analyzer::AnalysisResult;

/// Prints the generated rules, one line per processed mapping.
pub fn print_rules(analysis: &AnalysisResult) {
    println!(" ");
    println!("Generated RedirectMatch Rules:");
    for entry in &analysis.processed {
        println!("{}", entry.pattern);
    }
}

/// Prints the duplicate, conflict, and wildcard suggestion sections of
/// an analysis report.
pub fn print_analysis(analysis: &AnalysisResult) {
    println!("{}", "\nAnalysis Results:".yellow());

    if !analysis.duplicates.is_empty() {
        println!("{}", "\nDuplicates:".bold());
        for duplicate in &analysis.duplicates {
            println!("{}", duplicate.green());
            let matching = analysis
                .processed
                .iter()
                .filter(|entry| &entry.old_url == duplicate);
            for entry in matching {
                println!("{}", format!("  - {}", entry.new_url).magenta());
            }
        }
    }

    if !analysis.conflicts.is_empty() {
        println!("{}", "\nConflicts:".bold());
        for (key, destinations) in &analysis.conflicts {
            println!("{}", format!("Conflict in URL: {}", key).red());
            for destination in destinations {
                println!("{}", format!("  - {}", destination).magenta());
            }
        }
    }

    if !analysis.wildcard_suggestions.is_empty() {
        println!("{}", "\nWildcard Pattern Suggestions:".bold());
        for (index, suggestion) in analysis.wildcard_suggestions.iter().enumerate() {
            println!("{}", format!("  {}. {}", index + 1, suggestion).green());
        }
    }
}
