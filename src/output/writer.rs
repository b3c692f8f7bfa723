use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::redirect_analyzer::NormalizedRedirect;

/// Joins the generated rule strings into the flat rules artifact, one
/// rule per line in input order.
pub fn render_rules(processed: &[NormalizedRedirect]) -> String {
    processed
        .iter()
        .map(|entry| entry.pattern.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the rules artifact, creating parent directories as needed.
pub fn write_rules_file(processed: &[NormalizedRedirect], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    fs::write(output_path, render_rules(processed))
        .with_context(|| format!("Failed to write redirects to {}", output_path.display()))?;

    info!("Generated redirects written to: {}", output_path.display());
    Ok(())
}
