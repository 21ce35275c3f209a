use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Files directly under `dir` whose names end with `suffix`, sorted by name.
pub fn list_pages(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read pages directory {}", dir.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.ends_with(suffix)) {
            pages.push(entry.path());
        }
    }
    pages.sort();

    info!("Pages matching *{} in {}: {}", suffix, dir.display(), pages.len());
    Ok(pages)
}

// ── Tests ──
