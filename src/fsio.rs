use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Replace `path` with `bytes` via a sibling temp file and a rename, so the
/// page is either fully rewritten or left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = tmp_path(parent, path);

    let result = (|| -> Result<()> {
        {
            let mut f = fs::File::create(&tmp)
                .with_context(|| format!("Failed to create {}", tmp.display()))?;
            f.write_all(bytes)
                .with_context(|| format!("Failed to write {}", tmp.display()))?;
            f.sync_all()?;
        }
        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(&tmp, meta.permissions())?;
        }
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn tmp_path(parent: &Path, path: &Path) -> PathBuf {
    parent.join(format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|s| s.to_str()).unwrap_or("page"),
        std::process::id()
    ))
}

// ── Tests ──
