pub mod guard;
pub mod resolve;
pub mod transform;
pub mod widget;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::fsio;
use crate::settings::Settings;
use resolve::Catalog;
use transform::{StyleChange, Transform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoIdentifier,
    AlreadyUpdated,
    /// `written` is false only on dry runs.
    Updated { id: String, written: bool },
    PatternNotFound,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub parallel: bool,
}

/// Resolve → guard → transform → write, for a single page.
pub fn process_page(
    path: &Path,
    settings: &Settings,
    catalog: &Catalog,
    dry_run: bool,
) -> Result<Outcome> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let Some(id) = catalog.resolve(&file_name) else {
        return Ok(Outcome::NoIdentifier);
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = guard::inspect(&content);
    debug!(page = %path.display(), ?report, "guard");
    if report.already_updated() {
        return Ok(Outcome::AlreadyUpdated);
    }

    match transform::apply(&content, id, settings) {
        Transform::PatternMissing => Ok(Outcome::PatternNotFound),
        Transform::Patched {
            content: patched,
            style,
            legacy_removed,
        } => {
            if style == StyleChange::AnchorMissing {
                warn!(
                    "{}: style anchor {:?} not found, CSS not injected",
                    path.display(),
                    settings.style_anchor
                );
            }
            debug!(page = %path.display(), ?style, legacy_removed, "patched");
            if !dry_run {
                fsio::write_atomic(path, patched.as_bytes())?;
            }
            Ok(Outcome::Updated {
                id: id.to_string(),
                written: !dry_run,
            })
        }
    }
}

/// Every page is independent; results come back in input order either way.
pub fn process_all(
    pages: &[PathBuf],
    settings: &Settings,
    catalog: &Catalog,
    opts: RunOptions,
) -> Vec<Result<Outcome>> {
    let run = |p: &PathBuf| process_page(p, settings, catalog, opts.dry_run);
    if opts.parallel {
        pages.par_iter().map(run).collect()
    } else {
        pages.iter().map(run).collect()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    struct Site {
        dir: tempfile::TempDir,
        settings: Settings,
        catalog: Catalog,
    }

    fn site(files: &[(&str, &str)]) -> Site {
        let dir = tempfile::tempdir().unwrap();
        for (name, fixture) in files {
            std::fs::copy(
                format!("tests/fixtures/{}", fixture),
                dir.path().join(name),
            )
            .unwrap();
        }
        let settings = Settings::default();
        let catalog = settings.catalog().unwrap();
        Site {
            dir,
            settings,
            catalog,
        }
    }

    impl Site {
        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn read(&self, name: &str) -> String {
            std::fs::read_to_string(self.path(name)).unwrap()
        }

        fn run(&self, name: &str) -> Outcome {
            process_page(&self.path(name), &self.settings, &self.catalog, false).unwrap()
        }
    }

    #[test]
    fn recognised_page_is_updated() {
        let s = site(&[("threshold-003-page.html", "threshold-003-page.html")]);
        assert_eq!(
            s.run("threshold-003-page.html"),
            Outcome::Updated {
                id: "genesis-003".into(),
                written: true
            }
        );
        let expected = std::fs::read_to_string("tests/fixtures/updated-page.html").unwrap();
        assert_eq!(s.read("threshold-003-page.html"), expected);
    }

    #[test]
    fn second_run_is_already_updated() {
        let s = site(&[("threshold-003-page.html", "threshold-003-page.html")]);
        s.run("threshold-003-page.html");
        let once = s.read("threshold-003-page.html");

        assert_eq!(s.run("threshold-003-page.html"), Outcome::AlreadyUpdated);
        assert_eq!(s.read("threshold-003-page.html"), once);
    }

    #[test]
    fn updated_fixture_is_left_alone() {
        let s = site(&[("phosphene-page.html", "updated-page.html")]);
        let before = s.read("phosphene-page.html");
        assert_eq!(s.run("phosphene-page.html"), Outcome::AlreadyUpdated);
        assert_eq!(s.read("phosphene-page.html"), before);
    }

    #[test]
    fn unmapped_page_not_touched() {
        let s = site(&[("about-page.html", "threshold-003-page.html")]);
        let before = std::fs::read("tests/fixtures/threshold-003-page.html").unwrap();
        assert_eq!(s.run("about-page.html"), Outcome::NoIdentifier);
        assert_eq!(std::fs::read(s.path("about-page.html")).unwrap(), before);
    }

    #[test]
    fn pattern_missing_is_byte_identical() {
        let s = site(&[("threshold-004-page.html", "no-details-adjacency-page.html")]);
        let before = std::fs::read(s.path("threshold-004-page.html")).unwrap();
        assert_eq!(s.run("threshold-004-page.html"), Outcome::PatternNotFound);
        assert_eq!(std::fs::read(s.path("threshold-004-page.html")).unwrap(), before);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let s = site(&[("threshold-001-page.html", "threshold-003-page.html")]);
        let before = s.read("threshold-001-page.html");
        let out = process_page(&s.path("threshold-001-page.html"), &s.settings, &s.catalog, true)
            .unwrap();
        assert_eq!(
            out,
            Outcome::Updated {
                id: "genesis-001".into(),
                written: false
            }
        );
        assert_eq!(s.read("threshold-001-page.html"), before);
    }

    #[test]
    fn missing_file_is_an_error() {
        let s = site(&[]);
        assert!(process_page(&s.path("threshold-002-page.html"), &s.settings, &s.catalog, false).is_err());
    }

    #[test]
    fn parallel_matches_sequential_order() {
        let files = [
            ("about-page.html", "threshold-003-page.html"),
            ("hypnagogia-page.html", "threshold-003-page.html"),
            ("threshold-004-page.html", "no-details-adjacency-page.html"),
            ("threshold-007-page.html", "updated-page.html"),
        ];
        let s = site(&files);
        let pages: Vec<_> = files.iter().map(|(n, _)| s.path(n)).collect();
        let opts = RunOptions {
            dry_run: true,
            parallel: true,
        };
        let outcomes: Vec<_> = process_all(&pages, &s.settings, &s.catalog, opts)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::NoIdentifier,
                Outcome::Updated {
                    id: "platform-hypnagogia".into(),
                    written: false
                },
                Outcome::PatternNotFound,
                Outcome::AlreadyUpdated,
            ]
        );
    }
}
