use std::path::Path;

use anyhow::Result;

use crate::patch::Outcome;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunCounts {
    pub updated: usize,
    pub already_updated: usize,
    pub no_identifier: usize,
    pub pattern_not_found: usize,
    pub failed: usize,
}

impl RunCounts {
    pub fn record(&mut self, result: &Result<Outcome>) {
        match result {
            Ok(Outcome::Updated { .. }) => self.updated += 1,
            Ok(Outcome::AlreadyUpdated) => self.already_updated += 1,
            Ok(Outcome::NoIdentifier) => self.no_identifier += 1,
            Ok(Outcome::PatternNotFound) => self.pattern_not_found += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn print(&self) {
        println!(
            "{} updated, {} already updated, {} without identifier, {} pattern not found, {} failed.",
            self.updated, self.already_updated, self.no_identifier, self.pattern_not_found, self.failed,
        );
    }
}

/// One console line per page.
pub fn line(path: &Path, result: &Result<Outcome>) -> String {
    let p = path.display();
    match result {
        Ok(Outcome::NoIdentifier) => format!("  Skipping {} - no identifier", p),
        Ok(Outcome::AlreadyUpdated) => format!("  {} - already updated", p),
        Ok(Outcome::Updated { id, written: true }) => {
            format!("  ✅ {} - updated with buy card for {}", p, id)
        }
        Ok(Outcome::Updated { id, written: false }) => {
            format!("  {} - would update with buy card for {}", p, id)
        }
        Ok(Outcome::PatternNotFound) => format!("  ⚠️ {} - pattern not found", p),
        Err(e) => format!("  ✗ {} - failed: {:#}", p, e),
    }
}

// ── Tests ──
