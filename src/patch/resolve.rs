use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Substring looked for in the page's file name.
    pub pattern: String,
    /// Commerce identifier the page sells under.
    pub id: String,
}

impl Mapping {
    pub fn new(pattern: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("mapping #{0} has an empty pattern")]
    EmptyPattern(usize),
    #[error("mapping for pattern {0:?} has an empty identifier")]
    EmptyId(String),
    #[error("pattern {inner:?} is contained in pattern {outer:?}; lookups would depend on order")]
    Overlap { inner: String, outer: String },
}

/// Ordered filename → commerce identifier table.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Mapping>,
}

impl Catalog {
    /// Patterns must be mutually exclusive as substrings, so first-match and
    /// plain lookup always agree.
    pub fn new(entries: Vec<Mapping>) -> Result<Self, CatalogError> {
        for (i, m) in entries.iter().enumerate() {
            if m.pattern.is_empty() {
                return Err(CatalogError::EmptyPattern(i));
            }
            if m.id.is_empty() {
                return Err(CatalogError::EmptyId(m.pattern.clone()));
            }
        }
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if b.pattern.contains(&a.pattern) {
                    return Err(CatalogError::Overlap {
                        inner: a.pattern.clone(),
                        outer: b.pattern.clone(),
                    });
                }
                if a.pattern.contains(&b.pattern) {
                    return Err(CatalogError::Overlap {
                        inner: b.pattern.clone(),
                        outer: a.pattern.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// First identifier whose pattern occurs in `file_name`, `None` if the
    /// page has no mapping.
    pub fn resolve(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| file_name.contains(m.pattern.as_str()))
            .map(|m| m.id.as_str())
    }

    pub fn entries(&self) -> &[Mapping] {
        &self.entries
    }
}

// ── Tests ──
