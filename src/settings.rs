use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patch::resolve::{Catalog, Mapping};

const ENV_PREFIX: &str = "BUYCARD";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pages_dir: PathBuf,
    pub page_suffix: String,
    /// CSS text the style block is inserted in front of.
    pub style_anchor: String,
    pub widget: WidgetTemplate,
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetTemplate {
    pub price: String,
    pub network: String,
    pub button_label: String,
    /// `{id}` is replaced by the commerce identifier.
    pub api_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("site/art"),
            page_suffix: "-page.html".into(),
            style_anchor: "@media (max-width: 900px)".into(),
            widget: WidgetTemplate::default(),
            mappings: default_mappings(),
        }
    }
}

impl Default for WidgetTemplate {
    fn default() -> Self {
        Self {
            price: "0.10 USDC".into(),
            network: "Base Sepolia".into(),
            button_label: "Collect via x402".into(),
            api_path: "/api/buy/{id}".into(),
        }
    }
}

impl WidgetTemplate {
    pub fn api_path_for(&self, id: &str) -> String {
        self.api_path.replace("{id}", id)
    }
}

impl Settings {
    /// Defaults, then the optional settings file, then `BUYCARD_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading settings file");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let settings: Settings = builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;
        settings.catalog()?;
        Ok(settings)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.mappings.clone())?)
    }
}

fn default_mappings() -> Vec<Mapping> {
    let mut mappings: Vec<Mapping> = (1..=10)
        .map(|n| Mapping::new(format!("threshold-{:03}", n), format!("genesis-{:03}", n)))
        .collect();
    mappings.push(Mapping::new("hypnagogia", "platform-hypnagogia"));
    mappings.push(Mapping::new("phosphene", "platform-phosphene"));
    mappings
}

// ── Tests ──
