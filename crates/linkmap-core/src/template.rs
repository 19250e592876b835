//! Template: the persisted unit (example URL, its decomposition, its rules).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::mapping::MappingRule;
use crate::url_model::ParsedUrl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub example_url: String,
    pub example_parsed: ParsedUrl,
    pub mapping_rules: Vec<MappingRule>,
}

impl Template {
    pub fn new(example_url: &str, example_parsed: ParsedUrl, mapping_rules: Vec<MappingRule>) -> Self {
        Self {
            example_url: example_url.to_string(),
            example_parsed,
            mapping_rules,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Reads a template previously written by a sink.
    pub fn load_from_path(path: &Path) -> Result<Template> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read template: {}", path.display()))?;
        let template: Template = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse template JSON: {}", path.display()))?;
        Ok(template)
    }
}
