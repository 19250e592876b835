//! `linkmap interpret <template> <url>` – read booking values from a link.

use anyhow::{Context, Result};
use linkmap_core::config::LinkmapConfig;
use linkmap_core::render::interpret_with_scheme;
use linkmap_core::template::Template;
use std::path::Path;

pub fn run_interpret(cfg: &LinkmapConfig, template_path: &Path, url: &str) -> Result<()> {
    let template = Template::load_from_path(template_path)?;
    let values = interpret_with_scheme(&template, url, &cfg.default_scheme)
        .with_context(|| format!("interpret {url} with {}", template_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
