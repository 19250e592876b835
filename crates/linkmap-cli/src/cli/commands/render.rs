//! `linkmap render <template>` – synthesize a deep link.

use anyhow::{Context, Result};
use linkmap_core::render::{render, BookingValues};
use linkmap_core::template::Template;
use std::path::Path;

pub fn run_render(template_path: &Path, values: BookingValues) -> Result<()> {
    let template = Template::load_from_path(template_path)?;
    let link = render(&template, &values)
        .with_context(|| format!("render template {}", template_path.display()))?;
    println!("{link}");
    Ok(())
}
