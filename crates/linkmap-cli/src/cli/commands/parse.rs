//! `linkmap parse <url>` – list the slots of a URL.

use anyhow::Result;
use linkmap_core::config::LinkmapConfig;
use linkmap_core::url_model::parse_input_with_scheme;

pub fn run_parse(cfg: &LinkmapConfig, url: &str) -> Result<()> {
    let parsed = parse_input_with_scheme(url, &cfg.default_scheme)?;
    println!("origin: {}", parsed.origin);
    if parsed.slot_count() == 0 {
        println!("No slots (bare origin).");
        return Ok(());
    }
    println!("{:<28} {:<20} {}", "SLOT", "NAME", "VALUE");
    for slot in parsed.slots() {
        println!(
            "{:<28} {:<20} {}",
            slot.id().to_string(),
            slot.name.as_deref().unwrap_or("-"),
            slot.value
        );
    }
    Ok(())
}
