//! `linkmap suggest <url>` – show heuristic mapping rules.

use anyhow::Result;
use linkmap_core::config::LinkmapConfig;
use linkmap_core::mapping::MappingRule;
use linkmap_core::suggest::suggest;
use linkmap_core::url_model::parse_input_with_scheme;

pub fn run_suggest(cfg: &LinkmapConfig, url: &str) -> Result<()> {
    let parsed = parse_input_with_scheme(url, &cfg.default_scheme)?;
    print_rules(&suggest(&parsed));
    Ok(())
}

pub(super) fn print_rules(rules: &[MappingRule]) {
    if rules.is_empty() {
        println!("No mapping rules.");
        return;
    }
    println!("{:<28} {:<12} {:<12} {}", "SLOT", "VARIABLE", "FORMAT", "UPPERCASE");
    for r in rules {
        let format = if r.format_pattern.is_empty() {
            "-"
        } else {
            r.format_pattern.as_str()
        };
        println!(
            "{:<28} {:<12} {:<12} {}",
            r.slot_id.to_string(),
            r.source_variable.key(),
            format,
            if r.uppercase { "yes" } else { "no" }
        );
    }
}
