//! `linkmap variables` – list the internal variable catalog.

use linkmap_core::catalog::InternalVariable;

pub fn run_variables() {
    println!("{:<12} {:<16} {}", "KEY", "LABEL", "HINT");
    for v in InternalVariable::ALL {
        println!(
            "{:<12} {:<16} {}",
            v.key(),
            v.label(),
            v.format_hint().unwrap_or("")
        );
    }
}
