//! Mapping rules and the edit operations users apply to them.

mod edit;
mod rule;

pub use edit::{apply_assignment, retain_resolvable, set_format_pattern, set_uppercase};
pub use rule::MappingRule;
