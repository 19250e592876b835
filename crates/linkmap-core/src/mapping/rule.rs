//! Mapping rule: one slot bound to one internal variable.

use serde::{Deserialize, Serialize};

use crate::catalog::InternalVariable;
use crate::url_model::{Slot, SlotId, SlotKind};

/// Binding of a slot identity to an internal variable.
///
/// `target_kind`, `name` and `ordinal` duplicate the slot's identity so the
/// rule can be displayed without resolving it against a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    pub slot_id: SlotId,
    pub target_kind: SlotKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ordinal: usize,
    pub source_variable: InternalVariable,
    /// Format hint; only meaningful for date variables. Empty when unset.
    #[serde(default)]
    pub format_pattern: String,
    #[serde(default)]
    pub uppercase: bool,
}

impl MappingRule {
    pub fn for_slot(
        slot: &Slot,
        variable: InternalVariable,
        format_pattern: &str,
        uppercase: bool,
    ) -> Self {
        Self {
            slot_id: slot.id(),
            target_kind: slot.kind,
            name: slot.name.clone(),
            ordinal: slot.ordinal,
            source_variable: variable,
            format_pattern: format_pattern.to_string(),
            uppercase,
        }
    }

    /// Rule as a fresh manual assignment would create it.
    pub fn with_defaults(slot: &Slot, variable: InternalVariable) -> Self {
        Self::for_slot(slot, variable, variable.default_format(), false)
    }
}
