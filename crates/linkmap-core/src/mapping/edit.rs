//! User edits on a rule set. Every operation returns a new rule set and keeps
//! at most one rule per slot id.

use crate::catalog::InternalVariable;
use crate::url_model::{ParsedUrl, SlotId};

use super::rule::MappingRule;

/// Assigns `variable` to the slot `slot_id`, or clears it when `variable` is `None`.
///
/// - Clearing removes any rule for the slot.
/// - A slot id that does not resolve in `parsed` leaves the rules unchanged.
/// - A new rule gets the variable's default format and `uppercase = false`.
/// - Reassigning an existing rule resets the format to the new variable's
///   default; `uppercase` survives only if the variable is unchanged.
pub fn apply_assignment(
    rules: &[MappingRule],
    slot_id: &SlotId,
    variable: Option<InternalVariable>,
    parsed: &ParsedUrl,
) -> Vec<MappingRule> {
    let Some(variable) = variable else {
        tracing::debug!(slot = %slot_id, "cleared mapping");
        return rules
            .iter()
            .filter(|r| &r.slot_id != slot_id)
            .cloned()
            .collect();
    };

    let Some(slot) = parsed.resolve(slot_id) else {
        tracing::debug!(slot = %slot_id, "ignoring assignment to unknown slot");
        return rules.to_vec();
    };

    let mut out = Vec::with_capacity(rules.len() + 1);
    let mut replaced = false;
    for rule in rules {
        if &rule.slot_id != slot_id {
            out.push(rule.clone());
        } else if !replaced {
            let mut next = MappingRule::with_defaults(slot, variable);
            next.uppercase = rule.source_variable == variable && rule.uppercase;
            out.push(next);
            replaced = true;
        }
    }
    if !replaced {
        out.push(MappingRule::with_defaults(slot, variable));
    }
    tracing::debug!(slot = %slot_id, %variable, replaced, "assigned mapping");
    out
}

/// Sets the format pattern of the rule for `slot_id`; no-op without a rule.
pub fn set_format_pattern(rules: &[MappingRule], slot_id: &SlotId, pattern: &str) -> Vec<MappingRule> {
    update(rules, slot_id, |r| r.format_pattern = pattern.to_string())
}

/// Sets the uppercase flag of the rule for `slot_id`; no-op without a rule.
pub fn set_uppercase(rules: &[MappingRule], slot_id: &SlotId, uppercase: bool) -> Vec<MappingRule> {
    update(rules, slot_id, |r| r.uppercase = uppercase)
}

/// Drops rules whose slot does not resolve in `parsed`.
pub fn retain_resolvable(rules: &[MappingRule], parsed: &ParsedUrl) -> Vec<MappingRule> {
    rules
        .iter()
        .filter(|r| parsed.resolve(&r.slot_id).is_some())
        .cloned()
        .collect()
}

fn update(
    rules: &[MappingRule],
    slot_id: &SlotId,
    mut f: impl FnMut(&mut MappingRule),
) -> Vec<MappingRule> {
    rules
        .iter()
        .cloned()
        .map(|mut r| {
            if &r.slot_id == slot_id {
                f(&mut r);
            }
            r
        })
        .collect()
}
