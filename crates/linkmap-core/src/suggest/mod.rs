//! Heuristic mapping suggestions: guess which internal variable each slot
//! carries from its name and example value.
//!
//! Rules are tested in a fixed priority order and the first match wins, so a
//! parameter named `checkin_code` binds to `checkIn` even though it also
//! contains `code`.

mod date_guess;

use crate::catalog::InternalVariable;
use crate::mapping::MappingRule;
use crate::url_model::{ParsedUrl, Slot};

use date_guess::guess_date_format;

const CHECK_IN_HINTS: [&str; 5] = ["checkin", "ci", "arrive", "from", "fechaentrada"];
const CHECK_OUT_HINTS: [&str; 5] = ["checkout", "co", "depart", "to", "fechasalida"];

/// A heuristic's verdict for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Suggestion {
    variable: InternalVariable,
    format: &'static str,
    uppercase: bool,
}

impl Suggestion {
    fn plain(variable: InternalVariable) -> Self {
        Self {
            variable,
            format: "",
            uppercase: false,
        }
    }

    fn dated(variable: InternalVariable, format: &'static str) -> Self {
        Self {
            variable,
            format,
            uppercase: false,
        }
    }
}

/// Proposes a fresh rule set for a decomposition.
///
/// Pure: the result does not depend on, and does not merge with, any earlier
/// rules. Slots are visited query first, then path, fragment path, fragment
/// query; unmatched slots produce no rule.
pub fn suggest(parsed: &ParsedUrl) -> Vec<MappingRule> {
    let rules: Vec<MappingRule> = parsed
        .slots()
        .filter_map(|slot| {
            let s = suggest_for_slot(slot)?;
            let format = if s.format.is_empty() {
                s.variable.default_format()
            } else {
                s.format
            };
            Some(MappingRule::for_slot(slot, s.variable, format, s.uppercase))
        })
        .collect();
    tracing::debug!(
        slots = parsed.slot_count(),
        rules = rules.len(),
        "suggested mapping rules"
    );
    rules
}

fn suggest_for_slot(slot: &Slot) -> Option<Suggestion> {
    let name = slot.name.as_deref().unwrap_or_default().to_lowercase();
    let value = slot.value.as_str();
    let contains_any = |hints: &[&str]| hints.iter().any(|h| name.contains(h));

    if contains_any(&CHECK_IN_HINTS) {
        return Some(Suggestion::dated(
            InternalVariable::CheckIn,
            guess_date_format(value),
        ));
    }
    if contains_any(&CHECK_OUT_HINTS) {
        return Some(Suggestion::dated(
            InternalVariable::CheckOut,
            guess_date_format(value),
        ));
    }
    if !value.is_empty() {
        let part = match name.as_str() {
            "month" => Some("MM"),
            "day" => Some("DD"),
            "year" => Some("YYYY"),
            _ => None,
        };
        if let Some(format) = part {
            return Some(Suggestion::dated(InternalVariable::CheckIn, format));
        }
    }
    if name.contains("adult") {
        return Some(Suggestion::plain(InternalVariable::Adults));
    }
    if name.contains("child") {
        return Some(Suggestion::plain(InternalVariable::Children));
    }
    if matches!(name.as_str(), "currency" | "curr") {
        return Some(Suggestion::plain(InternalVariable::Currency));
    }
    if matches!(name.as_str(), "promo" | "promocode" | "code") {
        return Some(Suggestion {
            uppercase: true,
            ..Suggestion::plain(InternalVariable::PromoCode)
        });
    }
    if contains_any(&["hotelcode", "hotelid"]) {
        return Some(Suggestion::plain(InternalVariable::HotelId));
    }
    if name == "nights" {
        return Some(Suggestion::plain(InternalVariable::Nights));
    }
    None
}
