//! Using a template: synthesize a deep link from booking values, or read the
//! booking values back out of a link with the same shape.

mod date_pattern;
mod rebuild;
mod values;

pub use values::BookingValues;

use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::catalog::InternalVariable;
use crate::error::TemplateError;
use crate::template::Template;
use crate::url_model::{parse_input_with_scheme, Slot};

use date_pattern::{parse_date_parts, DateParts};

/// Builds a deep link by substituting every mapped slot of the template's
/// example URL with the matching booking value.
///
/// Unmapped slots keep their example values. A rule whose variable has no
/// value fails with [`TemplateError::MissingValue`].
pub fn render(template: &Template, values: &BookingValues) -> Result<String, TemplateError> {
    let mut replacements = HashMap::with_capacity(template.mapping_rules.len());
    for rule in &template.mapping_rules {
        let text = values
            .text_for(rule.source_variable, &rule.format_pattern)
            .ok_or(TemplateError::MissingValue(rule.source_variable))?;
        let text = if rule.uppercase {
            text.to_uppercase()
        } else {
            text
        };
        replacements.insert(rule.slot_id.clone(), text);
    }
    let link = rebuild::rebuild(&template.example_url, &template.example_parsed, &replacements)?;
    tracing::debug!(rules = replacements.len(), %link, "rendered deep link");
    Ok(link)
}

/// Reads booking values from `url` using the template's rules.
///
/// Rules whose slot does not exist in `url`, or whose slot is empty, are
/// skipped. Date parts spread over several slots (e.g. `month`/`day`/`year`)
/// are combined. Path values are percent-decoded.
pub fn interpret(template: &Template, url: &str) -> Result<BookingValues, TemplateError> {
    interpret_with_scheme(template, url, "https")
}

/// Like [`interpret`], prepending `default_scheme` when `url` has none.
pub fn interpret_with_scheme(
    template: &Template,
    url: &str,
    default_scheme: &str,
) -> Result<BookingValues, TemplateError> {
    let parsed = parse_input_with_scheme(url, default_scheme)?;
    let mut out = BookingValues::default();
    let mut check_in = DateParts::default();
    let mut check_out = DateParts::default();

    for rule in &template.mapping_rules {
        let Some(slot) = parsed.resolve(&rule.slot_id) else {
            continue;
        };
        let text = plain_text(slot);
        let value = text.as_str();
        if value.is_empty() {
            continue;
        }
        let variable = rule.source_variable;
        let number = || {
            value.parse::<u32>().map_err(|_| TemplateError::InvalidNumber {
                variable,
                value: value.to_string(),
            })
        };
        match variable {
            InternalVariable::CheckIn => {
                check_in = check_in.merge(parse_date_parts(value, &rule.format_pattern)?)
            }
            InternalVariable::CheckOut => {
                check_out = check_out.merge(parse_date_parts(value, &rule.format_pattern)?)
            }
            InternalVariable::Adults => out.adults = Some(number()?),
            InternalVariable::Children => out.children = Some(number()?),
            InternalVariable::TotalGuests => out.total_guests = Some(number()?),
            InternalVariable::Nights => out.nights = Some(number()?),
            InternalVariable::PromoCode => out.promo_code = Some(value.to_string()),
            InternalVariable::Currency => out.currency = Some(value.to_string()),
            InternalVariable::HotelId => out.hotel_id = Some(value.to_string()),
        }
    }

    out.check_in = complete_date(check_in)?;
    out.check_out = complete_date(check_out)?;
    Ok(out)
}

/// Query values are stored decoded; path values keep their URL escaping.
fn plain_text(slot: &Slot) -> String {
    if slot.kind.is_query_like() {
        slot.value.clone()
    } else {
        percent_decode_str(&slot.value).decode_utf8_lossy().into_owned()
    }
}

fn complete_date(parts: DateParts) -> Result<Option<chrono::NaiveDate>, TemplateError> {
    if parts == DateParts::default() {
        return Ok(None);
    }
    parts.to_date().map(Some).ok_or_else(|| TemplateError::InvalidDate {
        pattern: "YYYY-MM-DD".to_string(),
        value: format!(
            "{}-{}-{}",
            parts.year.map_or("?".to_string(), |y| y.to_string()),
            parts.month.map_or("?".to_string(), |m| m.to_string()),
            parts.day.map_or("?".to_string(), |d| d.to_string()),
        ),
    })
}
