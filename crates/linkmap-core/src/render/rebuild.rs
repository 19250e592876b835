//! Rebuilds a URL from its example with some slot values replaced.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;
use url::{form_urlencoded, Url};

use crate::error::TemplateError;
use crate::url_model::{FragmentShape, ParsedUrl, Slot, SlotId};

/// Characters escaped in a substituted path or fragment-path value, so the
/// value stays one segment and cannot change the fragment's shape.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in fragment query names and values; `+` stays literal.
const FRAGMENT_PAIR: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Replaces the values of the slots in `replacements` within `example`.
///
/// Replacement values are plain text. Path separators (including doubled or
/// trailing slashes) are kept as in the example, unmapped path values keep
/// their original escaping, and query strings are re-encoded.
pub(crate) fn rebuild(
    example: &str,
    parsed: &ParsedUrl,
    replacements: &HashMap<SlotId, String>,
) -> Result<String, TemplateError> {
    let mut url = Url::parse(example).map_err(|e| TemplateError::InvalidUrl(e.to_string()))?;
    let value_of = |slot: &Slot| -> String {
        match replacements.get(&slot.id()) {
            Some(text) if slot.kind.is_query_like() => text.clone(),
            Some(text) => utf8_percent_encode(text, SEGMENT).to_string(),
            None => slot.value.clone(),
        }
    };

    let path = replace_path(url.path(), &parsed.path_segments, &value_of);
    url.set_path(&path);

    if !parsed.query_params.is_empty() {
        url.set_query(Some(&encode_pairs(&parsed.query_params, &value_of)));
    }

    let fragment = url.fragment().map(str::to_string);
    if let (Some(shape), Some(fragment)) = (parsed.fragment_shape, fragment) {
        let rebuilt = match shape {
            FragmentShape::PathAndQuery => {
                let (path, _) = fragment.split_once('?').unwrap_or((fragment.as_str(), ""));
                format!(
                    "{}?{}",
                    replace_path(path, &parsed.fragment_path_segments, &value_of),
                    encode_fragment_pairs(&parsed.fragment_query_params, &value_of)
                )
            }
            FragmentShape::Query => {
                encode_fragment_pairs(&parsed.fragment_query_params, &value_of)
            }
            FragmentShape::Path => {
                replace_path(&fragment, &parsed.fragment_path_segments, &value_of)
            }
            FragmentShape::Opaque => parsed
                .fragment_path_segments
                .first()
                .map(&value_of)
                .unwrap_or(fragment),
        };
        url.set_fragment(Some(&rebuilt));
    }

    Ok(url.to_string())
}

/// Walks `/`-separated components, swapping each non-empty one for its slot's value.
fn replace_path(original: &str, segments: &[Slot], value_of: &impl Fn(&Slot) -> String) -> String {
    let mut next = segments.iter();
    original
        .split('/')
        .map(|component| {
            if component.is_empty() {
                String::new()
            } else {
                next.next()
                    .map(value_of)
                    .unwrap_or_else(|| component.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_pairs(pairs: &[Slot], value_of: &impl Fn(&Slot) -> String) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for slot in pairs {
        serializer.append_pair(slot.name.as_deref().unwrap_or_default(), &value_of(slot));
    }
    serializer.finish()
}

fn encode_fragment_pairs(pairs: &[Slot], value_of: &impl Fn(&Slot) -> String) -> String {
    pairs
        .iter()
        .map(|slot| {
            let name = slot.name.as_deref().unwrap_or_default();
            format!(
                "{}={}",
                utf8_percent_encode(name, FRAGMENT_PAIR),
                utf8_percent_encode(&value_of(slot), FRAGMENT_PAIR)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
