//! Fragment classification: path-like, query-like, both, or opaque.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::slot::{Slot, SlotKind};

/// Which classification rule a fragment matched.
///
/// Precedence is `?` > (`=` or `&`) > leading `/` > opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentShape {
    /// `path?query`: text before the first `?` is a path, the rest a query.
    PathAndQuery,
    /// `a=1&b=2`: the whole fragment is a query string.
    Query,
    /// `/a/b`: the whole fragment is a path.
    Path,
    /// Anything else: one opaque segment.
    Opaque,
}

/// Slots extracted from one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FragmentSlots {
    pub shape: FragmentShape,
    pub path_segments: Vec<Slot>,
    pub query_params: Vec<Slot>,
}

pub(crate) fn classify(fragment: &str) -> FragmentShape {
    if fragment.contains('?') {
        FragmentShape::PathAndQuery
    } else if fragment.contains('=') || fragment.contains('&') {
        FragmentShape::Query
    } else if fragment.starts_with('/') {
        FragmentShape::Path
    } else {
        FragmentShape::Opaque
    }
}

pub(crate) fn decompose_fragment(fragment: &str) -> FragmentSlots {
    let shape = classify(fragment);
    let (path_segments, query_params) = match shape {
        FragmentShape::PathAndQuery => {
            let (path, query) = fragment.split_once('?').unwrap_or((fragment, ""));
            (
                path_slots(path, SlotKind::FragmentPathSegment),
                pair_slots(query, SlotKind::FragmentQueryParam),
            )
        }
        FragmentShape::Query => (Vec::new(), pair_slots(fragment, SlotKind::FragmentQueryParam)),
        FragmentShape::Path => (path_slots(fragment, SlotKind::FragmentPathSegment), Vec::new()),
        FragmentShape::Opaque => (
            vec![Slot::path(SlotKind::FragmentPathSegment, 0, fragment)],
            Vec::new(),
        ),
    };
    FragmentSlots {
        shape,
        path_segments,
        query_params,
    }
}

/// Splits on `/`, dropping empty components; ordinals follow the filtered sequence.
pub(crate) fn path_slots(path: &str, kind: SlotKind) -> Vec<Slot> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| Slot::path(kind, i, s))
        .collect()
}

/// Splits `a=1&b&&c=2` into percent-decoded pairs; empty pieces consume no
/// ordinal and a piece without `=` becomes a name with an empty value.
///
/// `+` is kept as is; only real query strings treat it as a space.
pub(crate) fn pair_slots(query: &str, kind: SlotKind) -> Vec<Slot> {
    query
        .split('&')
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(i, piece)| {
            let (name, value) = piece.split_once('=').unwrap_or((piece, ""));
            Slot::pair(kind, i, decode(name), decode(value))
        })
        .collect()
}

/// Form-decodes a real query string (`+` means space).
pub(crate) fn form_pair_slots(query: &str, kind: SlotKind) -> Vec<Slot> {
    form_urlencoded::parse(query.as_bytes())
        .enumerate()
        .map(|(i, (k, v))| Slot::pair(kind, i, k.into_owned(), v.into_owned()))
        .collect()
}

fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
