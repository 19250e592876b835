//! URL decomposition into enumerable slots.
//!
//! A URL is split into path segments, query parameters, and whatever the
//! fragment holds (a path, a query string, both, or opaque text). Each unit is
//! a [`Slot`] with a stable [`SlotId`] so mapping rules can refer to it.

mod fragment;
mod sanitize;
mod slot;

pub use fragment::FragmentShape;
pub use sanitize::{sanitize_input, sanitize_input_with_scheme};
pub use slot::{Slot, SlotId, SlotKind};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TemplateError;

/// Full decomposition of one URL. Immutable; re-parsing yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrl {
    pub origin: String,
    pub host: String,
    pub scheme: String,
    pub path_segments: Vec<Slot>,
    pub query_params: Vec<Slot>,
    pub fragment_path_segments: Vec<Slot>,
    pub fragment_query_params: Vec<Slot>,
    /// Which fragment rule fired; `None` when the URL has no fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment_shape: Option<FragmentShape>,
}

impl ParsedUrl {
    /// All slots in suggestion order: query, path, fragment path, fragment query.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.query_params
            .iter()
            .chain(&self.path_segments)
            .chain(&self.fragment_path_segments)
            .chain(&self.fragment_query_params)
    }

    pub fn slot_count(&self) -> usize {
        self.path_segments.len()
            + self.query_params.len()
            + self.fragment_path_segments.len()
            + self.fragment_query_params.len()
    }

    /// Finds the slot with the given identity, if it exists in this parse.
    pub fn resolve(&self, id: &SlotId) -> Option<&Slot> {
        let pool = match id.kind() {
            SlotKind::PathSegment => &self.path_segments,
            SlotKind::QueryParam => &self.query_params,
            SlotKind::FragmentPathSegment => &self.fragment_path_segments,
            SlotKind::FragmentQueryParam => &self.fragment_query_params,
        };
        pool.get(id.ordinal())
            .filter(|s| s.name.as_deref().unwrap_or_default() == id.name().unwrap_or_default())
    }
}

/// Decomposes an absolute URL into slots.
///
/// Fails with [`TemplateError::InvalidUrl`] if the text does not parse or has
/// no host.
pub fn decompose(input: &str) -> Result<ParsedUrl, TemplateError> {
    let url = Url::parse(input).map_err(|e| TemplateError::InvalidUrl(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| TemplateError::InvalidUrl("URL has no host".to_string()))?
        .to_string();

    let path_segments = fragment::path_slots(url.path(), SlotKind::PathSegment);
    let query_params = url
        .query()
        .map(|q| fragment::form_pair_slots(q, SlotKind::QueryParam))
        .unwrap_or_default();

    let (fragment_shape, fragment_path_segments, fragment_query_params) =
        match url.fragment().filter(|f| !f.is_empty()) {
            Some(f) => {
                let parts = fragment::decompose_fragment(f);
                (Some(parts.shape), parts.path_segments, parts.query_params)
            }
            None => (None, Vec::new(), Vec::new()),
        };

    let parsed = ParsedUrl {
        origin: url.origin().ascii_serialization(),
        host,
        scheme: url.scheme().to_string(),
        path_segments,
        query_params,
        fragment_path_segments,
        fragment_query_params,
        fragment_shape,
    };
    tracing::debug!(
        host = %parsed.host,
        slots = parsed.slot_count(),
        fragment = ?parsed.fragment_shape,
        "decomposed URL"
    );
    Ok(parsed)
}

/// Sanitizes raw user input and decomposes it.
///
/// Empty input is reported as [`TemplateError::MissingUrl`] before any parsing.
pub fn parse_input(raw: &str) -> Result<ParsedUrl, TemplateError> {
    parse_input_with_scheme(raw, "https")
}

/// Like [`parse_input`] with a caller-chosen default scheme.
pub fn parse_input_with_scheme(raw: &str, default_scheme: &str) -> Result<ParsedUrl, TemplateError> {
    let clean = sanitize_input_with_scheme(raw, default_scheme);
    if clean.is_empty() {
        return Err(TemplateError::MissingUrl);
    }
    decompose(&clean)
}
