//! Slots: addressable units extracted from a URL, and their identity keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;

/// Where in the URL a slot was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    PathSegment,
    QueryParam,
    FragmentPathSegment,
    FragmentQueryParam,
}

impl SlotKind {
    /// Query-like kinds carry a name and are keyed by it.
    pub fn is_query_like(self) -> bool {
        matches!(self, SlotKind::QueryParam | SlotKind::FragmentQueryParam)
    }

    fn key_prefix(self) -> &'static str {
        match self {
            SlotKind::PathSegment => "path",
            SlotKind::QueryParam => "query",
            SlotKind::FragmentPathSegment => "fragmentPath",
            SlotKind::FragmentQueryParam => "fragmentQuery",
        }
    }

    fn from_key_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "path" => Some(SlotKind::PathSegment),
            "query" => Some(SlotKind::QueryParam),
            "fragmentPath" => Some(SlotKind::FragmentPathSegment),
            "fragmentQuery" => Some(SlotKind::FragmentQueryParam),
            _ => None,
        }
    }
}

/// One extracted unit of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub kind: SlotKind,
    /// Present for query-like kinds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
    /// Position within this kind's sequence.
    pub ordinal: usize,
}

impl Slot {
    pub(crate) fn path(kind: SlotKind, ordinal: usize, value: &str) -> Self {
        Self {
            kind,
            name: None,
            value: value.to_string(),
            ordinal,
        }
    }

    pub(crate) fn pair(kind: SlotKind, ordinal: usize, name: String, value: String) -> Self {
        Self {
            kind,
            name: Some(name),
            value,
            ordinal,
        }
    }

    pub fn id(&self) -> SlotId {
        SlotId::new(self.kind, self.name.clone(), self.ordinal)
    }
}

/// Identity of a slot: `(kind, ordinal)` for path kinds, `(kind, name, ordinal)`
/// for query-like kinds.
///
/// String form is `kind:ordinal` or `kind:ordinal:name`; the name goes last so
/// it may itself contain `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotId {
    kind: SlotKind,
    name: Option<String>,
    ordinal: usize,
}

impl SlotId {
    /// Builds an id, dropping the name for path kinds and defaulting it to
    /// empty for query-like kinds.
    pub fn new(kind: SlotKind, name: Option<String>, ordinal: usize) -> Self {
        let name = if kind.is_query_like() {
            Some(name.unwrap_or_default())
        } else {
            None
        };
        Self {
            kind,
            name,
            ordinal,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.key_prefix(), self.ordinal)?;
        if let Some(name) = &self.name {
            write!(f, ":{name}")?;
        }
        Ok(())
    }
}

impl FromStr for SlotId {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TemplateError::InvalidSlotId(s.to_string());
        let mut parts = s.splitn(3, ':');
        let kind = parts
            .next()
            .and_then(SlotKind::from_key_prefix)
            .ok_or_else(invalid)?;
        let ordinal: usize = parts
            .next()
            .and_then(|o| o.parse().ok())
            .ok_or_else(invalid)?;
        let name = parts.next();
        match (kind.is_query_like(), name) {
            (true, Some(name)) => Ok(SlotId::new(kind, Some(name.to_string()), ordinal)),
            (false, None) => Ok(SlotId::new(kind, None, ordinal)),
            _ => Err(invalid()),
        }
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SlotId {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ids_ignore_name() {
        let id = SlotId::new(SlotKind::PathSegment, Some("x".into()), 2);
        assert_eq!(id.name(), None);
        assert_eq!(id.to_string(), "path:2");
    }

    #[test]
    fn query_id_string_keeps_colons_in_name() {
        let id = SlotId::new(SlotKind::FragmentQueryParam, Some("a:b".into()), 1);
        assert_eq!(id.to_string(), "fragmentQuery:1:a:b");
        assert_eq!("fragmentQuery:1:a:b".parse::<SlotId>().unwrap(), id);
    }

    #[test]
    fn string_keys_parse_back() {
        for key in ["path:0", "fragmentPath:3", "query:0:checkin", "query:4:"] {
            let id: SlotId = key.parse().unwrap();
            assert_eq!(id.to_string(), key);
        }
    }

    #[test]
    fn malformed_keys_rejected() {
        for key in ["", "path", "path:x", "query:1", "path:1:name", "host:0"] {
            assert!(
                matches!(key.parse::<SlotId>(), Err(TemplateError::InvalidSlotId(_))),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn identity_distinguishes_name_for_query_kinds() {
        let a = Slot::pair(SlotKind::QueryParam, 0, "a".into(), "1".into());
        let b = Slot::pair(SlotKind::QueryParam, 0, "b".into(), "1".into());
        assert_ne!(a.id(), b.id());
        let p = Slot::path(SlotKind::PathSegment, 0, "a");
        let fp = Slot::path(SlotKind::FragmentPathSegment, 0, "a");
        assert_ne!(p.id(), fp.id());
    }

    #[test]
    fn serializes_as_string_key() {
        let id = SlotId::new(SlotKind::QueryParam, Some("adults".into()), 1);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"query:1:adults\"");
        let back: SlotId = serde_json::from_str("\"query:1:adults\"").unwrap();
        assert_eq!(back, id);
    }
}
