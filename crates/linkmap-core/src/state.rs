//! Editor state as explicit transitions: `(state, action) -> state`.
//!
//! A failed transition returns an error and leaves the caller holding the
//! previous state untouched.

use crate::catalog::InternalVariable;
use crate::error::TemplateError;
use crate::mapping::{self, MappingRule};
use crate::suggest::suggest;
use crate::template::Template;
use crate::url_model::{decompose, sanitize_input_with_scheme, ParsedUrl, SlotId};

/// One user action against the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sanitize and parse a new example URL; all rules from the previous
    /// parse are dropped.
    Parse(String),
    /// Replace the rule set with fresh suggestions for the current parse.
    Suggest,
    /// Assign a variable to a slot, or clear it with `None`.
    Assign {
        slot_id: SlotId,
        variable: Option<InternalVariable>,
    },
    SetFormat { slot_id: SlotId, pattern: String },
    SetUppercase { slot_id: SlotId, uppercase: bool },
}

/// Current example URL, its decomposition and the rules bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    default_scheme: String,
    example: Option<(String, ParsedUrl)>,
    rules: Vec<MappingRule>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_default_scheme("https")
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor whose URL sanitation prepends `scheme` to scheme-less input.
    pub fn with_default_scheme(scheme: &str) -> Self {
        Self {
            default_scheme: scheme.to_string(),
            example: None,
            rules: Vec::new(),
        }
    }

    pub fn example_url(&self) -> Option<&str> {
        self.example.as_ref().map(|(url, _)| url.as_str())
    }

    pub fn parsed(&self) -> Option<&ParsedUrl> {
        self.example.as_ref().map(|(_, parsed)| parsed)
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Applies one action, producing the next state.
    ///
    /// Only `Parse` can fail. Edits issued before any URL was parsed are no-ops.
    pub fn apply(&self, action: Action) -> Result<EditorState, TemplateError> {
        let mut next = self.clone();
        match action {
            Action::Parse(raw) => {
                let clean = sanitize_input_with_scheme(&raw, &self.default_scheme);
                if clean.is_empty() {
                    return Err(TemplateError::MissingUrl);
                }
                let parsed = decompose(&clean)?;
                next.example = Some((clean, parsed));
                next.rules = Vec::new();
            }
            Action::Suggest => {
                if let Some(parsed) = self.parsed() {
                    next.rules = suggest(parsed);
                }
            }
            Action::Assign { slot_id, variable } => {
                if let Some(parsed) = self.parsed() {
                    next.rules = mapping::apply_assignment(&self.rules, &slot_id, variable, parsed);
                }
            }
            Action::SetFormat { slot_id, pattern } => {
                next.rules = mapping::set_format_pattern(&self.rules, &slot_id, &pattern);
            }
            Action::SetUppercase { slot_id, uppercase } => {
                next.rules = mapping::set_uppercase(&self.rules, &slot_id, uppercase);
            }
        }
        Ok(next)
    }

    /// Applies actions in order, stopping at the first failure.
    pub fn apply_all<I>(&self, actions: I) -> Result<EditorState, TemplateError>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .try_fold(self.clone(), |state, action| state.apply(action))
    }

    /// Snapshot of the current state as a template; `None` before any parse.
    pub fn template(&self) -> Option<Template> {
        let (url, parsed) = self.example.as_ref()?;
        Some(Template::new(url, parsed.clone(), self.rules.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::SlotKind;

    fn query(name: &str, ordinal: usize) -> SlotId {
        SlotId::new(SlotKind::QueryParam, Some(name.to_string()), ordinal)
    }

    #[test]
    fn parse_then_suggest() {
        let s = EditorState::new()
            .apply_all([
                Action::Parse("hotel.example.com/?adults=2&code=x".into()),
                Action::Suggest,
            ])
            .unwrap();
        assert_eq!(
            s.example_url(),
            Some("https://hotel.example.com/?adults=2&code=x")
        );
        assert_eq!(s.parsed().unwrap().scheme, "https");
        assert_eq!(s.rules().len(), 2);
    }

    #[test]
    fn failed_parse_keeps_previous_state() {
        let s = EditorState::new()
            .apply_all([Action::Parse("https://h/?adults=2".into()), Action::Suggest])
            .unwrap();
        let err = s.apply(Action::Parse("https://".into())).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidUrl(_)));
        assert_eq!(s.rules().len(), 1);
        assert_eq!(s.example_url(), Some("https://h/?adults=2"));

        assert_eq!(
            s.apply(Action::Parse("   ".into())).unwrap_err(),
            TemplateError::MissingUrl
        );
    }

    #[test]
    fn reparse_discards_stale_rules() {
        let s = EditorState::new()
            .apply_all([
                Action::Parse("https://h/?adults=2".into()),
                Action::Suggest,
                Action::Parse("https://h/?adults=3".into()),
            ])
            .unwrap();
        assert!(s.rules().is_empty());
    }

    #[test]
    fn edits_flow_through_state() {
        let id = query("promo", 0);
        let s = EditorState::new()
            .apply_all([
                Action::Parse("https://h/?promo=abc".into()),
                Action::Suggest,
                Action::SetUppercase {
                    slot_id: id.clone(),
                    uppercase: false,
                },
                Action::Assign {
                    slot_id: id.clone(),
                    variable: Some(InternalVariable::PromoCode),
                },
            ])
            .unwrap();
        assert_eq!(s.rules().len(), 1);
        assert!(!s.rules()[0].uppercase);

        let cleared = s
            .apply(Action::Assign {
                slot_id: id,
                variable: None,
            })
            .unwrap();
        assert!(cleared.rules().is_empty());
        assert_eq!(s.rules().len(), 1);
    }

    #[test]
    fn edits_before_parse_are_no_ops() {
        let s = EditorState::new()
            .apply_all([
                Action::Suggest,
                Action::Assign {
                    slot_id: query("a", 0),
                    variable: Some(InternalVariable::Adults),
                },
            ])
            .unwrap();
        assert!(s.rules().is_empty());
        assert!(s.template().is_none());
    }

    #[test]
    fn template_snapshot() {
        let s = EditorState::new()
            .apply_all([Action::Parse("https://h/x?nights=2".into()), Action::Suggest])
            .unwrap();
        let t = s.template().unwrap();
        assert_eq!(t.example_url, "https://h/x?nights=2");
        assert_eq!(t.mapping_rules.len(), 1);
        assert_eq!(t.example_parsed.path_segments.len(), 1);
    }

    #[test]
    fn custom_default_scheme() {
        let s = EditorState::with_default_scheme("http")
            .apply(Action::Parse("h.example".into()))
            .unwrap();
        assert_eq!(s.parsed().unwrap().scheme, "http");
    }
}
