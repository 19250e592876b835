//! `linkmap template <url>` – build a template, optionally with overrides, and save it.

use anyhow::{anyhow, Context, Result};
use linkmap_core::catalog::InternalVariable;
use linkmap_core::config::LinkmapConfig;
use linkmap_core::sink::{FileSink, TemplateSink};
use linkmap_core::state::{Action, EditorState};
use linkmap_core::url_model::SlotId;

use super::suggest::print_rules;

/// Manual overrides given on the command line, already parsed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TemplateEdits {
    pub assign: Vec<(SlotId, Option<InternalVariable>)>,
    pub format: Vec<(SlotId, String)>,
    pub uppercase: Vec<(SlotId, bool)>,
}

impl TemplateEdits {
    pub fn from_args(assign: &[String], format: &[String], uppercase: &[String]) -> Result<Self> {
        let assign = assign
            .iter()
            .map(|arg| -> Result<(SlotId, Option<InternalVariable>)> {
                let (slot, var) = split_edit(arg)?;
                let var = match var {
                    "none" | "" => None,
                    key => Some(key.parse::<InternalVariable>()?),
                };
                Ok((slot, var))
            })
            .collect::<Result<_>>()?;
        let format = format
            .iter()
            .map(|arg| -> Result<(SlotId, String)> {
                let (slot, pattern) = split_edit(arg)?;
                Ok((slot, pattern.to_string()))
            })
            .collect::<Result<_>>()?;
        let uppercase = uppercase
            .iter()
            .map(|arg| -> Result<(SlotId, bool)> {
                let (slot, flag) = split_edit(arg)?;
                let flag: bool = flag
                    .parse()
                    .with_context(|| format!("--uppercase {arg}: expected true or false"))?;
                Ok((slot, flag))
            })
            .collect::<Result<_>>()?;
        Ok(Self {
            assign,
            format,
            uppercase,
        })
    }

    /// Editor actions in application order: assignments, then field edits.
    pub fn actions(&self) -> Vec<Action> {
        let assign = self.assign.iter().map(|(slot_id, variable)| Action::Assign {
            slot_id: slot_id.clone(),
            variable: *variable,
        });
        let format = self.format.iter().map(|(slot_id, pattern)| Action::SetFormat {
            slot_id: slot_id.clone(),
            pattern: pattern.clone(),
        });
        let uppercase = self.uppercase.iter().map(|(slot_id, uppercase)| Action::SetUppercase {
            slot_id: slot_id.clone(),
            uppercase: *uppercase,
        });
        assign.chain(format).chain(uppercase).collect()
    }
}

/// Splits `SLOT=VALUE` at the last `=`; slot names may contain `=` but values may not.
fn split_edit(arg: &str) -> Result<(SlotId, &str)> {
    let (slot, value) = arg
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("expected SLOT=VALUE, got {arg:?}"))?;
    let slot: SlotId = slot.parse()?;
    Ok((slot, value))
}

pub fn run_template(
    cfg: &LinkmapConfig,
    url: &str,
    edits: &TemplateEdits,
    allow_suggest: bool,
    save_as: Option<&str>,
) -> Result<()> {
    let mut actions = vec![Action::Parse(url.to_string())];
    if allow_suggest && cfg.auto_suggest {
        actions.push(Action::Suggest);
    }
    actions.extend(edits.actions());

    let state = EditorState::with_default_scheme(&cfg.default_scheme).apply_all(actions)?;
    let template = state
        .template()
        .ok_or_else(|| anyhow!("no URL was parsed"))?;

    let unresolved: Vec<String> = edits
        .assign
        .iter()
        .filter(|(id, _)| template.example_parsed.resolve(id).is_none())
        .map(|(id, _)| id.to_string())
        .collect();
    if !unresolved.is_empty() {
        tracing::warn!(slots = ?unresolved, "ignored assignments to unknown slots");
        eprintln!("warning: no such slot(s): {}", unresolved.join(", "));
    }

    print_rules(&template.mapping_rules);
    println!("{}", template.to_json(cfg.pretty_json)?);

    if let Some(name) = save_as {
        let dir = cfg.resolved_template_dir()?;
        let sink = FileSink::in_dir(&dir, name, cfg.pretty_json);
        let location = sink.save(&template).context("save template")?;
        println!("Saved template to {location}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmap_core::url_model::SlotKind;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_edit_kinds() {
        let edits = TemplateEdits::from_args(
            &strings(&["query:0:ci=checkIn", "path:1=none"]),
            &strings(&["query:0:ci=DD/MM/YYYY"]),
            &strings(&["query:2:promo=false"]),
        )
        .unwrap();
        let ci = SlotId::new(SlotKind::QueryParam, Some("ci".into()), 0);
        assert_eq!(
            edits.assign,
            vec![
                (ci.clone(), Some(InternalVariable::CheckIn)),
                (SlotId::new(SlotKind::PathSegment, None, 1), None),
            ]
        );
        assert_eq!(edits.format, vec![(ci, "DD/MM/YYYY".to_string())]);
        assert_eq!(edits.uppercase.len(), 1);
        assert!(!edits.uppercase[0].1);
        assert_eq!(edits.actions().len(), 4);
    }

    #[test]
    fn name_with_equals_sign() {
        let edits =
            TemplateEdits::from_args(&strings(&["query:0:a=b=adults"]), &[], &[]).unwrap();
        assert_eq!(edits.assign[0].0.name(), Some("a=b"));
        assert_eq!(edits.assign[0].1, Some(InternalVariable::Adults));
    }

    #[test]
    fn rejects_bad_edits() {
        assert!(TemplateEdits::from_args(&strings(&["query:0:ci"]), &[], &[]).is_err());
        assert!(TemplateEdits::from_args(&strings(&["query:0:ci=arrival"]), &[], &[]).is_err());
        assert!(TemplateEdits::from_args(&strings(&["bogus:0=adults"]), &[], &[]).is_err());
        assert!(TemplateEdits::from_args(&[], &[], &strings(&["path:0=yes"])).is_err());
    }
}
