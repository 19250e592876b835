//! Sink that writes template JSON to a file.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{SaveError, TemplateSink};
use crate::template::Template;

/// Writes templates as JSON to a fixed path, creating parent dirs as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    pretty: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    /// Sink for `<dir>/<name>.json`.
    pub fn in_dir(dir: &Path, name: &str, pretty: bool) -> Self {
        Self::new(dir.join(format!("{name}.json")), pretty)
    }

    /// Default template directory: `~/.local/share/linkmap/templates`.
    pub fn default_dir() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("linkmap")?;
        Ok(xdg_dirs.get_data_home().join("linkmap").join("templates"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSink for FileSink {
    fn save(&self, template: &Template) -> Result<String, SaveError> {
        let json = template.to_json(self.pretty)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SaveError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(
            path = %self.path.display(),
            rules = template.mapping_rules.len(),
            "saved template"
        );
        Ok(self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::suggest;
    use crate::url_model::decompose;
    use tempfile::tempdir;

    fn template() -> Template {
        let url = "https://h/?checkin=2024-01-01&adults=2";
        let parsed = decompose(url).unwrap();
        let rules = suggest(&parsed);
        Template::new(url, parsed, rules)
    }

    #[test]
    fn writes_json_creating_dirs() {
        let dir = tempdir().unwrap();
        let sink = FileSink::in_dir(&dir.path().join("nested"), "partner", true);
        let t = template();
        let location = sink.save(&t).unwrap();
        assert!(location.ends_with("partner.json"));
        assert_eq!(Template::load_from_path(sink.path()).unwrap(), t);
    }

    #[test]
    fn compact_output_is_single_line() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("t.json"), false);
        sink.save(&template()).unwrap();
        let body = std::fs::read_to_string(sink.path()).unwrap();
        assert!(!body.contains('\n'));
    }

    #[test]
    fn unwritable_target_reports_io_error() {
        let dir = tempdir().unwrap();
        // A directory at the target path makes the write fail.
        let target = dir.path().join("taken");
        std::fs::create_dir(&target).unwrap();
        let sink = FileSink::new(&target, true);
        let err = sink.save(&template()).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
        // Retrying after the obstruction is gone succeeds.
        std::fs::remove_dir(&target).unwrap();
        sink.save(&template()).unwrap();
    }
}
