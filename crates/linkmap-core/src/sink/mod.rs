//! Save targets for finished templates.
//!
//! The core only depends on the [`TemplateSink`] trait; it hands over a
//! complete [`Template`] and never mutates it, so a failed save can be retried
//! with the same value.

mod error;
mod file;

pub use error::SaveError;
pub use file::FileSink;

use crate::template::Template;

/// Something that can persist or forward a template.
pub trait TemplateSink {
    /// Saves `template`, returning a human-readable location on success.
    fn save(&self, template: &Template) -> Result<String, SaveError>;
}
