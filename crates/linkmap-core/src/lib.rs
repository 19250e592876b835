pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod mapping;
pub mod render;
pub mod sink;
pub mod state;
pub mod suggest;
pub mod template;
pub mod url_model;

pub use catalog::InternalVariable;
pub use error::TemplateError;
pub use mapping::{apply_assignment, MappingRule};
pub use suggest::suggest;
pub use template::Template;
pub use url_model::{decompose, parse_input, ParsedUrl, Slot, SlotId, SlotKind};
