//! CLI command handlers. Each command is in its own file.

mod interpret;
mod parse;
mod render;
mod suggest;
mod template;
mod variables;

pub use interpret::run_interpret;
pub use parse::run_parse;
pub use render::run_render;
pub use suggest::run_suggest;
pub use template::{run_template, TemplateEdits};
pub use variables::run_variables;
