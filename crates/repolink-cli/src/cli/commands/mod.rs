//! CLI command handlers. Each command is in its own file.

mod list;
mod manifest;
mod parse;

pub use list::run_list;
pub use manifest::run_manifest;
pub use parse::run_parse;
