//! CLI command handlers, one per file.

mod check;
mod completions;
mod list;
mod resolve;
mod tag;

pub use check::run_check;
pub use completions::run_completions;
pub use list::run_list;
pub use resolve::{run_resolve, ResolvedOutput};
pub use tag::run_tag;
