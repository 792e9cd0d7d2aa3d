//! CLI command handlers, one per file.

mod dump;
mod fetch;
mod namespaces;
mod show;
mod tag;

pub use dump::run_dump;
pub use fetch::run_fetch;
pub use namespaces::run_namespaces;
pub use show::{run_raw, run_show};
pub use tag::run_tag;
