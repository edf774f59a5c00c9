//! CLI domain: parse, route, and output only.
//! Manifest work itself lives in the generator.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
